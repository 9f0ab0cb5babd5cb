//! Batch translation: raw controller messages into typed commands.

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::command::{Command, ItemTier};
use crate::error::TranslateError;
use crate::event::ControllerEvent;

/// Suffix selecting the controller ("master") variant of an entity
/// template.
pub const MASTER_SUFFIX: &str = "Master";

/// Translate one raw inbound message into zero or more commands.
///
/// Never fails outward: an unparsable batch is logged and yields nothing,
/// and a bad record is logged and skipped without aborting its siblings.
/// Output order follows record order within the batch.
pub fn translate(raw: &str) -> Vec<Command> {
    let records: Vec<Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            error!("failed to parse controller batch: {e}");
            return Vec::new();
        }
    };

    let mut commands = Vec::with_capacity(records.len());
    for record in &records {
        match translate_record(record) {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {
                let event = record.get("event").and_then(Value::as_str).unwrap_or("<none>");
                warn!("unhandled controller event type: {event}");
            }
            Err(e) => warn!("skipping controller record: {e}"),
        }
    }
    commands
}

/// Translate a single record into at most one command.
///
/// `Ok(None)` means the record was well-formed but its event type is not
/// one this relay handles.
fn translate_record(record: &Value) -> Result<Option<Command>, TranslateError> {
    let event = ControllerEvent::deserialize(record)
        .map_err(|e| TranslateError::MalformedRecord(e.to_string()))?;

    match event {
        ControllerEvent::SpawnBoss { monster } | ControllerEvent::SpawnEnemy { monster } => {
            if monster.is_empty() {
                return Err(TranslateError::EmptyEntityName);
            }
            Ok(Some(Command::SpawnEntity {
                template_name: format!("{monster}{MASTER_SUFFIX}"),
            }))
        }
        ControllerEvent::SpawnItem { item } => Ok(Some(Command::GiveItem {
            tier: ItemTier::from_label(&item),
        })),
        ControllerEvent::Unrecognized => Ok(None),
    }
}
