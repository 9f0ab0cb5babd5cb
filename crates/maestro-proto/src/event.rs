//! Inbound controller records.
//!
//! A batch is a JSON array of records, each an object tagged by an `event`
//! field. Each event kind declares exactly the payload field it expects;
//! anything the controller might send beyond that is ignored.

use serde::Deserialize;

/// A single inbound record, discriminated by its `event` field.
///
/// Unknown event types deserialize as [`ControllerEvent::Unrecognized`]. A
/// record missing the payload its event requires (or missing `event`
/// entirely) fails to deserialize and is skipped by the translator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ControllerEvent {
    SpawnBoss { monster: String },
    SpawnEnemy { monster: String },
    SpawnItem { item: String },
    #[serde(other)]
    Unrecognized,
}
