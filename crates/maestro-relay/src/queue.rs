//! Bounded command queue crossing from the listener task to the dispatch
//! loop.

use maestro_proto::Command;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};
use tracing::{debug, warn};

/// Create a command queue with the given capacity.
///
/// The sender half lives on the listener task, the receiver half on the
/// dispatch loop. FIFO; insertion order is the only ordering guarantee —
/// no priority, no deduplication.
pub fn command_queue(capacity: usize) -> (CommandSender, CommandReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (CommandSender { tx }, CommandReceiver { rx })
}

/// Producer half of the command queue.
#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<Command>,
}

impl CommandSender {
    /// Enqueue a command. Never blocks and never errors outward: when the
    /// queue is full the new command is dropped with a warning.
    pub fn enqueue(&self, command: Command) {
        match self.tx.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Full(command)) => {
                warn!("command queue full, dropping {command:?}");
            }
            Err(TrySendError::Closed(_)) => {
                debug!("dispatcher gone, dropping command");
            }
        }
    }
}

/// Consumer half of the command queue. Single consumer.
pub struct CommandReceiver {
    rx: mpsc::Receiver<Command>,
}

impl CommandReceiver {
    /// Dequeue the oldest command, if any. Never blocks.
    pub fn try_dequeue(&mut self) -> Option<Command> {
        match self.rx.try_recv() {
            Ok(command) => Some(command),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maestro_proto::ItemTier;

    fn spawn(name: &str) -> Command {
        Command::SpawnEntity {
            template_name: name.into(),
        }
    }

    #[test]
    fn fifo_order() {
        let (tx, mut rx) = command_queue(8);
        tx.enqueue(spawn("a"));
        tx.enqueue(Command::GiveItem {
            tier: ItemTier::Tier2,
        });
        tx.enqueue(spawn("b"));

        assert_eq!(rx.try_dequeue(), Some(spawn("a")));
        assert_eq!(
            rx.try_dequeue(),
            Some(Command::GiveItem {
                tier: ItemTier::Tier2
            })
        );
        assert_eq!(rx.try_dequeue(), Some(spawn("b")));
        assert_eq!(rx.try_dequeue(), None);
    }

    #[test]
    fn try_dequeue_on_empty_queue_is_none() {
        let (_tx, mut rx) = command_queue(8);
        assert_eq!(rx.try_dequeue(), None);
    }

    #[test]
    fn overflow_drops_the_newest_command() {
        let (tx, mut rx) = command_queue(2);
        tx.enqueue(spawn("a"));
        tx.enqueue(spawn("b"));
        tx.enqueue(spawn("c")); // full, dropped

        assert_eq!(rx.try_dequeue(), Some(spawn("a")));
        assert_eq!(rx.try_dequeue(), Some(spawn("b")));
        assert_eq!(rx.try_dequeue(), None);
    }

    #[test]
    fn enqueue_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = command_queue(2);
        drop(rx);
        tx.enqueue(spawn("a"));
    }
}
