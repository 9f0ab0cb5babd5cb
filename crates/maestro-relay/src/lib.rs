//! Rate-limited command relay: queue, session state, dispatcher, and the
//! world interface its handlers mutate through.

pub mod dispatcher;
pub mod queue;
pub mod session;
pub mod world;

pub use dispatcher::Dispatcher;
pub use queue::{command_queue, CommandReceiver, CommandSender};
