//! Controller wire records, command types, and batch translation.

pub mod command;
pub mod error;
pub mod event;
pub mod translate;

pub use command::{Command, ItemTier};
pub use translate::translate;
