//! Periodic command dispatch.

mod handlers;

use crate::queue::CommandReceiver;
use crate::session::SessionState;
use crate::world::World;

/// Drains the command queue at the host's tick cadence.
///
/// The host drives [`Dispatcher::tick`] from its own timer; every call
/// dequeues at most one command and runs its handler to completion before
/// returning. That caps the externally observable application rate at one
/// command per tick interval regardless of arrival burstiness, which is the
/// core rate-limiting guarantee of the relay.
pub struct Dispatcher<W> {
    queue: CommandReceiver,
    session: SessionState,
    world: W,
}

impl<W: World> Dispatcher<W> {
    pub fn new(queue: CommandReceiver, world: W) -> Self {
        Self {
            queue,
            session: SessionState::new(),
            world,
        }
    }

    /// Process at most one queued command. No-op when the queue is empty.
    pub fn tick(&mut self) {
        if let Some(command) = self.queue.try_dequeue() {
            self.handle(command);
        }
    }

    /// Return the spawn-height offset to its base value.
    ///
    /// Entry point for the external reset trigger; must be invoked from the
    /// same execution context as [`Dispatcher::tick`].
    pub fn reset_spawn_height(&mut self) {
        self.session.reset();
    }

    /// Current spawn-height offset.
    pub fn spawn_height_offset(&self) -> f32 {
        self.session.offset()
    }

    /// The world this dispatcher mutates.
    pub fn world(&self) -> &W {
        &self.world
    }
}
