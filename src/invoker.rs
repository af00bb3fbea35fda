//! A slot registry of commands with a linear undo-redo history.

mod builder;
mod checkpoint;
mod display;
mod queue;

pub use builder::Builder;
pub use checkpoint::Checkpoint;
pub use display::Display;
pub use queue::Queue;

use crate::socket::{Signal, Slot, Socket};
use crate::{Command, Entry, Error, Result};
use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// A slot registry of commands with a linear undo-redo history.
///
/// Commands are registered into numbered slots and executed by slot. Every execution
/// is pushed onto the undo stack. Undoing pops the most recent execution, inverts it,
/// and pushes it onto the redo stack. Redoing moves it back. Executing a new command
/// clears the redo stack, so an undone future is lost as soon as a new change is made.
///
/// The invoker has no internal locking. It can be moved between threads when its
/// commands and slot allow it, but concurrent callers must serialize access to it.
///
/// # Examples
/// ```
/// # use remote::{doctest::Light, Error, Invoker};
/// let light = Light::new();
/// let mut invoker = Invoker::new();
/// let on = invoker.register(light.switch(true));
/// let off = invoker.register(light.switch(false));
///
/// invoker.execute(on).unwrap();
/// invoker.execute(off).unwrap();
/// assert!(!light.is_on());
/// invoker.undo().unwrap();
/// assert!(light.is_on());
/// invoker.undo().unwrap();
/// assert!(!light.is_on());
/// assert_eq!(invoker.undo(), Err(Error::NothingToUndo));
/// ```
pub struct Invoker<C, S = ()> {
    pub(crate) commands: Vec<C>,
    pub(crate) undo: VecDeque<Entry>,
    pub(crate) redo: Vec<Entry>,
    limit: NonZeroUsize,
    pub(crate) socket: Socket<S>,
}

/// What an execution displaced from the history.
#[derive(Debug)]
pub(crate) struct Executed {
    /// The redo stack that was cleared.
    pub tail: Vec<Entry>,
    /// The oldest entry, if it was evicted to stay within the limit.
    pub evicted: Option<Entry>,
}

impl<C> Invoker<C> {
    /// Returns a new invoker.
    pub fn new() -> Invoker<C> {
        Invoker::builder().build()
    }

    /// Returns a new invoker builder.
    pub fn builder() -> Builder<C> {
        Builder::default()
    }
}

impl<C, S> Invoker<C, S> {
    /// Registers the command in the next free slot and returns the slot.
    pub fn register(&mut self, command: C) -> usize {
        let slot = self.commands.len();
        self.commands.push(command);
        trace!(slot, "registered command");
        slot
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the command registered in `slot`.
    pub fn get(&self, slot: usize) -> Option<&C> {
        self.commands.get(slot)
    }

    /// Returns an iterator over the registered commands in slot order.
    pub fn slots(&self) -> impl Iterator<Item = &C> {
        self.commands.iter()
    }

    /// Returns the limit of the undo stack.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Returns `true` if the invoker can undo.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if the invoker can redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the number of executions that can be undone.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Returns the number of executions that can be redone.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Returns the slot that the next call to [`undo`](Invoker::undo) will invert.
    pub fn undo_slot(&self) -> Option<usize> {
        self.undo.back().map(Entry::slot)
    }

    /// Returns the slot that the next call to [`redo`](Invoker::redo) will reapply.
    pub fn redo_slot(&self) -> Option<usize> {
        self.redo.last().map(Entry::slot)
    }

    /// Returns an iterator over the undo stack, most recent first.
    pub fn undo_history(&self) -> impl Iterator<Item = &Entry> {
        self.undo.iter().rev()
    }

    /// Returns an iterator over the redo stack, most recent first.
    pub fn redo_history(&self) -> impl Iterator<Item = &Entry> {
        self.redo.iter().rev()
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns a queue.
    pub fn queue(&mut self) -> Queue<C, S> {
        Queue::from(self)
    }

    /// Returns a checkpoint.
    pub fn checkpoint(&mut self) -> Checkpoint<C, S> {
        Checkpoint::from(self)
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<C, S> {
        Display::from(self)
    }

    /// Returns the entries in execution order,
    /// the undo stack followed by the redo stack in the order it would be redone.
    pub(crate) fn timeline(&self) -> impl Iterator<Item = &Entry> {
        self.undo.iter().chain(self.redo.iter().rev())
    }
}

impl<C: Command, S: Slot> Invoker<C, S> {
    /// Applies the command registered in `slot` and pushes it onto the undo stack.
    ///
    /// The redo stack is cleared. If the undo stack is at its limit,
    /// the oldest execution is dropped and can no longer be undone.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSlot`] if no command is registered in `slot`.
    /// Nothing is applied and the history is left unchanged.
    pub fn execute(&mut self, slot: usize) -> Result {
        self.__execute(slot).map(|_| ())
    }

    pub(crate) fn __execute(&mut self, slot: usize) -> Result<Executed> {
        let len = self.commands.len();
        let command = self
            .commands
            .get_mut(slot)
            .ok_or(Error::InvalidSlot { slot, len })?;
        command.apply();

        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        let old = self.undo.len();
        let tail = mem::take(&mut self.redo);
        let evicted = if self.undo.len() == self.limit.get() {
            let evicted = self.undo.pop_front();
            trace!(limit = self.limit.get(), "evicted oldest execution");
            evicted
        } else {
            None
        };
        self.undo.push_back(Entry::new(slot));
        debug!(slot, depth = self.undo.len(), "executed command");

        self.socket.emit_if(!could_undo, Signal::Undo(true));
        self.socket.emit_if(could_redo, Signal::Redo(false));
        self.socket
            .emit_if(old != self.undo.len(), Signal::Depth(self.undo.len()));
        Ok(Executed { tail, evicted })
    }

    /// Pops the most recent execution off the undo stack, inverts it,
    /// and pushes it onto the redo stack.
    ///
    /// # Errors
    /// Returns [`Error::NothingToUndo`] if the undo stack is empty.
    pub fn undo(&mut self) -> Result {
        let mut entry = self.undo.pop_back().ok_or(Error::NothingToUndo)?;
        let could_redo = self.can_redo();
        // Entries only refer to registered slots and slots are never removed.
        self.commands[entry.slot()].invert();
        entry.touch();
        debug!(slot = entry.slot(), depth = self.undo.len(), "undid command");
        self.redo.push(entry);

        self.socket.emit_if(self.undo.is_empty(), Signal::Undo(false));
        self.socket.emit_if(!could_redo, Signal::Redo(true));
        self.socket.emit(Signal::Depth(self.undo.len()));
        Ok(())
    }

    /// Pops the most recently undone execution off the redo stack, reapplies it,
    /// and pushes it back onto the undo stack.
    ///
    /// # Errors
    /// Returns [`Error::NothingToRedo`] if the redo stack is empty.
    pub fn redo(&mut self) -> Result {
        let mut entry = self.redo.pop().ok_or(Error::NothingToRedo)?;
        let could_undo = self.can_undo();
        self.commands[entry.slot()].reapply();
        entry.touch();
        self.undo.push_back(entry);
        debug!(slot = entry.slot(), depth = self.undo.len(), "redid command");

        self.socket.emit_if(!could_undo, Signal::Undo(true));
        self.socket.emit_if(self.redo.is_empty(), Signal::Redo(false));
        self.socket.emit(Signal::Depth(self.undo.len()));
        Ok(())
    }

    /// Repeatedly calls [`undo`](Invoker::undo) or [`redo`](Invoker::redo)
    /// until exactly `depth` executions are left on the undo stack.
    ///
    /// Only the net change is signaled, not every step on the way.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDepth`] if `depth` is larger than the number of
    /// executions on both stacks. The history is left unchanged.
    pub fn go_to(&mut self, depth: usize) -> Result {
        let max = self.undo.len() + self.redo.len();
        if depth > max {
            return Err(Error::InvalidDepth { depth, max });
        }
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        let old = self.undo.len();
        // Temporarily remove the slot so it is not called each iteration.
        let slot = self.socket.disconnect();
        while self.undo.len() != depth {
            let step = if self.undo.len() > depth {
                self.undo()
            } else {
                self.redo()
            };
            if let Err(err) = step {
                self.socket.connect(slot);
                return Err(err);
            }
        }
        self.socket.connect(slot);
        debug!(from = old, to = depth, "moved through history");

        let can_undo = self.can_undo();
        let can_redo = self.can_redo();
        self.socket
            .emit_if(could_undo != can_undo, Signal::Undo(can_undo));
        self.socket
            .emit_if(could_redo != can_redo, Signal::Redo(can_redo));
        self.socket.emit_if(old != depth, Signal::Depth(depth));
        Ok(())
    }

    /// Removes all executions from the history without inverting them.
    ///
    /// The registered commands are kept.
    pub fn clear(&mut self) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        self.undo.clear();
        self.redo.clear();
        debug!("cleared history");
        self.socket.emit_if(could_undo, Signal::Undo(false));
        self.socket.emit_if(could_redo, Signal::Redo(false));
        self.socket.emit_if(could_undo, Signal::Depth(0));
    }
}

impl<C: ToString, S> Invoker<C, S> {
    /// Returns the text of the command which will be inverted
    /// in the next call to [`undo`](Invoker::undo).
    pub fn undo_text(&self) -> Option<String> {
        self.undo_slot().map(|slot| self.commands[slot].to_string())
    }

    /// Returns the text of the command which will be reapplied
    /// in the next call to [`redo`](Invoker::redo).
    pub fn redo_text(&self) -> Option<String> {
        self.redo_slot().map(|slot| self.commands[slot].to_string())
    }
}

impl<C> Default for Invoker<C> {
    fn default() -> Invoker<C> {
        Invoker::new()
    }
}

impl<C> FromIterator<C> for Invoker<C> {
    fn from_iter<I: IntoIterator<Item = C>>(commands: I) -> Self {
        let mut invoker = Invoker::new();
        invoker.extend(commands);
        invoker
    }
}

impl<C, S> Extend<C> for Invoker<C, S> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, commands: I) {
        for command in commands {
            self.register(command);
        }
    }
}

impl<C: fmt::Debug, S> fmt::Debug for Invoker<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Invoker")
            .field("commands", &self.commands)
            .field("undo", &self.undo)
            .field("redo", &self.redo)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
