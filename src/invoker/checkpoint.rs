use super::{Executed, Queue};
use crate::socket::Signal;
use crate::{Command, Invoker, Result, Slot};

#[derive(Debug)]
enum CheckpointEntry {
    Execute(Executed),
    Undo,
    Redo,
}

/// Wraps an invoker and gives it checkpoint functionality.
///
/// Actions are applied right away, and can all be rolled back by canceling the checkpoint.
///
/// # Examples
/// ```
/// # use remote::{doctest::Light, Invoker};
/// let light = Light::new();
/// let mut invoker = Invoker::new();
/// let on = invoker.register(light.switch(true));
///
/// let mut checkpoint = invoker.checkpoint();
/// checkpoint.execute(on).unwrap();
/// assert!(light.is_on());
///
/// checkpoint.cancel().unwrap();
/// assert!(!light.is_on());
/// assert!(!invoker.can_undo());
/// ```
#[derive(Debug)]
pub struct Checkpoint<'a, C, S> {
    invoker: &'a mut Invoker<C, S>,
    entries: Vec<CheckpointEntry>,
}

impl<C, S> Checkpoint<'_, C, S> {
    /// Returns the number of actions applied through the checkpoint.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no actions have been applied through the checkpoint.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commits the changes and consumes the checkpoint.
    pub fn commit(self) {}

    /// Returns a queue.
    pub fn queue(&mut self) -> Queue<C, S> {
        self.invoker.queue()
    }

    /// Returns a checkpoint.
    pub fn checkpoint(&mut self) -> Checkpoint<C, S> {
        self.invoker.checkpoint()
    }
}

impl<C: Command, S: Slot> Checkpoint<'_, C, S> {
    /// Calls the [`Invoker::execute`] method.
    pub fn execute(&mut self, slot: usize) -> Result {
        let executed = self.invoker.__execute(slot)?;
        self.entries.push(CheckpointEntry::Execute(executed));
        Ok(())
    }

    /// Calls the [`Invoker::undo`] method.
    pub fn undo(&mut self) -> Result {
        self.invoker.undo()?;
        self.entries.push(CheckpointEntry::Undo);
        Ok(())
    }

    /// Calls the [`Invoker::redo`] method.
    pub fn redo(&mut self) -> Result {
        self.invoker.redo()?;
        self.entries.push(CheckpointEntry::Redo);
        Ok(())
    }

    /// Cancels the changes and consumes the checkpoint.
    ///
    /// Every action is rolled back in reverse order, and the history is restored
    /// to what it was when the checkpoint was created, including the redo stack
    /// and any execution evicted by the limit.
    ///
    /// # Errors
    /// Stops at the first rollback that fails and returns its error.
    pub fn cancel(self) -> Result {
        for entry in self.entries.into_iter().rev() {
            match entry {
                CheckpointEntry::Execute(Executed { tail, evicted }) => {
                    self.invoker.undo()?;
                    let could_redo = self.invoker.can_redo();
                    self.invoker.redo.pop();
                    self.invoker.redo = tail;
                    if let Some(evicted) = evicted {
                        self.invoker.undo.push_front(evicted);
                        let depth = self.invoker.undo_len();
                        self.invoker.socket.emit_if(depth == 1, Signal::Undo(true));
                        self.invoker.socket.emit(Signal::Depth(depth));
                    }
                    let can_redo = self.invoker.can_redo();
                    self.invoker
                        .socket
                        .emit_if(could_redo != can_redo, Signal::Redo(can_redo));
                }
                CheckpointEntry::Undo => self.invoker.redo()?,
                CheckpointEntry::Redo => self.invoker.undo()?,
            }
        }
        Ok(())
    }
}

impl<'a, C, S> From<&'a mut Invoker<C, S>> for Checkpoint<'a, C, S> {
    fn from(invoker: &'a mut Invoker<C, S>) -> Self {
        Checkpoint {
            invoker,
            entries: Vec::new(),
        }
    }
}
