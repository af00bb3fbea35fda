use super::Checkpoint;
use crate::{Command, Invoker, Result, Slot};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum QueueAction {
    Execute(usize),
    Undo,
    Redo,
    GoTo(usize),
}

/// Wraps an invoker and gives it batch queue functionality.
///
/// Nothing is applied until the queue is committed.
///
/// # Examples
/// ```
/// # use remote::{doctest::Light, Invoker};
/// let (hall, porch) = (Light::new(), Light::new());
/// let mut invoker = Invoker::new();
/// invoker.register(hall.switch(true));
/// invoker.register(porch.switch(true));
///
/// let mut queue = invoker.queue();
/// queue.execute(0);
/// queue.execute(1);
/// queue.undo();
/// assert!(!hall.is_on());
///
/// queue.commit().unwrap();
/// assert!(hall.is_on());
/// assert!(!porch.is_on());
/// ```
#[derive(Debug)]
pub struct Queue<'a, C, S> {
    invoker: &'a mut Invoker<C, S>,
    actions: Vec<QueueAction>,
}

impl<C, S> Queue<'_, C, S> {
    /// Queues an `execute` action.
    pub fn execute(&mut self, slot: usize) {
        self.actions.push(QueueAction::Execute(slot));
    }

    /// Queues an `undo` action.
    pub fn undo(&mut self) {
        self.actions.push(QueueAction::Undo);
    }

    /// Queues a `redo` action.
    pub fn redo(&mut self) {
        self.actions.push(QueueAction::Redo);
    }

    /// Queues a `go_to` action.
    pub fn go_to(&mut self, depth: usize) {
        self.actions.push(QueueAction::GoTo(depth));
    }

    /// Returns the number of queued actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are queued.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Cancels the queued actions.
    pub fn cancel(self) {}

    /// Returns a queue.
    pub fn queue(&mut self) -> Queue<C, S> {
        self.invoker.queue()
    }

    /// Returns a checkpoint.
    pub fn checkpoint(&mut self) -> Checkpoint<C, S> {
        self.invoker.checkpoint()
    }
}

impl<C: Command, S: Slot> Queue<'_, C, S> {
    /// Applies the queued actions in order.
    ///
    /// # Errors
    /// Stops at the first action that fails and returns its error.
    /// The actions before it stay applied.
    pub fn commit(self) -> Result {
        for action in self.actions {
            match action {
                QueueAction::Execute(slot) => self.invoker.execute(slot)?,
                QueueAction::Undo => self.invoker.undo()?,
                QueueAction::Redo => self.invoker.redo()?,
                QueueAction::GoTo(depth) => self.invoker.go_to(depth)?,
            }
        }
        Ok(())
    }
}

impl<'a, C, S> From<&'a mut Invoker<C, S>> for Queue<'a, C, S> {
    fn from(invoker: &'a mut Invoker<C, S>) -> Self {
        Queue {
            invoker,
            actions: Vec::new(),
        }
    }
}
