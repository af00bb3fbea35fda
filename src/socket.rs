//! Module used to communicate changes in the invoker.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::mem;
use std::sync::mpsc::{Sender, SyncSender};

/// Holds the connected slot, if any.
#[derive(Debug)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket(None)
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal);
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: Signal) {
        if cond {
            self.emit(signal);
        }
    }
}

/// The `Signal` describes the state change done to the invoker.
///
/// See [`Slot`] for more information.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// Emitted when the invokers ability to undo has changed.
    Undo(bool),
    /// Emitted when the invokers ability to redo has changed.
    Redo(bool),
    /// Emitted when the number of undoable executions has changed.
    Depth(usize),
}

/// Use this to handle signals emitted.
///
/// This allows you to trigger events on certain state changes,
/// like greying out the undo button of a user interface.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use remote::{doctest::Light, Invoker, Signal};
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let light = Light::new();
/// let mut invoker = Invoker::builder().connect(sender).build();
/// let on = invoker.register(light.switch(true));
///
/// invoker.execute(on).unwrap();
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Depth(1)));
/// assert_eq!(iter.next(), None);
///
/// invoker.undo().unwrap();
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), Some(Signal::Depth(0)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Receives a signal that describes the state change done to the invoker.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
