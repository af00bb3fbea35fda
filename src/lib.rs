//! **Slot-addressed command invoker with linear undo-redo functionality.**
//!
//! It is an implementation of the command pattern, where every change made to a
//! receiver is wrapped in a [`Command`] that knows how to apply itself and how to
//! invert what it applied. Commands are registered into the numbered slots of an
//! [`Invoker`], much like the buttons of a remote control, and the invoker keeps
//! the undo and redo history of everything it executed.
//!
//! # Features
//!
//! * [`Command`] provides the base functionality for all commands.
//! * [`Invoker`] dispatches commands by slot and provides linear undo-redo functionality.
//! * [`Queue`] wraps an [`Invoker`] and extends it with queue functionality.
//! * [`Checkpoint`] wraps an [`Invoker`] and extends it with checkpoint functionality.
//! * [`FromFn`] and [`Join`] build commands out of closures and other commands.
//! * Changes to the ability to undo or redo can be observed by connecting a [`Slot`].
//! * The number of undoable steps can be limited so only the `N` most recent executions are kept.
//! * Configurable display formatting of the history through [`Invoker::display`].
//! * Time stamps when the `chrono` feature is enabled.
//! * Colored display output when the `colored` feature is enabled.
//! * Serialization of signals and errors when the `serde` feature is enabled.
//!
//! # Examples
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use remote::{Command, Invoker};
//!
//! struct Toggle(Rc<Cell<bool>>);
//!
//! impl Command for Toggle {
//!     fn apply(&mut self) {
//!         self.0.set(!self.0.get());
//!     }
//!
//!     fn invert(&mut self) {
//!         self.0.set(!self.0.get());
//!     }
//! }
//!
//! # fn main() -> remote::Result {
//! let light = Rc::new(Cell::new(false));
//! let mut invoker = Invoker::new();
//! let toggle = invoker.register(Toggle(light.clone()));
//!
//! invoker.execute(toggle)?;
//! assert!(light.get());
//! invoker.undo()?;
//! assert!(!light.get());
//! invoker.redo()?;
//! assert!(light.get());
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/remote")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[doc(hidden)]
pub mod doctest;
mod entry;
mod format;
mod from_fn;
mod invoker;
mod join;
mod socket;

pub use entry::Entry;
use format::Format;
pub use from_fn::FromFn;
pub use invoker::{Builder, Checkpoint, Display, Invoker, Queue};
pub use join::Join;
pub use socket::{Signal, Slot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A specialized result type for invoker operations.
pub type Result<T = ()> = core::result::Result<T, Error>;

/// Base functionality for all commands.
///
/// A command captures the receiver it acts upon, so neither method takes any input
/// beyond `self`. Implementations must make [`invert`](Command::invert) restore the
/// receiver to exactly the state it was in before the matching
/// [`apply`](Command::apply). The [`Invoker`] relies on this but cannot verify it.
///
/// # Repeated execution
///
/// The history refers to commands by slot, so every execution of a slot is served
/// by the same command. Executing a slot again applies its command again before the
/// earlier application is inverted. Commands should therefore not keep
/// per-execution state. When they must, for example to remember the state they
/// overwrote, it has to be kept last in, first out: the invoker always inverts the
/// most recent application of a command that has not been inverted yet.
pub trait Command {
    /// Applies the command.
    fn apply(&mut self);

    /// Restores the state as it was before [`apply`](Command::apply) was called.
    fn invert(&mut self);

    /// Reapplies the command.
    ///
    /// Default implementation uses [`Command::apply`].
    fn reapply(&mut self) {
        self.apply();
    }
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn apply(&mut self) {
        (**self).apply()
    }

    fn invert(&mut self) {
        (**self).invert()
    }

    fn reapply(&mut self) {
        (**self).reapply()
    }
}

impl<C: Command + ?Sized> Command for &mut C {
    fn apply(&mut self) {
        (**self).apply()
    }

    fn invert(&mut self) {
        (**self).invert()
    }

    fn reapply(&mut self) {
        (**self).reapply()
    }
}

/// The errors returned by the [`Invoker`].
///
/// None of them are fatal. A failed operation leaves the invoker exactly as it was.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No command is registered in the slot.
    #[error("invalid slot {slot}, the invoker has {len} slots")]
    InvalidSlot {
        /// The slot that was requested.
        slot: usize,
        /// The number of registered slots.
        len: usize,
    },
    /// The undo stack is empty.
    #[error("nothing to undo")]
    NothingToUndo,
    /// The redo stack is empty.
    #[error("nothing to redo")]
    NothingToRedo,
    /// The requested depth is outside the recorded history.
    #[error("invalid depth {depth}, the history can reach at most {max}")]
    InvalidDepth {
        /// The depth that was requested.
        depth: usize,
        /// The largest reachable depth.
        max: usize,
    },
}
