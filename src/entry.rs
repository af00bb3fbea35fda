#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

/// A record of one execution in the history of an [`Invoker`](crate::Invoker).
///
/// The entry refers to the command by the slot it is registered in,
/// the command itself stays owned by the invoker.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Entry {
    slot: usize,
    #[cfg(feature = "chrono")]
    created_at: DateTime<Utc>,
    #[cfg(feature = "chrono")]
    updated_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(slot: usize) -> Entry {
        #[cfg(feature = "chrono")]
        let now = Utc::now();
        Entry {
            slot,
            #[cfg(feature = "chrono")]
            created_at: now,
            #[cfg(feature = "chrono")]
            updated_at: now,
        }
    }

    /// Returns the slot of the command that was executed.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Returns when the command was first executed.
    #[cfg(feature = "chrono")]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the command was last applied, inverted, or reapplied.
    #[cfg(feature = "chrono")]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn touch(&mut self) {
        #[cfg(feature = "chrono")]
        {
            self.updated_at = Utc::now();
        }
    }
}
