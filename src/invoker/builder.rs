use crate::socket::Socket;
use crate::Invoker;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

/// Builder for an [`Invoker`].
///
/// # Examples
/// ```
/// # use std::num::NonZeroUsize;
/// # use remote::{doctest::{Light, Switch}, Invoker, Signal};
/// let mut invoker = Invoker::<Switch>::builder()
///     .limit(NonZeroUsize::new(100).unwrap())
///     .capacity(4)
///     .connect(|s: Signal| { dbg!(s); })
///     .build();
/// # invoker.register(Light::new().switch(true));
/// # invoker.execute(0).unwrap();
/// ```
#[derive(Debug)]
pub struct Builder<C, S = ()> {
    capacity: usize,
    limit: NonZeroUsize,
    socket: Socket<S>,
    pd: PhantomData<C>,
}

impl<C, S> Builder<C, S> {
    /// Sets the number of slots to allocate room for.
    pub fn capacity(mut self, capacity: usize) -> Builder<C, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum number of executions the undo stack keeps.
    pub fn limit(mut self, limit: NonZeroUsize) -> Builder<C, S> {
        self.limit = limit;
        self
    }

    /// Connects the slot.
    pub fn connect<T>(self, slot: T) -> Builder<C, T> {
        Builder {
            capacity: self.capacity,
            limit: self.limit,
            socket: Socket::new(slot),
            pd: PhantomData,
        }
    }

    /// Builds the invoker.
    pub fn build(self) -> Invoker<C, S> {
        Invoker {
            commands: Vec::with_capacity(self.capacity),
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: self.limit,
            socket: self.socket,
        }
    }
}

impl<C, S> Default for Builder<C, S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            limit: NonZeroUsize::MAX,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}
