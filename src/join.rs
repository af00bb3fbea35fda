use crate::Command;
use core::fmt::{self, Display, Formatter};

/// Joins two commands together.
///
/// The joined command is executed, undone, and redone as a single step.
/// `a` is applied before `b`, and `b` is inverted before `a`.
///
/// # Examples
/// ```
/// # use remote::{doctest::Light, Invoker, Join};
/// let (hall, porch) = (Light::new(), Light::new());
/// let mut invoker = Invoker::new();
/// let both = invoker.register(Join::new(hall.switch(true), porch.switch(true)));
///
/// invoker.execute(both).unwrap();
/// assert!(hall.is_on() && porch.is_on());
/// invoker.undo().unwrap();
/// assert!(!hall.is_on() && !porch.is_on());
/// ```
#[derive(Clone, Debug)]
pub struct Join<A, B> {
    a: A,
    b: B,
}

impl<A, B> Join<A, B> {
    /// Creates a new `Join` from `a` and `b`.
    pub const fn new(a: A, b: B) -> Self {
        Join { a, b }
    }

    /// Joins `self` with `c`.
    pub fn join<C>(self, c: C) -> Join<Self, C> {
        Join::new(self, c)
    }
}

impl<A: Command, B: Command> Command for Join<A, B> {
    fn apply(&mut self) {
        self.a.apply();
        self.b.apply();
    }

    fn invert(&mut self) {
        self.b.invert();
        self.a.invert();
    }

    fn reapply(&mut self) {
        self.a.reapply();
        self.b.reapply();
    }
}

impl<A: Display, B: Display> Display for Join<A, B> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} & {}", self.a, self.b)
    }
}
