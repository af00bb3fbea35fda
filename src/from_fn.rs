use crate::Command;
use core::fmt::{self, Debug, Formatter};

/// Command made from a pair of functions.
///
/// The first function applies the effect and the second one inverts it.
///
/// # Examples
/// ```
/// # use std::cell::RefCell;
/// # use std::rc::Rc;
/// # use remote::{FromFn, Invoker};
/// let volume = Rc::new(RefCell::new(10));
/// let (up, down) = (volume.clone(), volume.clone());
///
/// let mut invoker = Invoker::new();
/// let louder = invoker.register(FromFn::new(
///     move || *up.borrow_mut() += 1,
///     move || *down.borrow_mut() -= 1,
/// ));
///
/// invoker.execute(louder).unwrap();
/// invoker.execute(louder).unwrap();
/// assert_eq!(*volume.borrow(), 12);
/// invoker.undo().unwrap();
/// assert_eq!(*volume.borrow(), 11);
/// ```
#[derive(Clone)]
pub struct FromFn<F, G> {
    apply: F,
    invert: G,
}

impl<F, G> FromFn<F, G> {
    /// Creates a new `FromFn` from `apply` and `invert`.
    pub const fn new(apply: F, invert: G) -> Self {
        FromFn { apply, invert }
    }
}

impl<F, G> Command for FromFn<F, G>
where
    F: FnMut(),
    G: FnMut(),
{
    fn apply(&mut self) {
        (self.apply)()
    }

    fn invert(&mut self) {
        (self.invert)()
    }
}

impl<F, G> Debug for FromFn<F, G> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
