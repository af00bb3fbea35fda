//! This is the receiver and command used in the documentation examples and tests.
//!
//! Not part of the API and can change at any time.

use crate::Command;
use std::cell::Cell;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// A shared light that is either on or off.
#[derive(Clone, Debug, Default)]
pub struct Light(Rc<Cell<bool>>);

impl Light {
    /// Returns a light that is switched off.
    pub fn new() -> Light {
        Light::default()
    }

    /// Returns `true` if the light is on.
    pub fn is_on(&self) -> bool {
        self.0.get()
    }

    /// Returns a command that switches the light `on` or off.
    pub fn switch(&self, on: bool) -> Switch {
        Switch {
            light: self.clone(),
            on,
            was_on: Vec::new(),
        }
    }
}

/// Switches a [`Light`] on or off.
///
/// The state before each application is kept on a stack, since the same switch
/// can be applied again from its slot before the earlier application is inverted.
#[derive(Clone, Debug)]
pub struct Switch {
    light: Light,
    on: bool,
    was_on: Vec<bool>,
}

impl Command for Switch {
    fn apply(&mut self) {
        self.was_on.push(self.light.0.replace(self.on));
    }

    fn invert(&mut self) {
        if let Some(was_on) = self.was_on.pop() {
            self.light.0.set(was_on);
        }
    }
}

impl Display for Switch {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.on {
            f.write_str("turn on light")
        } else {
            f.write_str("turn off light")
        }
    }
}
