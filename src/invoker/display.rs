use crate::{Entry, Format, Invoker};
use std::fmt::{self, Write};

/// Configurable display formatting for the history of an [`Invoker`].
///
/// Executions are listed newest first, each with its position in the history,
/// the slot it was executed from, and the text of the command. The current
/// position is marked with `[HEAD]`, executions above it can be redone.
///
/// # Examples
/// ```
/// # use remote::{doctest::Light, Invoker};
/// let light = Light::new();
/// let mut invoker = Invoker::new();
/// invoker.register(light.switch(true));
/// invoker.register(light.switch(false));
/// invoker.execute(0).unwrap();
/// invoker.execute(1).unwrap();
/// invoker.undo().unwrap();
///
/// let mut display = invoker.display();
/// display.detailed(false);
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// assert_eq!(
///     display.to_string(),
///     "2 (slot 1) turn off light\n1 (slot 0) [HEAD] turn on light\n0\n",
/// );
/// ```
pub struct Display<'a, C, S> {
    invoker: &'a Invoker<C, S>,
    format: Format,
}

impl<C, S> Display<'_, C, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the current position in the output (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }
}

impl<C: fmt::Display, S> Display<'_, C, S> {
    fn fmt_list(&self, f: &mut fmt::Formatter, at: usize, entry: Option<&Entry>) -> fmt::Result {
        self.format.position(f, at)?;

        if let Some(entry) = entry {
            self.format.slot(f, entry.slot())?;
            #[cfg(feature = "chrono")]
            if self.format.detailed {
                self.format.timestamp(f, &entry.updated_at())?;
            }
        }

        self.format.labels(f, at, self.invoker.undo_len())?;

        match entry {
            Some(entry) => {
                if self.format.detailed {
                    writeln!(f)?;
                }
                self.format
                    .message(f, &self.invoker.commands[entry.slot()])
            }
            None => f.write_char('\n'),
        }
    }
}

impl<'a, C, S> From<&'a Invoker<C, S>> for Display<'a, C, S> {
    fn from(invoker: &'a Invoker<C, S>) -> Self {
        Display {
            invoker,
            format: Format::default(),
        }
    }
}

impl<C: fmt::Display, S> fmt::Display for Display<'_, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let timeline: Vec<&Entry> = self.invoker.timeline().collect();
        for (i, entry) in timeline.into_iter().enumerate().rev() {
            self.fmt_list(f, i + 1, Some(entry))?;
        }
        self.fmt_list(f, 0, None)
    }
}
