use crate::format::Format;
use crate::{Entry, Record};
use core::fmt;

/// Configurable display formatting for the [`Record`].
///
/// Commands are listed newest first, numbered by the depth the record has
/// after applying them. The root of the list is `0`.
pub struct Display<'a, C, S> {
    record: &'a Record<C, S>,
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

    /// Show the saved position in the output (on by default).
    pub fn saved(&mut self, on: bool) -> &mut Self {
        self.format.saved = on;
        self
    }
}

impl<C: fmt::Display, S> Display<'_, C, S> {
    fn fmt_list(
        &self,
        f: &mut fmt::Formatter,
        index: usize,
        entry: Option<&Entry<C>>,
    ) -> fmt::Result {
        self.format.index(f, index)?;

        #[cfg(feature = "chrono")]
        if let Some(entry) = entry {
            if self.format.detailed {
                self.format.timestamp(f, &entry.timestamp())?;
            }
        }

        self.format
            .labels(f, index, self.record.history_len(), self.record.saved)?;

        if let Some(entry) = entry {
            if self.format.detailed {
                writeln!(f)?;
                self.format.message(f, entry)?;
            } else {
                f.write_str(" ")?;
                self.format.message(f, entry)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<'a, C, S> From<&'a Record<C, S>> for Display<'a, C, S> {
    fn from(record: &'a Record<C, S>) -> Self {
        Display {
            record,
            format: Format::default(),
        }
    }
}

impl<C: fmt::Display, S> fmt::Display for Display<'_, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: Vec<_> = self.record.entries().collect();
        for (i, entry) in entries.into_iter().enumerate().rev() {
            self.fmt_list(f, i + 1, Some(entry))?;
        }
        self.fmt_list(f, 0, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Edit, Record};
    use pretty_assertions::assert_eq;

    #[test]
    fn list() {
        let mut text = String::new();
        let mut record = Record::new();
        record.submit(&mut text, Edit::append("Hello")).unwrap();
        record.submit(&mut text, Edit::append(" World")).unwrap();
        record.submit(&mut text, Edit::truncate(6)).unwrap();
        record.undo(&mut text).unwrap();

        let mut display = record.display();
        display.detailed(false);
        #[cfg(feature = "colored")]
        display.colored(false);
        assert_eq!(
            display.to_string(),
            "3 Truncate 6\n2 [HEAD] Append \" World\"\n1 Append \"Hello\"\n0 [SAVED]"
        );
    }

    #[test]
    fn list_without_labels() {
        let mut text = String::new();
        let mut record = Record::new();
        record.submit(&mut text, Edit::append("a")).unwrap();
        record.set_saved(true);

        let mut display = record.display();
        display.detailed(false).head(false).saved(false);
        #[cfg(feature = "colored")]
        display.colored(false);
        assert_eq!(display.to_string(), "1 Append \"a\"\n0");
    }
}
