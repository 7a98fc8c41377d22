//! The built-in text edits.

use crate::{Command, Error, Receiver, Result};
use core::fmt::{self, Display, Formatter};

/// Appends text to the end of the receiver.
///
/// Undoing it removes exactly as many characters as were appended.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Append {
    text: String,
    len: usize,
    applied: bool,
}

impl Append {
    /// Returns an edit that appends `text`.
    pub fn new(text: impl Into<String>) -> Append {
        let text = text.into();
        let len = text.chars().count();
        Append {
            text,
            len,
            applied: false,
        }
    }

    /// Returns the text this edit appends.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<R: Receiver> Command<R> for Append {
    fn apply(&mut self, target: &mut R) -> Result {
        target.append(&self.text);
        self.applied = true;
        Ok(())
    }

    fn reverse(&mut self, target: &mut R) -> Result {
        if !self.applied {
            return Err(Error::NotApplied { command: "Append" });
        }
        target.truncate(self.len);
        self.applied = false;
        Ok(())
    }
}

impl Display for Append {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Append {:?}", self.text)
    }
}

/// Removes up to `count` trailing characters from the receiver.
///
/// The removed characters are captured when the edit is applied, so undo
/// restores exactly what was removed even if `count` exceeded the length
/// of the content.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Truncate {
    count: usize,
    removed: Option<String>,
}

impl Truncate {
    /// Returns an edit that removes `count` trailing characters.
    pub fn new(count: usize) -> Truncate {
        Truncate {
            count,
            removed: None,
        }
    }

    /// Returns the requested number of characters to remove.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the text removed by the last [`apply`](Command::apply),
    /// or `None` if the edit is not currently applied.
    pub fn removed(&self) -> Option<&str> {
        self.removed.as_deref()
    }
}

impl<R: Receiver> Command<R> for Truncate {
    fn apply(&mut self, target: &mut R) -> Result {
        // Must be read before the receiver changes.
        let removed = target.suffix(self.count).to_string();
        target.truncate(self.count);
        self.removed = Some(removed);
        Ok(())
    }

    fn reverse(&mut self, target: &mut R) -> Result {
        let removed = self
            .removed
            .take()
            .ok_or(Error::NotApplied { command: "Truncate" })?;
        target.append(&removed);
        Ok(())
    }
}

impl Display for Truncate {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.removed {
            Some(removed) => write!(f, "Truncate {} ({:?})", self.count, removed),
            None => write!(f, "Truncate {}", self.count),
        }
    }
}

/// Any of the built-in text edits.
///
/// # Examples
/// ```
/// # use rewind::{Edit, Outcome, Record};
/// # fn main() -> rewind::Result {
/// let mut text = String::new();
/// let mut record = Record::new();
/// record.submit(&mut text, Edit::append("Hello"))?;
/// record.submit(&mut text, Edit::append(" World"))?;
/// record.submit(&mut text, Edit::truncate(6))?;
/// assert_eq!(text, "Hello");
/// assert_eq!(record.undo(&mut text)?, Outcome::Performed);
/// assert_eq!(text, "Hello World");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum Edit {
    /// See [`Append`].
    Append(Append),
    /// See [`Truncate`].
    Truncate(Truncate),
}

impl Edit {
    /// Returns an edit that appends `text`.
    pub fn append(text: impl Into<String>) -> Edit {
        Edit::Append(Append::new(text))
    }

    /// Returns an edit that removes `count` trailing characters.
    pub fn truncate(count: usize) -> Edit {
        Edit::Truncate(Truncate::new(count))
    }

    /// Returns the name of the edit kind.
    pub fn name(&self) -> &'static str {
        match self {
            Edit::Append(_) => "Append",
            Edit::Truncate(_) => "Truncate",
        }
    }
}

impl<R: Receiver> Command<R> for Edit {
    fn apply(&mut self, target: &mut R) -> Result {
        match self {
            Edit::Append(append) => append.apply(target),
            Edit::Truncate(truncate) => truncate.apply(target),
        }
    }

    fn reverse(&mut self, target: &mut R) -> Result {
        match self {
            Edit::Append(append) => append.reverse(target),
            Edit::Truncate(truncate) => truncate.reverse(target),
        }
    }
}

impl From<Append> for Edit {
    fn from(append: Append) -> Self {
        Edit::Append(append)
    }
}

impl From<Truncate> for Edit {
    fn from(truncate: Truncate) -> Self {
        Edit::Truncate(truncate)
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Edit::Append(append) => append.fmt(f),
            Edit::Truncate(truncate) => truncate.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextBuffer;

    #[test]
    fn append_reverse() {
        let mut buffer = TextBuffer::from("ab");
        let mut append = Append::new("çd");
        append.apply(&mut buffer).unwrap();
        assert_eq!(buffer.content(), "abçd");
        append.reverse(&mut buffer).unwrap();
        assert_eq!(buffer.content(), "ab");
    }

    #[test]
    fn append_empty_reverse_keeps_content() {
        let mut buffer = TextBuffer::from("ab");
        let mut append = Append::new("");
        append.apply(&mut buffer).unwrap();
        append.reverse(&mut buffer).unwrap();
        assert_eq!(buffer.content(), "ab");
    }

    #[test]
    fn truncate_captures_removed_text() {
        let mut buffer = TextBuffer::from("Hello World");
        let mut truncate = Truncate::new(6);
        assert_eq!(truncate.removed(), None);
        truncate.apply(&mut buffer).unwrap();
        assert_eq!(buffer.content(), "Hello");
        assert_eq!(truncate.removed(), Some(" World"));
        truncate.reverse(&mut buffer).unwrap();
        assert_eq!(buffer.content(), "Hello World");
        assert_eq!(truncate.removed(), None);
    }

    #[test]
    fn over_truncate() {
        let mut buffer = TextBuffer::from("Hi");
        let mut truncate = Truncate::new(10);
        truncate.apply(&mut buffer).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(truncate.removed(), Some("Hi"));
        truncate.reverse(&mut buffer).unwrap();
        assert_eq!(buffer.content(), "Hi");
    }

    #[test]
    fn reverse_before_apply() {
        let mut buffer = TextBuffer::from("Hi");
        assert_eq!(
            Truncate::new(1).reverse(&mut buffer),
            Err(Error::NotApplied { command: "Truncate" })
        );
        assert_eq!(
            Append::new("x").reverse(&mut buffer),
            Err(Error::NotApplied { command: "Append" })
        );
        assert_eq!(buffer.content(), "Hi");
    }

    #[test]
    fn reverse_twice() {
        let mut buffer = TextBuffer::from("Hi");
        let mut edit = Edit::truncate(1);
        edit.apply(&mut buffer).unwrap();
        edit.reverse(&mut buffer).unwrap();
        assert!(edit.reverse(&mut buffer).is_err());
        assert_eq!(buffer.content(), "Hi");
    }

    #[test]
    fn display() {
        let mut text = String::from("abc");
        let mut edit = Edit::truncate(2);
        assert_eq!(edit.to_string(), "Truncate 2");
        edit.apply(&mut text).unwrap();
        assert_eq!(edit.to_string(), "Truncate 2 (\"bc\")");
        assert_eq!(Edit::append("x").to_string(), "Append \"x\"");
    }
}
