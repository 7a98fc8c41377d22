//! The text that commands act upon.

use core::fmt::{self, Display, Formatter};
use tracing::trace;

/// Primitive, reversible text operations.
///
/// Lengths are counted in characters (`char`s), not bytes.
pub trait Receiver {
    /// Returns the current content.
    fn content(&self) -> &str;

    /// Appends `text` to the end of the content.
    fn append(&mut self, text: &str);

    /// Removes up to `count` trailing characters.
    ///
    /// If `count` exceeds the current length all content is removed.
    fn truncate(&mut self, count: usize);

    /// Returns the trailing `count` characters, or the whole content
    /// if it is shorter than that.
    fn suffix(&self, count: usize) -> &str {
        let content = self.content();
        &content[suffix_start(content, count)..]
    }

    /// Returns the number of characters in the content.
    fn char_len(&self) -> usize {
        self.content().chars().count()
    }
}

/// Byte index where the last `count` characters of `s` start.
pub(crate) fn suffix_start(s: &str, count: usize) -> usize {
    match count {
        0 => s.len(),
        n => s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i),
    }
}

impl Receiver for String {
    fn content(&self) -> &str {
        self
    }

    fn append(&mut self, text: &str) {
        trace!(len = text.len(), "append");
        self.push_str(text);
    }

    fn truncate(&mut self, count: usize) {
        trace!(count, "truncate");
        let at = suffix_start(self, count);
        String::truncate(self, at);
    }
}

/// A plain text buffer.
///
/// # Examples
/// ```
/// # use rewind::{Receiver, TextBuffer};
/// let mut buffer = TextBuffer::new();
/// buffer.append("Hello");
/// buffer.truncate(2);
/// assert_eq!(buffer.content(), "Hel");
/// ```
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Returns an empty buffer.
    pub fn new() -> TextBuffer {
        TextBuffer::default()
    }

    /// Returns `true` if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consumes the buffer and returns its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Receiver for TextBuffer {
    fn content(&self) -> &str {
        &self.text
    }

    fn append(&mut self, text: &str) {
        Receiver::append(&mut self.text, text);
    }

    fn truncate(&mut self, count: usize) {
        Receiver::truncate(&mut self.text, count);
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        TextBuffer { text }
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        TextBuffer::from(text.to_string())
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}
