//! Notifications about changes to the record.

use std::sync::mpsc::Sender;

/// A change to the state of the record.
///
/// Each signal is emitted once per call that changes the corresponding state,
/// so [`Record::go_to`](crate::Record::go_to) reports the net change rather than every step.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// Emitted when the record starts or stops being able to undo.
    Undo(bool),
    /// Emitted when the record starts or stops being able to redo.
    Redo(bool),
    /// Emitted when the receiver enters or leaves its saved state.
    Saved(bool),
    /// Emitted when the size of either stack has changed.
    Stacks {
        /// Number of applied commands.
        history: usize,
        /// Number of undone commands.
        redoable: usize,
    },
}

/// Receives the signals emitted by a [`Record`](crate::Record).
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use rewind::{Edit, Record, Signal};
/// # fn main() -> rewind::Result {
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut text = String::new();
/// let mut record = Record::builder()
///     .connect(sender)
///     .build();
///
/// record.submit(&mut text, Edit::append("a"))?;
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Saved(false)));
/// assert_eq!(iter.next(), Some(Signal::Stacks { history: 1, redoable: 0 }));
/// assert_eq!(iter.next(), None);
///
/// record.undo(&mut text)?;
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), Some(Signal::Saved(true)));
/// assert_eq!(iter.next(), Some(Signal::Stacks { history: 0, redoable: 1 }));
/// assert_eq!(iter.next(), None);
/// # Ok(())
/// # }
/// ```
pub trait Slot {
    /// Handles one signal.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

/// A disconnected receiver is ignored.
impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
