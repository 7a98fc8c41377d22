//! Linear undo-redo of reversible text edits.
//!
//! It is an implementation of the command pattern, where all modifications are done
//! by submitting commands that apply the modification to a receiver. Every command
//! knows how to reverse the change it applied, and the [`Record`] keeps the applied
//! commands on one stack and the undone commands on another so the receiver can be
//! rolled backwards and forwards.
//!
//! # Features
//!
//! * [`Command`] provides the base functionality for all commands.
//! * [`Append`] and [`Truncate`] are the built-in text edits, and [`Edit`] is their sum type.
//! * [`Receiver`] is the text the edits act upon, implemented for [`String`] and [`TextBuffer`].
//! * [`Record`] provides linear undo-redo functionality. Submitting a new command
//!   discards everything that was undone.
//! * The receiver can be marked as saved and the record tracks and signals when
//!   it enters or leaves the saved state.
//! * The number of commands kept can be limited so only the `N` most recent ones are stored.
//! * Configurable display formatting, colored when the `colored` feature is enabled.
//! * Time stamps are provided when the `chrono` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use rewind::{Edit, Outcome, Record};
//!
//! fn main() -> rewind::Result {
//!     let mut text = String::new();
//!     let mut record = Record::new();
//!     record.submit(&mut text, Edit::append("Hello"))?;
//!     record.submit(&mut text, Edit::append(" World"))?;
//!     assert_eq!(text, "Hello World");
//!     record.submit(&mut text, Edit::truncate(6))?;
//!     assert_eq!(text, "Hello");
//!     record.undo(&mut text)?;
//!     assert_eq!(text, "Hello World");
//!     record.redo(&mut text)?;
//!     assert_eq!(text, "Hello");
//!     assert_eq!(record.redo(&mut text)?, Outcome::NothingToRedo);
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]

mod edit;
mod entry;
mod error;
mod format;
mod receiver;
pub mod record;
mod signal;

use core::fmt::{self, Display, Formatter};

pub use self::{
    edit::{Append, Edit, Truncate},
    entry::Entry,
    error::{Error, Result},
    receiver::{Receiver, TextBuffer},
    record::Record,
    signal::{Signal, Slot},
};

/// Base functionality for all commands.
pub trait Command<T> {
    /// Applies the command on the target and returns `Ok` if everything went fine,
    /// and `Err` if something went wrong.
    fn apply(&mut self, target: &mut T) -> Result;

    /// Restores the state of the target as it was before the command was applied.
    ///
    /// # Errors
    /// Returns [`Error::NotApplied`] if the command has not been applied.
    fn reverse(&mut self, target: &mut T) -> Result;

    /// Reapplies the command on the target after it has been reversed.
    ///
    /// The default implementation uses the [`apply`](Command::apply) implementation.
    fn reapply(&mut self, target: &mut T) -> Result {
        self.apply(target)
    }
}

impl<T, C: Command<T> + ?Sized> Command<T> for Box<C> {
    fn apply(&mut self, target: &mut T) -> Result {
        (**self).apply(target)
    }

    fn reverse(&mut self, target: &mut T) -> Result {
        (**self).reverse(target)
    }

    fn reapply(&mut self, target: &mut T) -> Result {
        (**self).reapply(target)
    }
}

/// The outcome of an undo or redo request.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Outcome {
    /// The receiver was changed.
    Performed,
    /// There was nothing to undo and the receiver was left untouched.
    NothingToUndo,
    /// There was nothing to redo and the receiver was left untouched.
    NothingToRedo,
    /// The record was already where it was asked to go.
    Unchanged,
}

impl Outcome {
    /// Returns `true` if the receiver was changed.
    pub fn is_performed(self) -> bool {
        self == Outcome::Performed
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Outcome::Performed => f.write_str("Done."),
            Outcome::NothingToUndo => f.write_str("Nothing to undo."),
            Outcome::NothingToRedo => f.write_str("Nothing to redo."),
            Outcome::Unchanged => f.write_str("Nothing to do."),
        }
    }
}
