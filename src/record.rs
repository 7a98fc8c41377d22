//! A record of commands.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::signal::{Signal, Slot};
use crate::{Command, Entry, Outcome, Result};
use core::num::NonZeroUsize;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A record of commands.
///
/// The record keeps two stacks: the applied commands that can be undone, and the
/// undone commands that can be redone. Undo moves the most recent command from the
/// first stack to the second, redo moves it back, and submitting a new command
/// clears the second stack.
///
/// The record does not own the receiver; it is passed to every call that may change it.
/// All changes to the receiver must go through the record, otherwise the stacks no
/// longer describe its content.
///
/// # Examples
/// ```
/// # use rewind::{Edit, Outcome, Record};
/// # fn main() -> rewind::Result {
/// let mut text = String::from("Hi");
/// let mut record = Record::new();
/// record.submit(&mut text, Edit::truncate(10))?;
/// assert_eq!(text, "");
/// record.undo(&mut text)?;
/// assert_eq!(text, "Hi");
/// assert_eq!(record.undo(&mut text)?, Outcome::NothingToUndo);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Record<C, S = ()> {
    pub(crate) history: VecDeque<Entry<C>>,
    pub(crate) redoable: Vec<Entry<C>>,
    pub(crate) limit: Option<NonZeroUsize>,
    pub(crate) saved: Option<usize>,
    pub(crate) slot: Option<S>,
}

/// Snapshot taken before a change and compared with the state after it.
#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    history: usize,
    redoable: usize,
    saved: bool,
}

impl<C> Record<C> {
    /// Returns a new record.
    pub fn new() -> Record<C> {
        Builder::default().build()
    }
}

impl<C, S> Record<C, S> {
    /// Returns a new record builder.
    pub fn builder() -> Builder<C, S> {
        Builder::default()
    }

    /// Reserves capacity for at least `additional` more commands.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.history.reserve(additional);
    }

    /// Returns the capacity of the record.
    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }

    /// Shrinks the capacity of the record as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.history.shrink_to_fit();
        self.redoable.shrink_to_fit();
    }

    /// Returns the number of commands in the record, applied and undone.
    pub fn len(&self) -> usize {
        self.history_len() + self.redoable_len()
    }

    /// Returns `true` if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of applied commands that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the number of undone commands that can be redone.
    pub fn redoable_len(&self) -> usize {
        self.redoable.len()
    }

    /// Returns the maximum number of applied commands kept,
    /// or `None` if the record is unlimited.
    pub fn limit(&self) -> Option<usize> {
        self.limit.map(NonZeroUsize::get)
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.slot.replace(slot)
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.slot.take()
    }

    /// Returns `true` if the record can undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns `true` if the record can redo.
    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }

    /// Returns `true` if the receiver is in a saved state, `false` otherwise.
    pub fn is_saved(&self) -> bool {
        self.saved == Some(self.history_len())
    }

    /// Returns the applied commands, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &C> {
        self.history.iter().map(Entry::get)
    }

    /// Returns the undone commands, the next one to be redone last.
    pub fn redoable(&self) -> impl DoubleEndedIterator<Item = &C> {
        self.redoable.iter().map(Entry::get)
    }

    /// Returns all entries in the order they were applied,
    /// the undone ones after the applied ones.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<C>> {
        self.history.iter().chain(self.redoable.iter().rev())
    }

    /// Returns a structure for configurable formatting of the record.
    pub fn display(&self) -> Display<'_, C, S> {
        Display::from(self)
    }

    fn state(&self) -> State {
        State {
            history: self.history_len(),
            redoable: self.redoable_len(),
            saved: self.is_saved(),
        }
    }
}

impl<C, S: Slot> Record<C, S> {
    /// Emits a signal for every part of the state that differs from `old`.
    fn notify(&mut self, old: State) {
        let new = self.state();
        let Some(slot) = &mut self.slot else {
            return;
        };
        if (old.history > 0) != (new.history > 0) {
            slot.on_emit(Signal::Undo(new.history > 0));
        }
        if (old.redoable > 0) != (new.redoable > 0) {
            slot.on_emit(Signal::Redo(new.redoable > 0));
        }
        if old.saved != new.saved {
            slot.on_emit(Signal::Saved(new.saved));
        }
        if (old.history, old.redoable) != (new.history, new.redoable) {
            slot.on_emit(Signal::Stacks {
                history: new.history,
                redoable: new.redoable,
            });
        }
    }

    /// Applies the command to the receiver and pushes it on top of the record.
    ///
    /// Everything that was undone is discarded and can no longer be redone.
    ///
    /// # Errors
    /// If an error occur when applying the command it is returned and the record
    /// is left unchanged.
    pub fn submit<T>(&mut self, target: &mut T, mut command: C) -> Result
    where
        C: Command<T>,
    {
        command.apply(target)?;
        let old = self.state();
        // The undone commands are no longer reachable.
        self.redoable.clear();
        self.saved = self.saved.filter(|&saved| saved <= old.history);
        if self.limit() == Some(old.history) {
            self.history.pop_front();
            self.saved = self.saved.and_then(|saved| saved.checked_sub(1));
        }
        self.history.push_back(Entry::from(command));
        debug!(
            history = self.history_len(),
            dropped = old.redoable,
            "submitted command"
        );
        self.notify(old);
        Ok(())
    }

    /// Reverses the most recently applied command and moves it to the redo stack.
    ///
    /// Returns [`Outcome::NothingToUndo`] if there is nothing to undo.
    ///
    /// # Errors
    /// If an error occur when reversing the command it is returned and the
    /// command stays where it was.
    pub fn undo<T>(&mut self, target: &mut T) -> Result<Outcome>
    where
        C: Command<T>,
    {
        let old = self.state();
        let Some(entry) = self.history.back_mut() else {
            debug!("nothing to undo");
            return Ok(Outcome::NothingToUndo);
        };
        if let Err(err) = entry.get_mut().reverse(target) {
            warn!(%err, "failed to undo command");
            return Err(err);
        }
        if let Some(entry) = self.history.pop_back() {
            self.redoable.push(entry);
        }
        debug!(
            history = self.history_len(),
            redoable = self.redoable_len(),
            "undid command"
        );
        self.notify(old);
        Ok(Outcome::Performed)
    }

    /// Reapplies the most recently undone command and moves it back to the history.
    ///
    /// Returns [`Outcome::NothingToRedo`] if there is nothing to redo.
    ///
    /// # Errors
    /// If an error occur when reapplying the command it is returned and the
    /// command stays where it was.
    pub fn redo<T>(&mut self, target: &mut T) -> Result<Outcome>
    where
        C: Command<T>,
    {
        let old = self.state();
        let Some(entry) = self.redoable.last_mut() else {
            debug!("nothing to redo");
            return Ok(Outcome::NothingToRedo);
        };
        if let Err(err) = entry.get_mut().reapply(target) {
            warn!(%err, "failed to redo command");
            return Err(err);
        }
        if let Some(entry) = self.redoable.pop() {
            self.history.push_back(entry);
        }
        debug!(
            history = self.history_len(),
            redoable = self.redoable_len(),
            "redid command"
        );
        self.notify(old);
        Ok(Outcome::Performed)
    }

    /// Marks the receiver as currently being in a saved or unsaved state.
    pub fn set_saved(&mut self, saved: bool) {
        let old = self.state();
        self.saved = saved.then(|| self.history_len());
        self.notify(old);
    }

    /// Removes all commands from the record without undoing them.
    pub fn clear(&mut self) {
        let old = self.state();
        self.history.clear();
        self.redoable.clear();
        self.saved = old.saved.then_some(0);
        debug!("cleared record");
        self.notify(old);
    }

    /// Repeatedly calls [`undo`](Record::undo) or [`redo`](Record::redo) until
    /// exactly `depth` commands are applied.
    ///
    /// Returns [`Outcome::Unchanged`] if `depth` commands are already applied, and
    /// [`Outcome::NothingToRedo`] without changing anything if `depth` is greater
    /// than [`len`](Record::len).
    ///
    /// # Errors
    /// If an error occur when undoing or redoing a command it is returned and the
    /// record stops at the last command that succeeded.
    pub fn go_to<T>(&mut self, target: &mut T, depth: usize) -> Result<Outcome>
    where
        C: Command<T>,
    {
        if depth > self.len() {
            return Ok(Outcome::NothingToRedo);
        }
        let old = self.state();
        if depth == old.history {
            return Ok(Outcome::Unchanged);
        }
        // The slot hears about the net change once, not every step.
        let slot = self.slot.take();
        let forward = depth > old.history;
        let mut result = Ok(Outcome::Performed);
        while self.history_len() != depth {
            let step = if forward {
                self.redo(target)
            } else {
                self.undo(target)
            };
            if let Err(err) = step {
                result = Err(err);
                break;
            }
        }
        self.slot = slot;
        debug!(from = old.history, to = self.history_len(), "went to depth");
        self.notify(old);
        result
    }

    /// Reverts the changes done to the receiver since the saved state.
    ///
    /// Returns `None` if there is no saved state to go back to.
    pub fn revert<T>(&mut self, target: &mut T) -> Option<Result<Outcome>>
    where
        C: Command<T>,
    {
        self.saved.map(|saved| self.go_to(target, saved))
    }
}

impl<C: ToString, S> Record<C, S> {
    /// Returns the string of the command which will be undone
    /// in the next call to [`undo`](Record::undo).
    pub fn undo_text(&self) -> Option<String> {
        self.history.back().map(|e| e.get().to_string())
    }

    /// Returns the string of the command which will be redone
    /// in the next call to [`redo`](Record::redo).
    pub fn redo_text(&self) -> Option<String> {
        self.redoable.last().map(|e| e.get().to_string())
    }
}

impl<C> Default for Record<C> {
    fn default() -> Record<C> {
        Record::new()
    }
}

impl<C: core::fmt::Debug, S> core::fmt::Debug for Record<C, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Record")
            .field("history", &self.history)
            .field("redoable", &self.redoable)
            .field("limit", &self.limit)
            .field("saved", &self.saved)
            .finish()
    }
}
