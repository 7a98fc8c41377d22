use crate::Record;
use core::marker::PhantomData;
use core::num::NonZeroUsize;
use std::collections::VecDeque;

/// Configures a [`Record`] before any command is submitted.
///
/// # Examples
/// ```
/// # use rewind::{Edit, Record, Signal};
/// # fn main() -> rewind::Result {
/// # let mut text = String::new();
/// let mut record = Record::builder()
///     .limit(100)
///     .capacity(16)
///     .saved(false)
///     .connect(|s: Signal| { dbg!(s); })
///     .build();
/// # record.submit(&mut text, Edit::append("a"))?;
/// assert_eq!(record.limit(), Some(100));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Builder<C, S = ()> {
    limit: Option<NonZeroUsize>,
    capacity: usize,
    saved: bool,
    slot: Option<S>,
    command: PhantomData<C>,
}

impl<C, S> Builder<C, S> {
    /// Keeps at most `limit` applied commands, dropping the oldest one when
    /// a command is submitted to a full record. `0` keeps every command.
    pub fn limit(mut self, limit: usize) -> Builder<C, S> {
        self.limit = NonZeroUsize::new(limit);
        self
    }

    /// Reserves room for `capacity` applied commands up front.
    pub fn capacity(mut self, capacity: usize) -> Builder<C, S> {
        self.capacity = capacity;
        self
    }

    /// Sets if the receiver starts out saved, which it does by default.
    pub fn saved(mut self, saved: bool) -> Builder<C, S> {
        self.saved = saved;
        self
    }

    /// Sets the slot that receives the record's signals.
    pub fn connect(mut self, slot: S) -> Builder<C, S> {
        self.slot = Some(slot);
        self
    }

    /// Builds an empty record.
    pub fn build(self) -> Record<C, S> {
        let capacity = match self.limit {
            Some(limit) => self.capacity.min(limit.get()),
            None => self.capacity,
        };
        Record {
            history: VecDeque::with_capacity(capacity),
            redoable: Vec::new(),
            limit: self.limit,
            saved: self.saved.then_some(0),
            slot: self.slot,
        }
    }
}

impl<C, S> Default for Builder<C, S> {
    fn default() -> Self {
        Builder {
            limit: None,
            capacity: 0,
            saved: true,
            slot: None,
            command: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Edit, Record};

    #[test]
    fn zero_limit_is_unlimited() {
        let mut text = String::new();
        let mut record: Record<Edit> = Record::builder().limit(0).build();
        assert_eq!(record.limit(), None);
        for _ in 0..10 {
            record.submit(&mut text, Edit::append("a")).unwrap();
        }
        assert_eq!(record.history_len(), 10);
    }

    #[test]
    fn capacity_is_bounded_by_limit() {
        let record: Record<Edit> = Record::builder().limit(2).capacity(64).build();
        assert!(record.capacity() >= 2);
        assert!(record.capacity() < 64);
    }
}
