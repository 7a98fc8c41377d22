//! Property-based invariant tests for the record.
//!
//! 1. Undoing every submitted edit restores the original content
//! 2. Undo followed by redo restores the content after the edit
//! 3. A submit after an undo leaves nothing to redo
//! 4. Over-truncation is reversed exactly

use proptest::prelude::*;
use rewind::{Edit, Outcome, Record, Receiver, TextBuffer};

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        "[a-zé ]{0,8}".prop_map(Edit::append),
        (0usize..12).prop_map(Edit::truncate),
    ]
}

fn content_strategy() -> impl Strategy<Value = String> {
    "[a-zñ ]{0,16}"
}

proptest! {
    #[test]
    fn undo_all_restores_original(
        initial in content_strategy(),
        edits in prop::collection::vec(edit_strategy(), 0..32),
    ) {
        let mut buffer = TextBuffer::from(initial.as_str());
        let mut record = Record::new();
        let count = edits.len();
        for edit in edits {
            record.submit(&mut buffer, edit).unwrap();
        }
        for _ in 0..count {
            prop_assert_eq!(record.undo(&mut buffer).unwrap(), Outcome::Performed);
        }
        prop_assert_eq!(buffer.content(), initial.as_str());
        prop_assert_eq!(record.undo(&mut buffer).unwrap(), Outcome::NothingToUndo);
    }

    #[test]
    fn undo_then_redo_restores_applied_state(
        initial in content_strategy(),
        edits in prop::collection::vec(edit_strategy(), 1..16),
    ) {
        let mut text = initial;
        let mut record = Record::new();
        for edit in edits {
            record.submit(&mut text, edit).unwrap();
            let applied = text.clone();
            record.undo(&mut text).unwrap();
            record.redo(&mut text).unwrap();
            prop_assert_eq!(&text, &applied);
        }
    }

    #[test]
    fn submit_after_undo_clears_redo(
        edits in prop::collection::vec(edit_strategy(), 1..16),
        undos in 1usize..16,
        next in edit_strategy(),
    ) {
        let mut text = String::new();
        let mut record = Record::new();
        for edit in edits {
            record.submit(&mut text, edit).unwrap();
        }
        for _ in 0..undos {
            record.undo(&mut text).unwrap();
        }
        record.submit(&mut text, next).unwrap();
        prop_assert_eq!(record.redoable_len(), 0);
        prop_assert_eq!(record.redo(&mut text).unwrap(), Outcome::NothingToRedo);
    }

    #[test]
    fn over_truncation_is_exact(initial in content_strategy(), extra in 0usize..8) {
        let mut buffer = TextBuffer::from(initial.as_str());
        let mut record = Record::new();
        let count = buffer.char_len() + extra;
        record.submit(&mut buffer, Edit::truncate(count)).unwrap();
        prop_assert!(buffer.is_empty());
        record.undo(&mut buffer).unwrap();
        prop_assert_eq!(buffer.content(), initial.as_str());
    }
}
