use rewind::{Edit, Record, Receiver, TextBuffer};
use tracing_subscriber::EnvFilter;

fn stacks(record: &Record<Edit>) {
    let history: Vec<_> = record.history().map(Edit::name).collect();
    let redoable: Vec<_> = record.redoable().map(Edit::name).collect();
    println!("Undo stack: {history:?}");
    println!("Redo stack: {redoable:?}");
}

fn main() -> rewind::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut editor = TextBuffer::new();
    let mut record = Record::new();

    record.submit(&mut editor, Edit::append("Hello"))?;
    record.submit(&mut editor, Edit::append(" World"))?;
    println!("Current text: {}", editor.content());

    record.submit(&mut editor, Edit::truncate(" World".chars().count()))?;
    println!("After deletion: {}", editor.content());

    record.undo(&mut editor)?;
    println!("After undo: {}", editor.content());
    stacks(&record);

    record.redo(&mut editor)?;
    println!("After redo: {}", editor.content());

    let outcome = record.redo(&mut editor)?;
    println!("{outcome}");

    println!();
    println!("{}", record.display());
    Ok(())
}
