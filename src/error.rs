use thiserror::Error;

/// A specialized Result type for undo-redo operations.
pub type Result<T = ()> = core::result::Result<T, Error>;

/// Errors returned by commands and the record.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The command was asked to reverse an effect it never applied.
    #[error("`{command}` has not been applied")]
    NotApplied {
        /// Name of the command that was reversed.
        command: &'static str,
    },
}
