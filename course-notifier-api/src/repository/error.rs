use mongodb::error::{ErrorKind, WriteFailure};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unique violation")]
    UniqueViolation,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl Error {
    ///
    /// Maps error returned by write operation.
    ///
    /// Duplicate key is reported as write error by inserts
    /// and as command error by find-and-modify operations.
    ///
    pub fn from_write(err: mongodb::error::Error) -> Self {
        const DUPLICATE_KEY_CODE: i32 = 11000;

        let code = match *err.kind {
            ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => Some(write_error.code),
            ErrorKind::Command(ref command_error) => Some(command_error.code),
            _ => None,
        };

        match code == Some(DUPLICATE_KEY_CODE) {
            true => Error::UniqueViolation,
            false => Error::Mongo(err),
        }
    }
}
