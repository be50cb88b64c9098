use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no input value was provided")]
    MissingInput,

    #[error("input is not valid UTF-8")]
    InvalidEncoding,

    #[error("invalid number '{token}': {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("input '{token}' is not a number")]
    NotANumber { token: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    System,
}

impl SignError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignError::Io(_) => ErrorKind::System,
            SignError::MissingInput
            | SignError::InvalidEncoding
            | SignError::InvalidNumber { .. }
            | SignError::NotANumber { .. } => ErrorKind::Input,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Input => 1,
            ErrorKind::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SignError>;
