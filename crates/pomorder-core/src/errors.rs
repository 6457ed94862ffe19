use pomorder_core_types::RunId;
use thiserror::Error;

/// Result type alias using PomOrderError
pub type Result<T> = std::result::Result<T, PomOrderError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,

    // Diff contract
    /// An edit script broke the positional contract (out of bounds, overlap, degenerate op)
    ContractViolation,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ContractViolation => "ERR_CONTRACT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    run_id: Option<RunId>,
    op_index: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            run_id: None,
            op_index: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add the index of the offending edit operation
    pub fn with_op_index(mut self, index: usize) -> Self {
        self.op_index = Some(index);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    pub fn op_index(&self) -> Option<usize> {
        self.op_index
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(index) = self.op_index {
            write!(f, " (edit op #{})", index)?;
        }
        if let Some(run_id) = &self.run_id {
            write!(f, " (run_id: {})", run_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for pomorder operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PomOrderError {
    /// An edit script violated the renderer's positional contract.
    ///
    /// This is an internal invariant failure, never a "sequences differ" result.
    #[error("Edit script contract violation at op #{op_index}: {reason}")]
    ContractViolation { op_index: usize, reason: String },

    /// An input line is not a valid single line
    #[error("Invalid line at index {index}: {reason}")]
    InvalidLine { index: usize, reason: String },

    /// A name does not denote a known POM section
    #[error("Unknown POM section: {name}")]
    UnknownSection { name: String },

    /// Reading an input file failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Decoding or encoding structured input/output failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<PomOrderError> for ExError {
    fn from(err: PomOrderError) -> Self {
        match err {
            PomOrderError::ContractViolation { op_index, reason } => {
                ExError::new(ExErrorKind::ContractViolation)
                    .with_op_index(op_index)
                    .with_message(reason)
            }

            PomOrderError::InvalidLine { index, reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("line {}: {}", index, reason)),

            PomOrderError::UnknownSection { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("unknown POM section `{}`", name)),

            PomOrderError::Io { path, message } => {
                ExError::new(ExErrorKind::Io).with_message(format!("{}: {}", path, message))
            }

            PomOrderError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            PomOrderError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for PomOrderError {
    fn from(err: serde_json::Error) -> Self {
        PomOrderError::Serialization {
            message: err.to_string(),
        }
    }
}
