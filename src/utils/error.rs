use thiserror::Error;

/// The two failure classes a conversion run can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be read as CSV.
    Format,
    /// The filesystem refused a read or a write.
    Io,
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(csv::Error),

    #[error("Malformed CSV at line {line}: {reason}")]
    MalformedCsvError { line: u64, reason: String },

    #[error("Input contains no header row")]
    EmptyInputError,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid path for {field} ('{value}'): {reason}")]
    InvalidPathError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        // Read failures surface through csv as well; keep them as IO.
        let io_kind = match err.kind() {
            csv::ErrorKind::Io(io) => Some(io.kind()),
            _ => None,
        };
        match io_kind {
            Some(kind) => ConvertError::IoError(std::io::Error::new(kind, err)),
            None => ConvertError::CsvError(err),
        }
    }
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::IoError(_) | ConvertError::InvalidPathError { .. } => ErrorKind::Io,
            ConvertError::CsvError(_)
            | ConvertError::MalformedCsvError { .. }
            | ConvertError::EmptyInputError
            | ConvertError::SerializationError(_) => ErrorKind::Format,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Format => 1,
            ErrorKind::Io => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", e),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", e),
                _ => format!("Could not access a file: {}", e),
            },
            ConvertError::CsvError(e) => format!("The input is not valid CSV: {}", e),
            ConvertError::MalformedCsvError { line, reason } => {
                format!("The input is not valid CSV (line {}): {}", line, reason)
            }
            ConvertError::EmptyInputError => "The input file is empty".to_string(),
            ConvertError::SerializationError(e) => format!("Could not build JSON output: {}", e),
            ConvertError::InvalidPathError { field, value, reason } => {
                format!("Invalid {} '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Run the converter from the directory that contains the input CSV"
            }
            ConvertError::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                "Check the permissions of the input file and of the output directory"
            }
            ConvertError::IoError(_) => "Check free disk space and that the output path is not a directory",
            ConvertError::CsvError(_) | ConvertError::MalformedCsvError { .. } => {
                "Check the input for unbalanced quotes or rows with extra fields"
            }
            ConvertError::EmptyInputError => "Add a header row naming the columns",
            ConvertError::SerializationError(_) => "Re-run with --verbose and report the failing input",
            ConvertError::InvalidPathError { .. } => "Use a non-empty path without NUL bytes",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
