use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not open file {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {path}: {source}")]
    ReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("memory allocation of {requested} bytes failed")]
    MemoryAllocation { requested: usize },
}

impl LoadError {
    /// The discriminant for this failure. Size-probe and read errors share
    /// a kind.
    pub fn kind(&self) -> FailureKind {
        match self {
            LoadError::FileNotFound { .. } => FailureKind::FileNotFound,
            LoadError::ReadFailure { .. } => FailureKind::ReadFailure,
            LoadError::MemoryAllocation { .. } => FailureKind::MemoryAllocation,
        }
    }
}

/// Identity-only failure classification. The numeric values double as
/// process exit statuses in recover mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    FileNotFound = 1,
    ReadFailure = 2,
    MemoryAllocation = 3,
}

impl FailureKind {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<FailureKind> {
        match code {
            1 => Some(FailureKind::FileNotFound),
            2 => Some(FailureKind::ReadFailure),
            3 => Some(FailureKind::MemoryAllocation),
            _ => None,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::FileNotFound => write!(f, "file_not_found"),
            FailureKind::ReadFailure => write!(f, "read_failure"),
            FailureKind::MemoryAllocation => write!(f, "memory_allocation"),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_kinds() {
        assert_eq!(FailureKind::FileNotFound.code(), 1);
        assert_eq!(FailureKind::ReadFailure.code(), 2);
        assert_eq!(FailureKind::MemoryAllocation.code(), 3);
    }

    #[test]
    fn test_from_code_round_trips() {
        for kind in [
            FailureKind::FileNotFound,
            FailureKind::ReadFailure,
            FailureKind::MemoryAllocation,
        ] {
            assert_eq!(FailureKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_from_code_rejects_out_of_set_values() {
        assert_eq!(FailureKind::from_code(0), None);
        assert_eq!(FailureKind::from_code(4), None);
        assert_eq!(FailureKind::from_code(-1), None);
    }

    #[test]
    fn test_error_kind_mapping() {
        let not_found = LoadError::FileNotFound {
            path: "x".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(not_found.kind(), FailureKind::FileNotFound);

        let alloc = LoadError::MemoryAllocation { requested: 16 };
        assert_eq!(alloc.kind(), FailureKind::MemoryAllocation);
    }

    #[test]
    fn test_display_names_the_path() {
        let err = LoadError::ReadFailure {
            path: "/tmp/data.bin".into(),
            source: std::io::Error::from(std::io::ErrorKind::Other),
        };
        assert!(err.to_string().contains("/tmp/data.bin"));
    }
}
