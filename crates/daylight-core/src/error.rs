use std::path::PathBuf;

/// Settings file could not be turned into a record. Never fatal: the store
/// hands it back next to the default record.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Settings file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings file {} is not valid: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// A missing file is the normal first-run case, not corruption.
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadError::Missing(_))
    }
}

/// Settings file could not be written.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to create settings directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Field-level rejection of the form contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please select a ground floor level.")]
    MissingLevel,

    #[error("Invalid Transmission Value: '{raw}'.\nPlease enter an integer between 0 and 100.\n({reason})")]
    InvalidTransmission { raw: String, reason: String },
}

/// Why a submit attempt was aborted. The dialog stays open for every variant
/// except `Closed`.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Failed to save settings:\n{0}")]
    Save(#[from] SaveError),

    #[error("The settings dialog is already closed")]
    Closed,
}

/// Level export could not be used as a host document.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Failed to read level export {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Level export {} is not valid: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Level export {} contains no levels", .0.display())]
    Empty(PathBuf),
}
