// Daylight Factor settings core
// Settings persistence and form logic, independent of the GUI toolkit

pub mod config;
pub mod error;
pub mod form;
pub mod help;
pub mod host;
pub mod settings;

pub use error::{FormError, HostError, LoadError, SaveError, SubmitError};
pub use form::{DialogState, FormState, SettingsDialog};
pub use host::{FeetDocument, HostDocument, Level, UnitConverter};
pub use settings::{ExecutionMode, LoadOutcome, SettingsRecord, SettingsStore, Transmission};
