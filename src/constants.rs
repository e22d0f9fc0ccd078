// Custom log types for the event log
pub const LOG_TYPE_SETTINGS: &str = "settings";
pub const LOG_TYPE_HELP: &str = "help";

// Level export given on the command line
pub const LEVELS_ARG_INDEX: usize = 1;
