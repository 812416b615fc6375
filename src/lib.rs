pub mod clock;
pub mod log_file;
pub mod recorder;
pub mod tui;
