pub mod recording;
pub mod types;

pub use recording::{parse_recording_content, parse_recording_file, RecordingError};
pub use types::{RecordedStep, Selector, StepAction, UserFlow, DEFAULT_TARGET};
