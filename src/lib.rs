pub mod generator;
pub mod parser;
pub mod runner;
pub mod utils;

// Re-export common items
pub use generator::{stringify_flow, stringify_recording};
pub use parser::parse_recording_content;
pub use runner::run_transforms;
