//! WebdriverIO script generator
//!
//! This module provides:
//! - Selector resolution to choose one locator per step
//! - Frame tracking to switch between iframes
//! - Per-step statement templates
//! - Flow transcription into a `describe`/`it` script

pub mod diagnostics;
pub mod frame;
pub mod keys;
pub mod line_writer;
pub mod selector_resolver;
pub mod steps;
pub mod transcriber;

pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use frame::FrameContext;
pub use line_writer::LineWriter;
pub use selector_resolver::{resolve, LocatorStrategy, ResolvedLocator};
pub use steps::StepTranslator;
pub use transcriber::FlowTranscriber;

use crate::parser::{parse_recording_content, RecordingError, UserFlow};

/// Generate a script for an already parsed flow
pub fn stringify_flow(flow: &UserFlow, indentation: &str, sink: &mut dyn DiagnosticSink) -> String {
    FlowTranscriber::new(indentation, sink).transcribe(flow)
}

/// Parse recording text and generate its script
pub fn stringify_recording(
    recording: &str,
    indentation: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<String, RecordingError> {
    let flow = parse_recording_content(recording)?;
    Ok(stringify_flow(&flow, indentation, sink))
}
