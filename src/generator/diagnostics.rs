//! Non-fatal translation diagnostics.
//!
//! A step that cannot be translated is reported here and skipped; the rest of
//! the flow is still generated.

use thiserror::Error;

/// Condition that made the generator skip (part of) a step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("WebdriverIO export does not handle steps of type \"{kind}\"")]
    UnsupportedStep { kind: String },

    #[error("Key \"{key}\" is not supported by the WebdriverIO export")]
    UnsupportedKey { key: String },

    #[error(
        "The {action} on [{}] could not be exported to WebdriverIO. Please adjust your selectors and try again",
        .selectors.join(", ")
    )]
    UnresolvableSelector {
        action: String,
        selectors: Vec<String>,
    },
}

/// Channel receiving diagnostics during translation
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that forwards every diagnostic to the `log` facade
#[derive(Debug, Default)]
pub struct LogSink {
    source: Option<String>,
    reported: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every warning with the recording it came from
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            reported: 0,
        }
    }

    /// Number of diagnostics seen so far
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        match &self.source {
            Some(source) => log::warn!("{}: {}", source, diagnostic),
            None => log::warn!("{}", diagnostic),
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
