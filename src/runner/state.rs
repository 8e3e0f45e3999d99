use std::path::PathBuf;

/// Outcome of transforming one recording file
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// Script written to disk
    Written { output: PathBuf },
    /// Script generated for a dry run
    Printed { script: String },
    /// Nothing to generate (empty recording, no usable file name)
    Skipped { reason: String },
    Failed { error: String },
}

impl FileStatus {
    /// Short status word used in progress logs
    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Written { .. } => "written",
            FileStatus::Printed { .. } => "printed",
            FileStatus::Skipped { .. } => "skipped",
            FileStatus::Failed { .. } => "failed",
        }
    }
}

/// Report for a single recording file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Diagnostics raised while generating the script
    pub diagnostics: usize,
}

impl FileReport {
    pub fn new(path: PathBuf, status: FileStatus) -> Self {
        Self {
            path,
            status,
            diagnostics: 0,
        }
    }
}

/// Summary of a transform run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformSummary {
    pub total_files: usize,
    pub written: usize,
    pub printed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub diagnostics: usize,
}

impl TransformSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self {
            total_files: reports.len(),
            ..Self::default()
        };

        for report in reports {
            summary.diagnostics += report.diagnostics;
            match report.status {
                FileStatus::Written { .. } => summary.written += 1,
                FileStatus::Printed { .. } => summary.printed += 1,
                FileStatus::Skipped { .. } => summary.skipped += 1,
                FileStatus::Failed { .. } => summary.failed += 1,
            }
        }

        summary
    }

    /// A run fails when there was nothing to do or every file failed
    pub fn is_failure(&self) -> bool {
        self.total_files == 0 || self.failed == self.total_files
    }
}
