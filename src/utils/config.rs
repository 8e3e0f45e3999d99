use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Indentation unit written once per block level
    pub indentation: String,

    /// Extension of generated scripts (without the dot)
    pub script_extension: String,

    /// Extension of recordings collected when a directory is given
    pub recording_extension: String,

    /// Directory generated scripts are written to
    pub output_dir: PathBuf,
}

impl Config {
    /// Override the indentation unit with `width` spaces
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indentation = " ".repeat(width);
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indentation: "  ".to_string(),
            script_extension: "js".to_string(),
            recording_extension: "json".to_string(),
            output_dir: PathBuf::from("./output"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_indent_width(4)
            .with_output_dir("e2e");
        assert_eq!(config.indentation, "    ");
        assert_eq!(config.output_dir, PathBuf::from("e2e"));
        assert_eq!(config.script_extension, "js");
    }
}
