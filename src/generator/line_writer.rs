/// Indentation-aware accumulator for generated script lines
#[derive(Debug, Clone)]
pub struct LineWriter {
    indentation: String,
    depth: usize,
    lines: Vec<String>,
}

impl LineWriter {
    /// Create a writer that indents each block level by `indentation`
    pub fn new(indentation: &str) -> Self {
        Self {
            indentation: indentation.to_string(),
            depth: 0,
            lines: Vec::new(),
        }
    }

    /// Append one line at the current depth. An empty line is written bare.
    pub fn append_line(&mut self, line: &str) -> &mut Self {
        if line.is_empty() {
            self.lines.push(String::new());
        } else {
            let indented = format!("{}{}", self.indentation.repeat(self.depth), line);
            self.lines.push(indented.trim_end().to_string());
        }
        self
    }

    pub fn start_block(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Close the innermost block.
    ///
    /// # Panics
    ///
    /// Panics when no block is open; that is a generator bug, not bad input.
    pub fn end_block(&mut self) -> &mut Self {
        assert!(self.depth > 0, "end_block called with no open block");
        self.depth -= 1;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join all lines; scripts end with a final newline.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for LineWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
