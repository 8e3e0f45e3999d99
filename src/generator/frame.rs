use super::line_writer::LineWriter;
use crate::parser::types::DEFAULT_TARGET;
use crate::utils::format_as_js_literal;

/// Tracks which document frame the generated script is currently in
#[derive(Debug, Clone)]
pub struct FrameContext {
    active_target: String,
}

impl FrameContext {
    pub fn new() -> Self {
        Self {
            active_target: DEFAULT_TARGET.to_string(),
        }
    }

    pub fn active_target(&self) -> &str {
        &self.active_target
    }

    /// Emit a frame switch when `target` differs from the active frame.
    ///
    /// Returns `true` when a switch statement was written.
    pub fn switch_to(&mut self, out: &mut LineWriter, target: Option<&str>) -> bool {
        let target = match target {
            Some(t) if t != self.active_target => t,
            _ => return false,
        };

        if target == DEFAULT_TARGET {
            log::debug!("Switching from frame {} to the top document", self.active_target);
            out.append_line("await browser.switchToParentFrame()");
        } else {
            log::debug!("Switching into frame {}", target);
            let frame = format_as_js_literal(&format!("iframe[src=\"{}\"]", target));
            out.append_line("await browser.switchToFrame(").start_block();
            out.append_line(&format!("await browser.$({})", frame))
                .end_block();
            out.append_line(")");
        }

        self.active_target = target.to_string();
        true
    }
}

impl Default for FrameContext {
    fn default() -> Self {
        Self::new()
    }
}
