use super::diagnostics::DiagnosticSink;
use super::frame::FrameContext;
use super::line_writer::LineWriter;
use super::steps::StepTranslator;
use crate::parser::types::UserFlow;
use crate::utils::format_as_js_literal;

/// Turns a whole user flow into a WebdriverIO `describe`/`it` script
pub struct FlowTranscriber<'a> {
    indentation: String,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> FlowTranscriber<'a> {
    pub fn new(indentation: &str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            indentation: indentation.to_string(),
            sink,
        }
    }

    /// Translate `flow` step by step; unsupported steps are reported and skipped.
    pub fn transcribe(&mut self, flow: &UserFlow) -> String {
        let mut out = LineWriter::new(&self.indentation);
        let mut frames = FrameContext::new();

        out.append_line(&format!("describe({}, () => {{", format_as_js_literal(&flow.title)))
            .start_block();
        out.append_line(&format!(
            "it({}, async () => {{",
            format_as_js_literal(&format!("tests {}", flow.title))
        ))
        .start_block();

        let mut translator =
            StepTranslator::new(flow.selector_attribute.as_deref(), &mut *self.sink);
        for step in &flow.steps {
            frames.switch_to(&mut out, step.target.as_deref());
            translator.translate(&mut out, step);
            translator.translate_asserted_events(&mut out, &step.asserted_events);
        }

        out.end_block().append_line("});");
        out.end_block().append_line("});");

        debug_assert_eq!(out.depth(), 0);
        out.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::diagnostics::Diagnostic;
    use crate::parser::parse_recording_content;

    fn transcribe(json: &str) -> (String, Vec<Diagnostic>) {
        let flow = parse_recording_content(json).unwrap();
        let mut diagnostics = Vec::new();
        let script = FlowTranscriber::new("  ", &mut diagnostics).transcribe(&flow);
        (script, diagnostics)
    }

    #[test]
    fn test_empty_flow() {
        let (script, _) = transcribe(r#"{ "title": "empty", "steps": [] }"#);
        assert_eq!(
            script,
            concat!(
                "describe(\"empty\", () => {\n",
                "  it(\"tests empty\", async () => {\n",
                "  });\n",
                "});\n",
            )
        );
    }

    #[test]
    fn test_full_flow() {
        let (script, diagnostics) = transcribe(
            r##"{
  "title": "search docs",
  "steps": [
    { "type": "setViewport", "width": 1280, "height": 720 },
    {
      "type": "navigate",
      "url": "https://webdriver.io/",
      "assertedEvents": [{ "type": "navigation", "url": "https://webdriver.io/" }]
    },
    { "type": "click", "target": "main", "selectors": [["aria/Search"], ["#docsearch"]] },
    { "type": "change", "target": "main", "selectors": [["#docsearch-input"]], "value": "click" }
  ]
}"##,
        );

        assert!(diagnostics.is_empty());
        assert_eq!(
            script,
            concat!(
                "describe(\"search docs\", () => {\n",
                "  it(\"tests search docs\", async () => {\n",
                "    await browser.setWindowSize(1280, 720)\n",
                "    await browser.url(\"https://webdriver.io/\")\n",
                "    await expect(browser).toHaveUrl(\"https://webdriver.io/\")\n",
                "    await browser.$(\"#docsearch\").click()\n",
                "    await browser.$(\"#docsearch-input\").setValue(\"click\")\n",
                "  });\n",
                "});\n",
            )
        );
    }

    #[test]
    fn test_frame_switches_between_steps() {
        let (script, _) = transcribe(
            r##"{
  "title": "frames",
  "steps": [
    { "type": "click", "target": "main", "selectors": [["#a"]] },
    { "type": "click", "target": "https://x", "selectors": [["#b"]] },
    { "type": "click", "target": "https://x", "selectors": [["#c"]] },
    { "type": "click", "target": "main", "selectors": [["#d"]] }
  ]
}"##,
        );

        let lines: Vec<&str> = script.lines().map(str::trim).collect();
        assert_eq!(
            &lines[2..12],
            &[
                "await browser.$(\"#a\").click()",
                "await browser.switchToFrame(",
                "await browser.$(\"iframe[src=\\\"https://x\\\"]\")",
                ")",
                "await browser.$(\"#b\").click()",
                "await browser.$(\"#c\").click()",
                "await browser.switchToParentFrame()",
                "await browser.$(\"#d\").click()",
                "});",
                "});",
            ]
        );
        assert_eq!(script.matches("switchToFrame(").count(), 1);
        assert_eq!(script.matches("switchToParentFrame()").count(), 1);
    }

    #[test]
    fn test_unresolvable_step_does_not_stop_the_flow() {
        let (script, diagnostics) = transcribe(
            r##"{
  "title": "skips",
  "steps": [
    { "type": "click", "selectors": [["#first"]] },
    {
      "type": "click",
      "target": "https://frame",
      "selectors": [],
      "assertedEvents": [{ "type": "navigation", "url": "https://next" }]
    },
    { "type": "unknownThing" },
    { "type": "keyDown", "key": "Hyper" },
    { "type": "click", "selectors": [["#last"]] }
  ]
}"##,
        );

        assert_eq!(diagnostics.len(), 3);
        assert!(matches!(diagnostics[0], Diagnostic::UnresolvableSelector { .. }));
        assert!(matches!(diagnostics[1], Diagnostic::UnsupportedStep { .. }));
        assert!(matches!(diagnostics[2], Diagnostic::UnsupportedKey { .. }));

        // frame switch and assertion of the skipped step are still written
        assert!(script.contains("await browser.switchToFrame("));
        assert!(script.contains("await expect(browser).toHaveUrl(\"https://next\")"));
        assert!(script.contains("await browser.$(\"#first\").click()"));
        assert!(script.contains("await browser.$(\"#last\").click()"));
        // 2 wrappers open, 2 close, 2 clicks, 3 frame lines, 1 assertion
        assert_eq!(script.lines().count(), 10);
    }

    #[test]
    fn test_flow_built_in_code() {
        use crate::parser::types::{
            AssertedEvent, ElementParams, NavigateParams, RecordedStep, StepAction,
        };

        let flow = UserFlow {
            title: "built".to_string(),
            selector_attribute: None,
            steps: vec![
                RecordedStep::new(StepAction::Navigate(NavigateParams {
                    url: "https://x".to_string(),
                }))
                .with_asserted_event(AssertedEvent::navigation("https://x")),
                RecordedStep::new(StepAction::Hover(ElementParams {
                    selectors: vec!["#menu".into()],
                }))
                .with_target("https://frame"),
            ],
        };

        let mut diagnostics = Vec::new();
        let script = FlowTranscriber::new("  ", &mut diagnostics).transcribe(&flow);
        assert!(diagnostics.is_empty());
        assert!(script.contains("    await expect(browser).toHaveUrl(\"https://x\")\n"));
        assert!(script.contains("      await browser.$(\"iframe[src=\\\"https://frame\\\"]\")\n"));
        assert!(script.contains("    await browser.$(\"#menu\").moveTo()\n"));
    }

    #[test]
    fn test_independent_flows_do_not_share_frame_state() {
        let json = r##"{
  "title": "iframe",
  "steps": [{ "type": "click", "target": "https://x", "selectors": [["#b"]] }]
}"##;
        let flow = parse_recording_content(json).unwrap();
        let mut diagnostics = Vec::new();
        let mut transcriber = FlowTranscriber::new("  ", &mut diagnostics);

        let first = transcriber.transcribe(&flow);
        let second = transcriber.transcribe(&flow);
        assert_eq!(first, second);
        assert!(second.contains("switchToFrame("));
    }
}
