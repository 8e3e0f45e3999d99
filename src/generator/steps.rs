//! Per-step WebdriverIO statement templates

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::keys;
use super::line_writer::LineWriter;
use super::selector_resolver::{self, ResolvedLocator};
use crate::parser::types::{
    AssertedEvent, ChangeParams, ClickParams, CountOperator, ElementParams, KeyParams,
    MouseButton, NetworkConditionsParams, RecordedStep, ScrollParams, Selector, StepAction,
    WaitForElementParams,
};
use crate::utils::format_as_js_literal;

/// Direction of a key action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Down,
    Up,
}

impl KeyAction {
    fn as_str(self) -> &'static str {
        match self {
            KeyAction::Down => "keyDown",
            KeyAction::Up => "keyUp",
        }
    }
}

/// Translates single recorded steps into WebdriverIO statements
pub struct StepTranslator<'a> {
    selector_attribute: Option<&'a str>,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> StepTranslator<'a> {
    pub fn new(selector_attribute: Option<&'a str>, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            selector_attribute,
            sink,
        }
    }

    /// Write the main statement of `step`, if it has one
    pub fn translate(&mut self, out: &mut LineWriter, step: &RecordedStep) {
        match &step.action {
            StepAction::Navigate(params) => {
                out.append_line(&format!(
                    "await browser.url({})",
                    format_as_js_literal(&params.url)
                ));
            }
            StepAction::SetViewport(params) => {
                out.append_line(&format!(
                    "await browser.setWindowSize({}, {})",
                    params.width, params.height
                ));
            }
            StepAction::Click(params) => self.click(out, params),
            StepAction::DoubleClick(params) => self.double_click(out, params),
            StepAction::Change(params) => self.change(out, params),
            StepAction::KeyDown(params) => self.key(out, params, KeyAction::Down),
            StepAction::KeyUp(params) => self.key(out, params, KeyAction::Up),
            StepAction::Scroll(params) => self.scroll(out, params),
            StepAction::Hover(params) => self.hover(out, params),
            StepAction::EmulateNetworkConditions(params) => network_conditions(out, params),
            StepAction::WaitForElement(params) => self.wait_for_element(out, params),
            StepAction::WaitForExpression(params) => {
                out.append_line(&format!(
                    "await browser.executeAsync(async () => {})",
                    params.expression
                ));
            }
            StepAction::Other(kind) => self.sink.report(Diagnostic::UnsupportedStep {
                kind: kind.clone(),
            }),
        }
    }

    /// Write one URL assertion per asserted navigation event
    pub fn translate_asserted_events(&mut self, out: &mut LineWriter, events: &[AssertedEvent]) {
        // Only navigation events have a WebdriverIO assertion
        for event in events.iter().filter(|e| e.kind == "navigation") {
            if let Some(url) = &event.url {
                out.append_line(&format!(
                    "await expect(browser).toHaveUrl({})",
                    format_as_js_literal(url)
                ));
            }
        }
    }

    fn locate(&self, selectors: &[Selector]) -> Option<ResolvedLocator> {
        selector_resolver::resolve(selectors, self.selector_attribute)
    }

    /// Resolve selectors, reporting a diagnostic when nothing usable was recorded
    fn locate_or_report(&mut self, action: &str, selectors: &[Selector]) -> Option<ResolvedLocator> {
        let locator = self.locate(selectors);
        if locator.is_none() {
            self.sink.report(Diagnostic::UnresolvableSelector {
                action: action.to_string(),
                selectors: selectors
                    .iter()
                    .flat_map(|s| s.entries())
                    .map(str::to_string)
                    .collect(),
            });
        }
        locator
    }

    fn click(&mut self, out: &mut LineWriter, params: &ClickParams) {
        let Some(locator) = self.locate_or_report("click", &params.selectors) else {
            return;
        };

        if params.button == Some(MouseButton::Secondary) {
            out.append_line(&format!(
                "await browser.$({}).click({{ button: 'right' }})",
                locator
            ));
        } else {
            out.append_line(&format!("await browser.$({}).click()", locator));
        }
    }

    fn double_click(&mut self, out: &mut LineWriter, params: &ElementParams) {
        if let Some(locator) = self.locate_or_report("double click", &params.selectors) {
            out.append_line(&format!("await browser.$({}).doubleClick()", locator));
        }
    }

    fn change(&mut self, out: &mut LineWriter, params: &ChangeParams) {
        // A value without a target element has nothing to be assigned to
        if let Some(locator) = self.locate(&params.selectors) {
            out.append_line(&format!(
                "await browser.$({}).setValue({})",
                locator,
                format_as_js_literal(&params.value)
            ));
        }
    }

    fn key(&mut self, out: &mut LineWriter, params: &KeyParams, action: KeyAction) {
        let Some(entry) = keys::lookup(&params.key) else {
            self.sink.report(Diagnostic::UnsupportedKey {
                key: params.key.to_lowercase(),
            });
            return;
        };

        out.append_line("await browser.performActions([{").start_block();
        out.append_line("type: 'key',");
        out.append_line("id: 'keyboard',");
        out.append_line(&format!(
            "actions: [{{ type: '{}', value: '{}' }}]",
            action.as_str(),
            entry.js_value()
        ))
        .end_block();
        out.append_line("}])");
    }

    fn scroll(&mut self, out: &mut LineWriter, params: &ScrollParams) {
        match params {
            ScrollParams::Element { selectors } => {
                if let Some(locator) = self.locate_or_report("scroll", selectors) {
                    out.append_line(&format!("await browser.$({}).moveTo()", locator));
                }
            }
            ScrollParams::Window { x, y } => {
                out.append_line(&format!(
                    "await browser.execute(() => window.scrollTo({}, {}))",
                    x, y
                ));
            }
        }
    }

    fn hover(&mut self, out: &mut LineWriter, params: &ElementParams) {
        if let Some(locator) = self.locate_or_report("hover", &params.selectors) {
            out.append_line(&format!("await browser.$({}).moveTo()", locator));
        }
    }

    fn wait_for_element(&mut self, out: &mut LineWriter, params: &WaitForElementParams) {
        // Written even when no locator resolves
        let locator = self
            .locate_or_report("wait for element", &params.selectors)
            .map(|l| l.to_js())
            .unwrap_or_else(|| "undefined".to_string());

        let opts = params
            .timeout
            .map(|timeout| format!(", {{ timeout: {} }}", timeout))
            .unwrap_or_default();

        let size = match params.operator {
            CountOperator::AtMost => format!("{{ lte: {} }}", params.count),
            CountOperator::Exactly => params.count.to_string(),
            CountOperator::AtLeast => format!("{{ gte: {} }}", params.count),
        };

        out.append_line(&format!(
            "await expect(browser.$$({})).toBeElementsArrayOfSize({}{})",
            locator, size, opts
        ));
    }
}

fn network_conditions(out: &mut LineWriter, params: &NetworkConditionsParams) {
    out.append_line("await browser.setNetworkConditions({").start_block();
    out.append_line("offline: false,");
    out.append_line(&format!("latency: {},", params.latency));
    out.append_line(&format!("download_throughput: {},", params.download));
    out.append_line(&format!("upload_throughput: {}", params.upload))
        .end_block();
    out.append_line("})");
}
