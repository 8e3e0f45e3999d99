use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Frame target that denotes the top-level document
pub const DEFAULT_TARGET: &str = "main";

/// Represents a parsed user flow from a Chrome DevTools recording
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFlow {
    pub title: String,

    /// Preferred HTML attribute used to bias selector choice (e.g. `data-test`)
    #[serde(default)]
    pub selector_attribute: Option<String>,

    #[serde(default)]
    pub steps: Vec<RecordedStep>,
}

/// One entry of a step's `selectors` list.
///
/// The recorder writes either a bare string or a group of equivalent strings
/// ordered from most to least specific.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    Single(String),
    Group(Vec<String>),
}

impl Selector {
    /// First (most specific) selector string of this entry
    pub fn first(&self) -> Option<&str> {
        match self {
            Selector::Single(s) => Some(s.as_str()),
            Selector::Group(group) => group.first().map(String::as_str),
        }
    }

    /// Every selector string of this entry, in recorded order
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Selector::Single(s) => vec![s.as_str()],
            Selector::Group(group) => group.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Selector::Single(value.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for Selector {
    fn from(value: [&str; N]) -> Self {
        Selector::Group(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Post-condition recorded alongside a step
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssertedEvent {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

impl AssertedEvent {
    pub fn navigation(url: &str) -> Self {
        Self {
            kind: "navigation".to_string(),
            url: Some(url.to_string()),
            title: None,
        }
    }
}

/// Mouse button of a click step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Back,
    Forward,
}

/// Comparison operator of a waitForElement step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum CountOperator {
    #[serde(rename = "<=")]
    AtMost,
    #[default]
    #[serde(rename = "==")]
    Exactly,
    #[serde(rename = ">=")]
    AtLeast,
}

/// Parameters for navigate
#[derive(Debug, Clone, Deserialize)]
pub struct NavigateParams {
    pub url: String,
}

/// Parameters for setViewport
#[derive(Debug, Clone, Deserialize)]
pub struct ViewportParams {
    pub width: u32,
    pub height: u32,
}

/// Parameters for click
#[derive(Debug, Clone, Deserialize)]
pub struct ClickParams {
    pub selectors: Vec<Selector>,
    #[serde(default)]
    pub button: Option<MouseButton>,
}

/// Parameters for steps that only address an element (doubleClick, hover)
#[derive(Debug, Clone, Deserialize)]
pub struct ElementParams {
    pub selectors: Vec<Selector>,
}

/// Parameters for change
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeParams {
    pub selectors: Vec<Selector>,
    pub value: String,
}

/// Parameters for keyDown / keyUp
#[derive(Debug, Clone, Deserialize)]
pub struct KeyParams {
    pub key: String,
}

/// Parameters for scroll: either an element or the window position
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScrollParams {
    Element {
        selectors: Vec<Selector>,
    },
    Window {
        #[serde(default = "zero")]
        x: Number,
        #[serde(default = "zero")]
        y: Number,
    },
}

fn zero() -> Number {
    Number::from(0)
}

/// Parameters for emulateNetworkConditions
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConditionsParams {
    pub latency: Number,
    pub download: Number,
    pub upload: Number,
}

/// Parameters for waitForElement
#[derive(Debug, Clone, Deserialize)]
pub struct WaitForElementParams {
    pub selectors: Vec<Selector>,
    #[serde(default)]
    pub operator: CountOperator,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_count() -> u32 {
    1
}

/// Parameters for waitForExpression
#[derive(Debug, Clone, Deserialize)]
pub struct WaitForExpressionParams {
    pub expression: String,
}

/// Action of a recorded step, one variant per interaction kind
#[derive(Debug, Clone)]
pub enum StepAction {
    Navigate(NavigateParams),
    SetViewport(ViewportParams),
    Click(ClickParams),
    DoubleClick(ElementParams),
    Change(ChangeParams),
    KeyDown(KeyParams),
    KeyUp(KeyParams),
    Scroll(ScrollParams),
    Hover(ElementParams),
    EmulateNetworkConditions(NetworkConditionsParams),
    WaitForElement(WaitForElementParams),
    WaitForExpression(WaitForExpressionParams),
    /// Step type without a translation rule; holds the raw type name
    Other(String),
}

impl StepAction {
    /// Recorder name of this step type
    pub fn kind(&self) -> &str {
        match self {
            StepAction::Navigate(_) => "navigate",
            StepAction::SetViewport(_) => "setViewport",
            StepAction::Click(_) => "click",
            StepAction::DoubleClick(_) => "doubleClick",
            StepAction::Change(_) => "change",
            StepAction::KeyDown(_) => "keyDown",
            StepAction::KeyUp(_) => "keyUp",
            StepAction::Scroll(_) => "scroll",
            StepAction::Hover(_) => "hover",
            StepAction::EmulateNetworkConditions(_) => "emulateNetworkConditions",
            StepAction::WaitForElement(_) => "waitForElement",
            StepAction::WaitForExpression(_) => "waitForExpression",
            StepAction::Other(kind) => kind,
        }
    }
}

/// One recorded browser interaction
#[derive(Debug, Clone)]
pub struct RecordedStep {
    pub action: StepAction,

    /// Frame the action applies to; `None` means "keep the current frame"
    pub target: Option<String>,

    pub asserted_events: Vec<AssertedEvent>,
}

impl RecordedStep {
    pub fn new(action: StepAction) -> Self {
        Self {
            action,
            target: None,
            asserted_events: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn with_asserted_event(mut self, event: AssertedEvent) -> Self {
        self.asserted_events.push(event);
        self
    }
}

/// Fields shared by every step object
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StepHeader {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    asserted_events: Vec<AssertedEvent>,
}

impl RecordedStep {
    /// Build a step from one JSON step object, dispatching on its `type`
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let header: StepHeader = serde_json::from_value(value.clone())?;

        let action = match header.kind.as_str() {
            "navigate" => StepAction::Navigate(serde_json::from_value(value)?),
            "setViewport" => StepAction::SetViewport(serde_json::from_value(value)?),
            "click" => StepAction::Click(serde_json::from_value(value)?),
            "doubleClick" => StepAction::DoubleClick(serde_json::from_value(value)?),
            "change" => StepAction::Change(serde_json::from_value(value)?),
            "keyDown" => StepAction::KeyDown(serde_json::from_value(value)?),
            "keyUp" => StepAction::KeyUp(serde_json::from_value(value)?),
            "scroll" => StepAction::Scroll(serde_json::from_value(value)?),
            "hover" => StepAction::Hover(serde_json::from_value(value)?),
            "emulateNetworkConditions" => {
                StepAction::EmulateNetworkConditions(serde_json::from_value(value)?)
            }
            "waitForElement" => StepAction::WaitForElement(serde_json::from_value(value)?),
            "waitForExpression" => StepAction::WaitForExpression(serde_json::from_value(value)?),
            _ => StepAction::Other(header.kind.clone()),
        };

        Ok(Self {
            action,
            target: header.target,
            asserted_events: header.asserted_events,
        })
    }
}

impl<'de> Deserialize<'de> for RecordedStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RecordedStep::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_step_type_is_kept() {
        let step = RecordedStep::from_value(json!({ "type": "close", "target": "main" })).unwrap();
        assert!(matches!(step.action, StepAction::Other(ref kind) if kind == "close"));
        assert_eq!(step.target.as_deref(), Some("main"));
    }

    #[test]
    fn test_mixed_selector_forms() {
        let step = RecordedStep::from_value(json!({
            "type": "click",
            "selectors": [["aria/Search", "#search"], "#fallback"],
            "button": "secondary",
            "offsetX": 3,
        }))
        .unwrap();

        let StepAction::Click(params) = step.action else {
            panic!("expected click");
        };
        assert_eq!(params.button, Some(MouseButton::Secondary));
        assert_eq!(params.selectors[0], Selector::from(["aria/Search", "#search"]));
        assert_eq!(params.selectors[1], Selector::from("#fallback"));
        assert_eq!(params.selectors[0].entries(), vec!["aria/Search", "#search"]);
    }

    #[test]
    fn test_scroll_forms() {
        let window = RecordedStep::from_value(json!({ "type": "scroll", "x": 0, "y": 805 })).unwrap();
        assert!(matches!(
            window.action,
            StepAction::Scroll(ScrollParams::Window { ref y, .. }) if y.to_string() == "805"
        ));

        let element =
            RecordedStep::from_value(json!({ "type": "scroll", "selectors": [["#list"]] })).unwrap();
        assert!(matches!(
            element.action,
            StepAction::Scroll(ScrollParams::Element { .. })
        ));
    }

    #[test]
    fn test_known_step_missing_field_is_error() {
        assert!(RecordedStep::from_value(json!({ "type": "navigate" })).is_err());
    }

    #[test]
    fn test_wait_for_element_operator() {
        let step = RecordedStep::from_value(json!({
            "type": "waitForElement",
            "selectors": ["#test"],
            "operator": ">=",
            "count": 2,
            "timeout": 2000,
        }))
        .unwrap();

        let StepAction::WaitForElement(params) = step.action else {
            panic!("expected waitForElement");
        };
        assert_eq!(params.operator, CountOperator::AtLeast);
        assert_eq!(params.count, 2);
        assert_eq!(params.timeout, Some(2000));
    }
}
