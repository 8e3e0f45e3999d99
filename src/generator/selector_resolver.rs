//! Selector resolution
//!
//! The recorder stores several redundant selectors for the element a step
//! targets. This module picks one and turns it into a WebdriverIO locator.
//!
//! Rules are tried in order, the first match wins:
//! 1. aria name + CSS path ending in `> a`: link text (`=Guides`)
//! 2. aria name + CSS path: element with text (`h4=Flat White $18.00`)
//! 3. bare id selector (`#heading`)
//! 4. aria selector, passed through (`aria/Search`)
//! 5. xpath selector with its prefix stripped
//! 6. selector containing the flow's preferred attribute
//! 7. first non-aria selector

use crate::parser::types::Selector;
use crate::utils::format_as_js_literal;
use regex::Regex;
use std::sync::LazyLock;

pub const ARIA_PREFIX: &str = "aria/";
pub const XPATH_PREFIX: &str = "xpath/";

/// `#id` with no combinator, class, attribute or pseudo-class part
static BARE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[^\s.>\[~:]+$").unwrap());

/// Which rule produced a locator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorStrategy {
    LinkText,
    TagText,
    Id,
    Aria,
    XPath,
    PreferredAttribute,
    Fallback,
}

/// Selector chosen for a step, ready to be placed in `browser.$(...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocator {
    pub strategy: LocatorStrategy,
    /// Unquoted WebdriverIO selector
    pub selector: String,
}

impl ResolvedLocator {
    fn new(strategy: LocatorStrategy, selector: impl Into<String>) -> Self {
        Self {
            strategy,
            selector: selector.into(),
        }
    }

    /// Selector as a JavaScript string literal
    pub fn to_js(&self) -> String {
        format_as_js_literal(&self.selector)
    }
}

impl std::fmt::Display for ResolvedLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_js())
    }
}

/// Pick one locator out of the recorded selectors.
///
/// Returns `None` only when no selector string was recorded at all.
pub fn resolve(selectors: &[Selector], preferred_attribute: Option<&str>) -> Option<ResolvedLocator> {
    let resolved = resolve_inner(selectors, preferred_attribute);
    if let Some(ref locator) = resolved {
        log::debug!(
            "Resolved {:?} to {} ({:?})",
            selectors,
            locator.selector,
            locator.strategy
        );
    }
    resolved
}

fn resolve_inner(selectors: &[Selector], preferred_attribute: Option<&str>) -> Option<ResolvedLocator> {
    let first = selectors.first().and_then(Selector::first);
    let second = selectors.get(1).and_then(Selector::first);

    if let (Some(aria), Some(path)) = (first, second) {
        if let Some(name) = aria.strip_prefix(ARIA_PREFIX) {
            // 1. Link
            if path.trim_end().ends_with("> a") {
                return Some(ResolvedLocator::new(
                    LocatorStrategy::LinkText,
                    format!("={}", name),
                ));
            }

            // 2. Element with text
            if path.contains(" > ") {
                return Some(ResolvedLocator::new(
                    LocatorStrategy::TagText,
                    format!("{}={}", trailing_compound(path), name),
                ));
            }
        }
    }

    let heads: Vec<&str> = selectors.iter().filter_map(Selector::first).collect();

    // 3. Plain id
    if let Some(id) = heads.iter().find(|s| BARE_ID.is_match(s)) {
        return Some(ResolvedLocator::new(LocatorStrategy::Id, *id));
    }

    // 4. Accessibility name
    if let Some(aria) = find_entry(selectors, |s| s.starts_with(ARIA_PREFIX)) {
        return Some(ResolvedLocator::new(LocatorStrategy::Aria, aria));
    }

    // 5. XPath
    if let Some(xpath) = find_entry(selectors, |s| s.starts_with(XPATH_PREFIX)) {
        return Some(ResolvedLocator::new(
            LocatorStrategy::XPath,
            &xpath[XPATH_PREFIX.len()..],
        ));
    }

    let non_aria: Vec<&Selector> = selectors
        .iter()
        .filter(|s| s.first().is_some_and(|head| !head.contains(ARIA_PREFIX)))
        .collect();

    // 6. Preferred attribute
    if let Some(attribute) = preferred_attribute.filter(|a| !a.is_empty()) {
        let preferred = non_aria
            .iter()
            .find_map(|s| s.first().filter(|head| head.contains(attribute)));
        if let Some(selector) = preferred {
            return Some(ResolvedLocator::new(
                LocatorStrategy::PreferredAttribute,
                selector,
            ));
        }
    }

    // 7. Fallback
    non_aria
        .first()
        .and_then(|s| s.first())
        .map(|selector| ResolvedLocator::new(LocatorStrategy::Fallback, selector))
}

/// First entry matching `condition`, looking inside every group in order
fn find_entry<'s>(selectors: &'s [Selector], condition: impl Fn(&str) -> bool) -> Option<&'s str> {
    selectors
        .iter()
        .flat_map(Selector::entries)
        .find(|entry| condition(entry))
}

/// Last compound of a CSS path with its pseudo-class suffix cut off
/// (`li > span.price:hover` -> `span.price`)
fn trailing_compound(path: &str) -> &str {
    let last = path.rsplit('>').next().unwrap_or(path).trim();
    last.split(':').next().unwrap_or(last)
}
