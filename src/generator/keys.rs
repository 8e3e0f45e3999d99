//! WebDriver special keys.
//!
//! Recorded key names (`Enter`, `ArrowLeft`, `arrow_left`, ...) are normalised
//! and looked up in a closed table of WebDriver key constants. The value sent
//! through `performActions` is the key's WebDriver code point.

use std::collections::HashMap;
use std::sync::LazyLock;

/// One supported key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    /// Normalised human name (lower-case, no separators)
    pub name: &'static str,
    /// WebDriver constant name
    pub constant: &'static str,
    /// WebDriver code point
    pub code: char,
}

impl KeyEntry {
    /// Code point as a JavaScript `\uXXXX` escape
    pub fn js_value(&self) -> String {
        format!("\\u{:04X}", self.code as u32)
    }
}

const fn key(name: &'static str, constant: &'static str, code: char) -> KeyEntry {
    KeyEntry {
        name,
        constant,
        code,
    }
}

static KEYS: &[KeyEntry] = &[
    key("null", "NULL", '\u{E000}'),
    key("cancel", "CANCEL", '\u{E001}'),
    key("help", "HELP", '\u{E002}'),
    key("backspace", "BACKSPACE", '\u{E003}'),
    key("tab", "TAB", '\u{E004}'),
    key("clear", "CLEAR", '\u{E005}'),
    key("return", "RETURN", '\u{E006}'),
    key("enter", "ENTER", '\u{E007}'),
    key("shift", "SHIFT", '\u{E008}'),
    key("control", "CONTROL", '\u{E009}'),
    key("alt", "ALT", '\u{E00A}'),
    key("pause", "PAUSE", '\u{E00B}'),
    key("escape", "ESCAPE", '\u{E00C}'),
    key("space", "SPACE", '\u{E00D}'),
    key("pageup", "PAGE_UP", '\u{E00E}'),
    key("pagedown", "PAGE_DOWN", '\u{E00F}'),
    key("end", "END", '\u{E010}'),
    key("home", "HOME", '\u{E011}'),
    key("arrowleft", "ARROW_LEFT", '\u{E012}'),
    key("arrowup", "ARROW_UP", '\u{E013}'),
    key("arrowright", "ARROW_RIGHT", '\u{E014}'),
    key("arrowdown", "ARROW_DOWN", '\u{E015}'),
    key("insert", "INSERT", '\u{E016}'),
    key("delete", "DELETE", '\u{E017}'),
    key("semicolon", "SEMICOLON", '\u{E018}'),
    key("equals", "EQUALS", '\u{E019}'),
    key("numpad0", "NUMPAD0", '\u{E01A}'),
    key("numpad1", "NUMPAD1", '\u{E01B}'),
    key("numpad2", "NUMPAD2", '\u{E01C}'),
    key("numpad3", "NUMPAD3", '\u{E01D}'),
    key("numpad4", "NUMPAD4", '\u{E01E}'),
    key("numpad5", "NUMPAD5", '\u{E01F}'),
    key("numpad6", "NUMPAD6", '\u{E020}'),
    key("numpad7", "NUMPAD7", '\u{E021}'),
    key("numpad8", "NUMPAD8", '\u{E022}'),
    key("numpad9", "NUMPAD9", '\u{E023}'),
    key("multiply", "MULTIPLY", '\u{E024}'),
    key("add", "ADD", '\u{E025}'),
    key("separator", "SEPARATOR", '\u{E026}'),
    key("subtract", "SUBTRACT", '\u{E027}'),
    key("decimal", "DECIMAL", '\u{E028}'),
    key("divide", "DIVIDE", '\u{E029}'),
    key("f1", "F1", '\u{E031}'),
    key("f2", "F2", '\u{E032}'),
    key("f3", "F3", '\u{E033}'),
    key("f4", "F4", '\u{E034}'),
    key("f5", "F5", '\u{E035}'),
    key("f6", "F6", '\u{E036}'),
    key("f7", "F7", '\u{E037}'),
    key("f8", "F8", '\u{E038}'),
    key("f9", "F9", '\u{E039}'),
    key("f10", "F10", '\u{E03A}'),
    key("f11", "F11", '\u{E03B}'),
    key("f12", "F12", '\u{E03C}'),
    key("meta", "META", '\u{E03D}'),
    key("zenkakuhankaku", "ZENKAKU_HANKAKU", '\u{E040}'),
];

/// Alternative spellings found in recordings and hand-written flows
static ALIASES: &[(&str, &str)] = &[
    ("esc", "escape"),
    ("del", "delete"),
    ("ctrl", "control"),
    ("cmd", "meta"),
    ("command", "meta"),
    ("os", "meta"),
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static KeyEntry>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, &'static KeyEntry> =
        KEYS.iter().map(|entry| (entry.name, entry)).collect();
    for &(alias, name) in ALIASES {
        if let Some(entry) = map.get(name).copied() {
            map.insert(alias, entry);
        }
    }
    map
});

static BY_CONSTANT: LazyLock<HashMap<&'static str, &'static KeyEntry>> =
    LazyLock::new(|| KEYS.iter().map(|entry| (entry.constant, entry)).collect());

/// Lower-case a key name and drop `_`, `-` and whitespace.
pub fn normalize_key_name(key: &str) -> String {
    // The DOM reports the space bar as a literal " "
    if key == " " {
        return "space".to_string();
    }
    key.chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find the WebDriver key for a recorded key name
pub fn lookup(key: &str) -> Option<&'static KeyEntry> {
    BY_NAME.get(normalize_key_name(key).as_str()).copied()
}

/// Find a key by its WebDriver constant (e.g. `ENTER`)
pub fn lookup_constant(constant: &str) -> Option<&'static KeyEntry> {
    BY_CONSTANT.get(constant).copied()
}

/// All supported keys
pub fn supported_keys() -> &'static [KeyEntry] {
    KEYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_and_separator_insensitive() {
        let enter = lookup("Enter").unwrap();
        assert_eq!(enter.constant, "ENTER");
        assert_eq!(enter.js_value(), "\\uE007");

        assert_eq!(lookup("ArrowLeft"), lookup("arrow_left"));
        assert_eq!(lookup("ArrowLeft").unwrap().constant, "ARROW_LEFT");
        assert_eq!(lookup("F1").unwrap().js_value(), "\\uE031");
        assert_eq!(lookup(" ").unwrap().constant, "SPACE");
        assert_eq!(lookup("Esc").unwrap().constant, "ESCAPE");
    }

    #[test]
    fn test_unknown_key() {
        assert!(lookup("KEY_DOESNT_EXIST").is_none());
        assert!(lookup("a").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_constant_lookup_round_trips_names() {
        for entry in supported_keys() {
            assert_eq!(lookup_constant(entry.constant), Some(entry));
            assert_eq!(lookup(entry.name), Some(entry));
        }
    }
}
