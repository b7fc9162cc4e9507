//! Context-aware keybindings loaded from config
//!
//! Bindings map a command name to one or more key strings such as `"q"`,
//! `"ctrl+t"`, `"shift+tab"` or `"cmd+z"`. Lookups check the active context
//! first and fall back to the `global` table.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

type BindingTable = HashMap<String, Vec<String>>;

/// A named input context (page, search box, inspector panel...)
pub trait BindingContext: Clone + Copy + Eq + Hash {
    /// Context name as used in the config file
    fn name(&self) -> &'static str;

    /// Parse a context from its name
    fn from_name(name: &str) -> Option<Self>;

    /// Every context value
    fn all() -> &'static [Self];
}

/// Keybindings configuration with context support
#[derive(Debug, Clone)]
pub struct Keybindings<C: BindingContext> {
    /// Checked as fallback for all contexts
    global: BindingTable,
    contexts: HashMap<C, BindingTable>,
}

impl<C: BindingContext> Default for Keybindings<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BindingContext> Serialize for Keybindings<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1 + self.contexts.len()))?;
        map.serialize_entry("global", &self.global)?;
        for (context, bindings) in &self.contexts {
            map.serialize_entry(context.name(), bindings)?;
        }
        map.end()
    }
}

impl<'de, C: BindingContext> Deserialize<'de> for Keybindings<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, BindingTable> = HashMap::deserialize(deserializer)?;

        let mut keybindings = Keybindings::new();
        for (context_name, bindings) in raw {
            if context_name == "global" {
                keybindings.global = bindings;
            } else if let Some(context) = C::from_name(&context_name) {
                keybindings.contexts.insert(context, bindings);
            } else {
                tracing::warn!(context = %context_name, "Ignoring unknown keybinding context");
            }
        }

        Ok(keybindings)
    }
}

impl<C: BindingContext> Keybindings<C> {
    pub fn new() -> Self {
        Self {
            global: HashMap::new(),
            contexts: HashMap::new(),
        }
    }

    pub fn add_global(&mut self, command: impl Into<String>, keys: Vec<String>) {
        self.global.insert(command.into(), keys);
    }

    pub fn add(&mut self, context: C, command: impl Into<String>, keys: Vec<String>) {
        self.contexts
            .entry(context)
            .or_default()
            .insert(command.into(), keys);
    }

    pub fn get_context_bindings(&self, context: C) -> Option<&BindingTable> {
        self.contexts.get(&context)
    }

    pub fn global_bindings(&self) -> &BindingTable {
        &self.global
    }

    /// Get the command bound to `key` in `context`, falling back to global
    pub fn get_command(&self, key: KeyEvent, context: C) -> Option<String> {
        self.contexts
            .get(&context)
            .and_then(|bindings| match_key(key, bindings))
            .or_else(|| match_key(key, &self.global))
    }

    /// First key string bound to `command`, for help text
    pub fn get_first_keybinding(&self, command: &str, context: C) -> Option<String> {
        self.contexts
            .get(&context)
            .and_then(|bindings| bindings.get(command))
            .and_then(|keys| keys.first())
            .or_else(|| self.global.get(command).and_then(|keys| keys.first()))
            .cloned()
    }

    /// Merge user config onto defaults; user entries replace whole commands
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        defaults.global.extend(user.global);
        for (context, bindings) in user.contexts {
            defaults.contexts.entry(context).or_default().extend(bindings);
        }
        defaults
    }
}

fn match_key(key: KeyEvent, bindings: &BindingTable) -> Option<String> {
    bindings
        .iter()
        .find(|(_, keys)| {
            keys.iter()
                .filter_map(|s| parse_key_string(s))
                .any(|parsed| keys_match(&parsed, &key))
        })
        .map(|(command, _)| command.clone())
}

/// Code and modifiers must match; characters compare case-insensitively.
fn keys_match(parsed: &KeyEvent, key: &KeyEvent) -> bool {
    let codes_match = match (parsed.code, key.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
        (a, b) => a == b,
    };
    codes_match && parsed.modifiers == key.modifiers
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn function_key(name: &str) -> Option<u8> {
    let n: u8 = name.strip_prefix('f')?.parse().ok()?;
    (1..=12).contains(&n).then_some(n)
}

/// Parse a key string like "q", "esc", "ctrl+t", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();

    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // "+" on its own (or "ctrl++") is the plus key, not a separator
    let (prefix, key_part) = match key_str.strip_suffix("++") {
        Some(prefix) => (prefix, "+"),
        None if key_str == "+" => ("", "+"),
        None => match key_str.rsplit_once('+') {
            Some((prefix, key)) => (prefix, key),
            None => ("", key_str.as_str()),
        },
    };

    let mut modifiers = KeyModifiers::empty();
    for part in prefix.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "cmd" | "super" | "meta" => modifiers |= KeyModifiers::SUPER,
            _ => {}
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        other => {
            if let Some(n) = function_key(other) {
                KeyCode::F(n)
            } else {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyCode::Char(ch),
                    _ => return None,
                }
            }
        }
    };

    Some(press(code, modifiers))
}

/// Format a key string for display ("ctrl+t" -> "^T", "cmd+z" -> "Cmd+Z")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();

    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let (prefix, key_part) = match key_str.rsplit_once('+') {
        Some((prefix, "")) => (prefix.trim_end_matches('+'), "+"),
        Some((prefix, key)) => (prefix, key),
        None => ("", key_str.as_str()),
    };

    let mut out = String::new();
    for part in prefix.split('+').map(str::trim) {
        out.push_str(match part {
            "ctrl" | "control" => "^",
            "shift" => "Shift+",
            "alt" | "option" => "Alt+",
            "cmd" | "super" | "meta" => "Cmd+",
            _ => "",
        });
    }

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "tab" => "Tab".to_string(),
        "backspace" => "Backspace".to_string(),
        "up" => "↑".to_string(),
        "down" => "↓".to_string(),
        "left" => "←".to_string(),
        "right" => "→".to_string(),
        "home" => "Home".to_string(),
        "end" => "End".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        "delete" => "Del".to_string(),
        "insert" => "Ins".to_string(),
        "space" => "Space".to_string(),
        other => other.to_uppercase(),
    };

    out.push_str(&key_display);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestContext {
        Page,
        Inspector,
    }

    impl BindingContext for TestContext {
        fn name(&self) -> &'static str {
            match self {
                TestContext::Page => "page",
                TestContext::Inspector => "inspector",
            }
        }

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "page" => Some(TestContext::Page),
                "inspector" => Some(TestContext::Inspector),
                _ => None,
            }
        }

        fn all() -> &'static [Self] {
            &[TestContext::Page, TestContext::Inspector]
        }
    }

    #[test]
    fn test_parse_simple_key() {
        let result = parse_key_string("q").unwrap();
        assert_eq!(result.code, KeyCode::Char('q'));
        assert_eq!(result.modifiers, KeyModifiers::empty());

        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("nonsense").is_none());
    }

    #[test]
    fn test_parse_modifiers() {
        let result = parse_key_string("ctrl+t").unwrap();
        assert_eq!(result.code, KeyCode::Char('t'));
        assert_eq!(result.modifiers, KeyModifiers::CONTROL);

        let result = parse_key_string("cmd+z").unwrap();
        assert_eq!(result.code, KeyCode::Char('z'));
        assert_eq!(result.modifiers, KeyModifiers::SUPER);

        let result = parse_key_string("Ctrl+Shift+R").unwrap();
        assert_eq!(result.code, KeyCode::Char('r'));
        assert_eq!(result.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_shift_tab_and_backtab() {
        for s in ["shift+tab", "backtab"] {
            let result = parse_key_string(s).unwrap();
            assert_eq!(result.code, KeyCode::BackTab);
            assert!(result.modifiers.contains(KeyModifiers::SHIFT));
        }
    }

    #[test]
    fn test_parse_function_and_plus_keys() {
        assert_eq!(parse_key_string("f1").unwrap().code, KeyCode::F(1));
        assert_eq!(parse_key_string("f12").unwrap().code, KeyCode::F(12));
        assert!(parse_key_string("f13").is_none());

        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        let plus = parse_key_string("ctrl++").unwrap();
        assert_eq!(plus.code, KeyCode::Char('+'));
        assert_eq!(plus.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_get_command_context_then_global() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("quit", vec!["q".to_string()]);
        bindings.add(TestContext::Inspector, "close", vec!["esc".to_string()]);

        let key_q = press(KeyCode::Char('q'), KeyModifiers::empty());
        assert_eq!(
            bindings.get_command(key_q, TestContext::Page),
            Some("quit".to_string())
        );
        assert_eq!(
            bindings.get_command(key_q, TestContext::Inspector),
            Some("quit".to_string())
        );

        let key_esc = press(KeyCode::Esc, KeyModifiers::empty());
        assert_eq!(
            bindings.get_command(key_esc, TestContext::Inspector),
            Some("close".to_string())
        );
        assert_eq!(bindings.get_command(key_esc, TestContext::Page), None);
    }

    #[test]
    fn test_get_command_case_insensitive_but_modifier_exact() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("help", vec!["h".to_string()]);

        let upper = press(KeyCode::Char('H'), KeyModifiers::empty());
        assert_eq!(
            bindings.get_command(upper, TestContext::Page),
            Some("help".to_string())
        );

        let ctrl_h = press(KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert_eq!(bindings.get_command(ctrl_h, TestContext::Page), None);
    }

    #[test]
    fn test_get_first_keybinding() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("next_tab", vec!["tab".to_string(), "l".to_string()]);
        bindings.add(TestContext::Inspector, "next_tab", vec!["ctrl+t".to_string()]);

        assert_eq!(
            bindings.get_first_keybinding("next_tab", TestContext::Page),
            Some("tab".to_string())
        );
        assert_eq!(
            bindings.get_first_keybinding("next_tab", TestContext::Inspector),
            Some("ctrl+t".to_string())
        );
        assert_eq!(bindings.get_first_keybinding("missing", TestContext::Page), None);
    }

    #[test]
    fn test_merge() {
        let mut defaults: Keybindings<TestContext> = Keybindings::new();
        defaults.add_global("quit", vec!["q".to_string()]);
        defaults.add_global("help", vec!["?".to_string()]);
        defaults.add(TestContext::Inspector, "close", vec!["esc".to_string()]);

        let mut user: Keybindings<TestContext> = Keybindings::new();
        user.add_global("quit", vec!["x".to_string()]);
        user.add(TestContext::Inspector, "undo", vec!["ctrl+z".to_string()]);

        let merged = Keybindings::merge(defaults, user);

        assert_eq!(
            merged.global_bindings().get("quit"),
            Some(&vec!["x".to_string()])
        );
        assert_eq!(
            merged.global_bindings().get("help"),
            Some(&vec!["?".to_string()])
        );
        let inspector = merged.get_context_bindings(TestContext::Inspector).unwrap();
        assert!(inspector.contains_key("close"));
        assert!(inspector.contains_key("undo"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_contexts() {
        let json = r#"{
            "global": { "quit": ["q"] },
            "inspector": { "close": ["esc"] },
            "someday": { "fly": ["f"] }
        }"#;
        let bindings: Keybindings<TestContext> = serde_json::from_str(json).unwrap();

        assert_eq!(
            bindings.global_bindings().get("quit"),
            Some(&vec!["q".to_string()])
        );
        assert!(bindings.get_context_bindings(TestContext::Inspector).is_some());
        assert!(bindings.get_context_bindings(TestContext::Page).is_none());
    }

    #[test]
    fn test_format_key_for_display() {
        assert_eq!(format_key_for_display("q"), "Q");
        assert_eq!(format_key_for_display("ctrl+t"), "^T");
        assert_eq!(format_key_for_display("cmd+z"), "Cmd+Z");
        assert_eq!(format_key_for_display("esc"), "Esc");
        assert_eq!(format_key_for_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_for_display("f2"), "F2");
        assert_eq!(format_key_for_display("left"), "←");
    }
}
