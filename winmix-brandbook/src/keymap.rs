//! Keybinding contexts and the commands they resolve to

use brandbook_core::{BindingContext, Keybindings};
use crossterm::event::KeyEvent;

use crate::state::BrandBookTab;

/// Where keyboard input is routed
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum KeyContext {
    /// Browsing the page
    Page,
    /// Typing into the color search box
    Search,
    /// The property inspector is open
    Inspector,
}

impl BindingContext for KeyContext {
    fn name(&self) -> &'static str {
        match self {
            KeyContext::Page => "page",
            KeyContext::Search => "search",
            KeyContext::Inspector => "inspector",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "page" => Some(KeyContext::Page),
            "search" => Some(KeyContext::Search),
            "inspector" => Some(KeyContext::Inspector),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[KeyContext::Page, KeyContext::Search, KeyContext::Inspector]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleHelp,
    TabNext,
    TabPrev,
    TabJump(BrandBookTab),
    FocusNext,
    FocusPrev,
    /// Run the focused item's default action
    Activate,
    /// Open the inspector on the focused item
    Inspect,
    /// Drop the focused item's custom styles
    ResetItem,
    SearchStart,
    SearchEnd,
    AnimationToggle,
    /// Open the inspector on the demo element, or close it
    InspectorToggle,
    InspectorClose,
    /// Reserved for undo
    Undo,
    ModeEdit,
    ModePrompt,
    ModeCode,
    ModeCycle,
    ControlNext,
    ControlPrev,
    /// Restore the classes buffer to the base classes
    ResetClasses,
    /// Apply the prompt or classes buffer
    Apply,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::ToggleHelp => "help",
            Command::TabNext => "tab.next",
            Command::TabPrev => "tab.prev",
            Command::TabJump(BrandBookTab::Overview) => "tab.overview",
            Command::TabJump(BrandBookTab::Colors) => "tab.colors",
            Command::TabJump(BrandBookTab::Typography) => "tab.typography",
            Command::TabJump(BrandBookTab::Components) => "tab.components",
            Command::TabJump(BrandBookTab::Patterns) => "tab.patterns",
            Command::FocusNext => "focus.next",
            Command::FocusPrev => "focus.prev",
            Command::Activate => "item.activate",
            Command::Inspect => "item.inspect",
            Command::ResetItem => "item.reset",
            Command::SearchStart => "search.start",
            Command::SearchEnd => "search.end",
            Command::AnimationToggle => "animation.toggle",
            Command::InspectorToggle => "inspector.toggle",
            Command::InspectorClose => "inspector.close",
            Command::Undo => "inspector.undo",
            Command::ModeEdit => "inspector.mode.edit",
            Command::ModePrompt => "inspector.mode.prompt",
            Command::ModeCode => "inspector.mode.code",
            Command::ModeCycle => "inspector.mode.cycle",
            Command::ControlNext => "inspector.next",
            Command::ControlPrev => "inspector.prev",
            Command::ResetClasses => "inspector.reset",
            Command::Apply => "inspector.apply",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    const ALL: [Command; 28] = [
        Command::Quit,
        Command::ToggleHelp,
        Command::TabNext,
        Command::TabPrev,
        Command::TabJump(BrandBookTab::Overview),
        Command::TabJump(BrandBookTab::Colors),
        Command::TabJump(BrandBookTab::Typography),
        Command::TabJump(BrandBookTab::Components),
        Command::TabJump(BrandBookTab::Patterns),
        Command::FocusNext,
        Command::FocusPrev,
        Command::Activate,
        Command::Inspect,
        Command::ResetItem,
        Command::SearchStart,
        Command::SearchEnd,
        Command::AnimationToggle,
        Command::InspectorToggle,
        Command::InspectorClose,
        Command::Undo,
        Command::ModeEdit,
        Command::ModePrompt,
        Command::ModeCode,
        Command::ModeCycle,
        Command::ControlNext,
        Command::ControlPrev,
        Command::ResetClasses,
        Command::Apply,
    ];
}

/// Resolve `key` in `context`, falling back to the global table
pub fn resolve(keybindings: &Keybindings<KeyContext>, key: KeyEvent, context: KeyContext) -> Option<Command> {
    keybindings
        .get_command(key, context)
        .and_then(|name| Command::from_name(&name))
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

pub fn default_keybindings() -> Keybindings<KeyContext> {
    let mut kb = Keybindings::new();

    kb.add_global(Command::Quit.name(), keys(&["ctrl+c", "ctrl+q"]));

    use KeyContext::*;
    let page: &[(Command, &[&str])] = &[
        (Command::Quit, &["q", "ctrl+c", "ctrl+q"]),
        (Command::ToggleHelp, &["?", "shift+?"]),
        (Command::TabNext, &["right", "l"]),
        (Command::TabPrev, &["left", "h"]),
        (Command::TabJump(BrandBookTab::Overview), &["1"]),
        (Command::TabJump(BrandBookTab::Colors), &["2"]),
        (Command::TabJump(BrandBookTab::Typography), &["3"]),
        (Command::TabJump(BrandBookTab::Components), &["4"]),
        (Command::TabJump(BrandBookTab::Patterns), &["5"]),
        (Command::FocusNext, &["down", "j", "tab"]),
        (Command::FocusPrev, &["up", "k", "shift+tab"]),
        (Command::Activate, &["enter", "c"]),
        (Command::Inspect, &["e", "shift+enter"]),
        (Command::ResetItem, &["r"]),
        (Command::SearchStart, &["/"]),
        (Command::AnimationToggle, &["space", "p"]),
        (Command::InspectorToggle, &["i"]),
    ];
    for (command, list) in page {
        kb.add(Page, command.name(), keys(list));
    }

    kb.add(Search, Command::SearchEnd.name(), keys(&["enter", "esc"]));

    let inspector: &[(Command, &[&str])] = &[
        (Command::InspectorClose, &["esc"]),
        (Command::Undo, &["ctrl+z", "cmd+z"]),
        (Command::ModeEdit, &["f1"]),
        (Command::ModePrompt, &["f2"]),
        (Command::ModeCode, &["f3"]),
        (Command::ModeCycle, &["ctrl+t"]),
        (Command::ControlNext, &["tab", "down"]),
        (Command::ControlPrev, &["shift+tab", "up"]),
        (Command::ResetClasses, &["ctrl+r"]),
        (Command::Apply, &["enter"]),
    ];
    for (command, list) in inspector {
        kb.add(Inspector, command.name(), keys(list));
    }

    kb
}
