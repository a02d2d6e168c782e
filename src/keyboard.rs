#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub search_focused: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    FocusSearch,
    ClearSearch,
    SelectTab(usize),
}

impl KeyCommand {
    /// Whether the browser's own handling of the key must be suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyCommand::FocusSearch)
    }
}

/// Digits pick a zero-based tab index, but never while typing in the search box.
pub fn command_for_key(input: &KeyInput, tab_count: usize) -> Option<KeyCommand> {
    // Exact "f": Shift turns it into "F", which is left to the browser.
    if (input.ctrl || input.meta) && input.key == "f" {
        return Some(KeyCommand::FocusSearch);
    }
    if input.key == "Escape" {
        return input.search_focused.then_some(KeyCommand::ClearSearch);
    }
    if input.search_focused || input.ctrl || input.meta {
        return None;
    }

    let mut chars = input.key.chars();
    let digit = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() || digit == 0 || digit > tab_count.min(9) {
        return None;
    }
    Some(KeyCommand::SelectTab(digit - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused(key: &str) -> KeyInput {
        KeyInput {
            search_focused: true,
            ..KeyInput::new(key)
        }
    }

    #[test]
    fn ctrl_or_cmd_f_focuses_search() {
        let ctrl = KeyInput {
            ctrl: true,
            ..KeyInput::new("f")
        };
        let meta = KeyInput {
            meta: true,
            ..KeyInput::new("f")
        };
        assert_eq!(command_for_key(&ctrl, 4), Some(KeyCommand::FocusSearch));
        assert_eq!(command_for_key(&meta, 4), Some(KeyCommand::FocusSearch));
        assert!(KeyCommand::FocusSearch.prevents_default());
        assert_eq!(command_for_key(&KeyInput::new("f"), 4), None);
    }

    #[test]
    fn ctrl_shift_f_is_left_to_the_browser() {
        for (ctrl, meta) in [(true, false), (false, true)] {
            let shifted = KeyInput {
                ctrl,
                meta,
                ..KeyInput::new("F")
            };
            assert_eq!(command_for_key(&shifted, 4), None);
        }
    }

    #[test]
    fn escape_only_clears_a_focused_search() {
        assert_eq!(command_for_key(&focused("Escape"), 4), Some(KeyCommand::ClearSearch));
        assert_eq!(command_for_key(&KeyInput::new("Escape"), 4), None);
    }

    #[test]
    fn digits_select_existing_tabs() {
        assert_eq!(command_for_key(&KeyInput::new("1"), 4), Some(KeyCommand::SelectTab(0)));
        assert_eq!(command_for_key(&KeyInput::new("4"), 4), Some(KeyCommand::SelectTab(3)));
        assert_eq!(command_for_key(&KeyInput::new("5"), 4), None);
        assert_eq!(command_for_key(&KeyInput::new("0"), 4), None);
        assert_eq!(command_for_key(&KeyInput::new("12"), 12), None);
    }

    #[test]
    fn digits_are_text_while_searching() {
        assert_eq!(command_for_key(&focused("2"), 4), None);
    }
}
