use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Submit,
    Quit,
    NextField,
    PrevField,
    Blur,
    Edit(KeyEvent),
    None,
}

pub const HELP_TEXT: &str =
    "Tab/↓ next field • Shift+Tab/↑ previous • Esc leave field • Ctrl+S submit • Ctrl+Q quit";

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.kind == KeyEventKind::Release {
        return KeyCommand::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
        KeyCode::Esc => KeyCommand::Blur,
        _ => KeyCommand::Edit(*key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert_eq!(
            classify(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            KeyCommand::Submit
        );
        assert_eq!(
            classify(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            KeyCommand::Quit
        );
        assert_eq!(
            classify(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            KeyCommand::None
        );
    }

    #[test]
    fn navigation_keys_move_focus() {
        assert_eq!(
            classify(&key(KeyCode::Tab, KeyModifiers::NONE)),
            KeyCommand::NextField
        );
        assert_eq!(
            classify(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyCommand::PrevField
        );
        assert_eq!(
            classify(&key(KeyCode::Esc, KeyModifiers::NONE)),
            KeyCommand::Blur
        );
    }

    #[test]
    fn other_keys_are_edits() {
        let typed = key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(classify(&typed), KeyCommand::Edit(typed));
        let backspace = key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(classify(&backspace), KeyCommand::Edit(backspace));
    }
}
