use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Applies a keystroke to `buffer`, returning the edited text when the key edits.
pub(crate) fn edit_text(buffer: &str, key: &KeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return None;
            }
            let mut next = String::with_capacity(buffer.len() + ch.len_utf8());
            next.push_str(buffer);
            next.push(ch);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = buffer.to_string();
            next.pop()?;
            Some(next)
        }
        KeyCode::Delete if !buffer.is_empty() => Some(String::new()),
        _ => None,
    }
}

/// Pasted text is single-line; line breaks are dropped.
pub(crate) fn paste_text(buffer: &str, pasted: &str) -> Option<String> {
    let cleaned: String = pasted.chars().filter(|ch| !ch.is_control()).collect();
    if cleaned.is_empty() {
        return None;
    }
    Some(format!("{buffer}{cleaned}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_characters_append() {
        let edited = edit_text("ab", &key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert_eq!(edited.as_deref(), Some("abc"));
        let shifted = edit_text("", &key(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(shifted.as_deref(), Some("A"));
    }

    #[test]
    fn control_chords_are_ignored() {
        assert!(edit_text("", &key(KeyCode::Char('a'), KeyModifiers::CONTROL)).is_none());
        assert!(edit_text("", &key(KeyCode::Char('a'), KeyModifiers::ALT)).is_none());
    }

    #[test]
    fn backspace_and_delete() {
        let backspace = key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(edit_text("ab", &backspace).as_deref(), Some("a"));
        assert!(edit_text("", &backspace).is_none());
        let delete = key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(edit_text("ab", &delete).as_deref(), Some(""));
        assert!(edit_text("", &delete).is_none());
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = key(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(edit_text("", &release).is_none());
    }

    #[test]
    fn paste_strips_line_breaks() {
        assert_eq!(paste_text("a", "b\nc\r").as_deref(), Some("abc"));
        assert!(paste_text("a", "\n").is_none());
    }
}
