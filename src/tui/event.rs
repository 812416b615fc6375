use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Toggle,
    Quit,
    Ignore,
}

/// Maps a key event onto a recorder action.
///
/// Space toggles and Ctrl-D quits. Ctrl-C also quits: this binding is an
/// addition on top of the space/Ctrl-D pair, because raw mode delivers the
/// interrupt character as an ordinary key and would otherwise swallow it.
pub fn classify(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('d') | KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char(' ') if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            KeyAction::Toggle
        }
        _ => KeyAction::Ignore,
    }
}
