use core_events::{InputEvent, KeyPress, KeyToken, ModMask, NamedKey};
use crossterm::event::{
    Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CKeyModifiers,
};

/// Translate one crossterm event into the normalized model.
///
/// Returns `None` for events that should be dropped without a trace (key
/// releases reported by terminals with the enhanced keyboard protocol, and
/// Windows' press/release pairs). Everything else maps to some `InputEvent`;
/// unknown material becomes `InputEvent::Unsupported`.
pub fn translate_event(event: CEvent) -> Option<InputEvent> {
    let mapped = match event {
        CEvent::Key(key) => {
            if matches!(key.kind, CKeyEventKind::Release) {
                return None;
            }
            match map_key_event(&key) {
                Some(press) => InputEvent::Key(press),
                None => InputEvent::Unsupported,
            }
        }
        CEvent::Paste(text) => InputEvent::Paste(text),
        CEvent::Resize(w, h) => InputEvent::Resize(w, h),
        CEvent::FocusGained | CEvent::FocusLost | CEvent::Mouse(_) => InputEvent::Unsupported,
    };
    Some(mapped)
}

/// Map a crossterm key event into a token + modifiers.
///
/// Returns `None` for key codes we do not support (e.g. media keys).
pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<KeyPress> {
    let token = map_key_token(&event.code)?;
    let mods = map_mod_mask(event.modifiers);
    Some(KeyPress::new(token, mods))
}

/// Convert a crossterm key code into a key token.
pub(crate) fn map_key_token(code: &CKeyCode) -> Option<KeyToken> {
    let token = match code {
        CKeyCode::Char(c) => KeyToken::Char(*c),
        CKeyCode::Enter => KeyToken::Named(NamedKey::Enter),
        CKeyCode::Esc => KeyToken::Named(NamedKey::Esc),
        CKeyCode::Backspace => KeyToken::Named(NamedKey::Backspace),
        CKeyCode::Delete => KeyToken::Named(NamedKey::Delete),
        CKeyCode::Tab | CKeyCode::BackTab => KeyToken::Named(NamedKey::Tab),
        CKeyCode::Up => KeyToken::Named(NamedKey::Up),
        CKeyCode::Down => KeyToken::Named(NamedKey::Down),
        CKeyCode::Left => KeyToken::Named(NamedKey::Left),
        CKeyCode::Right => KeyToken::Named(NamedKey::Right),
        CKeyCode::Home => KeyToken::Named(NamedKey::Home),
        CKeyCode::End => KeyToken::Named(NamedKey::End),
        CKeyCode::PageUp => KeyToken::Named(NamedKey::PageUp),
        CKeyCode::PageDown => KeyToken::Named(NamedKey::PageDown),
        CKeyCode::Insert => KeyToken::Named(NamedKey::Insert),
        CKeyCode::F(n) => KeyToken::Named(NamedKey::F(*n)),
        CKeyCode::Null
        | CKeyCode::CapsLock
        | CKeyCode::ScrollLock
        | CKeyCode::NumLock
        | CKeyCode::PrintScreen
        | CKeyCode::Pause
        | CKeyCode::Menu
        | CKeyCode::KeypadBegin
        | CKeyCode::Media(_)
        | CKeyCode::Modifier(_) => return None,
    };
    Some(token)
}

/// Convert crossterm modifier flags into `ModMask` bits.
pub(crate) fn map_mod_mask(mods: CKeyModifiers) -> ModMask {
    let mut out = ModMask::empty();
    if mods.contains(CKeyModifiers::CONTROL) {
        out |= ModMask::CTRL;
    }
    if mods.contains(CKeyModifiers::ALT) {
        out |= ModMask::ALT;
    }
    if mods.contains(CKeyModifiers::SHIFT) {
        out |= ModMask::SHIFT;
    }
    if mods.contains(CKeyModifiers::SUPER) {
        out |= ModMask::SUPER;
    }
    if mods.contains(CKeyModifiers::META) {
        out |= ModMask::META;
    }
    out
}
