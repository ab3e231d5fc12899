//! Key-decoding table: `InputEvent` -> `Action`.
//!
//! | event                                      | action        |
//! |--------------------------------------------|---------------|
//! | printable `Char(c)` without Ctrl/Alt/Meta/Super | `Insert(c)` |
//! | printable non-ASCII-letter `Char(c)` with exactly Ctrl+Alt (AltGr) | `Insert(c)` |
//! | `Backspace`, `Delete`, `Ctrl+H`            | `DeleteLeft`  |
//! | `Enter`, `Ctrl+M`, `Ctrl+J`                | `Submit`      |
//! | `Ctrl+C`, out-of-band interrupt            | `Cancel`      |
//! | `Ctrl+D`                                   | `EndOfInput`  |
//! | bracketed paste                            | `InsertText`  |
//! | anything else                              | `Ignore`      |
//!
//! Terminals disagree on what Backspace sends (`0x7f` vs `0x08`); crossterm
//! folds both into `Backspace` on most platforms, and the explicit `Ctrl+H`
//! row covers the rest. Forward `Delete` also deletes left because there is
//! no cursor to delete under.
//!
//! Windows reports AltGr as Ctrl+Alt on the produced character, so `@`, `{`,
//! `\` and `€` arrive as Ctrl+Alt chords on many European layouts. An ASCII
//! letter under Ctrl+Alt is a real chord and stays ignored.
//!
//! Control characters inside a paste are dropped (including CR/LF), so pasted
//! text can never submit the prompt.

use crate::Action;
use core_events::{InputEvent, KeyPress, KeyToken, ModMask, NamedKey};

/// Modifiers that turn a character into a chord rather than text. Shift is
/// deliberately absent: it is already folded into the reported character.
const CHORD_MODS: ModMask = ModMask::CTRL
    .union(ModMask::ALT)
    .union(ModMask::META)
    .union(ModMask::SUPER);

pub fn translate(event: &InputEvent) -> Action {
    match event {
        InputEvent::Key(key) => translate_key(key),
        InputEvent::Paste(text) => {
            let printable: String = text.chars().filter(|c| is_printable(*c)).collect();
            if printable.is_empty() {
                Action::Ignore
            } else {
                Action::InsertText(printable)
            }
        }
        InputEvent::Interrupt => Action::Cancel,
        InputEvent::Resize(..) | InputEvent::Unsupported => Action::Ignore,
    }
}

fn translate_key(key: &KeyPress) -> Action {
    match key.token {
        KeyToken::Char(c) if is_alt_gr(key.mods) && !c.is_ascii_alphabetic() && is_printable(c) => {
            Action::Insert(c)
        }
        KeyToken::Char(c) if key.mods.contains(ModMask::CTRL) && !key.mods.contains(ModMask::ALT) => {
            match c.to_ascii_lowercase() {
                'c' => Action::Cancel,
                'd' => Action::EndOfInput,
                'h' => Action::DeleteLeft,
                'm' | 'j' => Action::Submit,
                _ => Action::Ignore,
            }
        }
        KeyToken::Char(c) => {
            if key.mods.intersects(CHORD_MODS) || !is_printable(c) {
                Action::Ignore
            } else {
                Action::Insert(c)
            }
        }
        KeyToken::Named(named) => {
            if key.mods.intersects(CHORD_MODS) {
                return Action::Ignore;
            }
            match named {
                NamedKey::Enter => Action::Submit,
                NamedKey::Backspace | NamedKey::Delete => Action::DeleteLeft,
                _ => Action::Ignore,
            }
        }
    }
}

fn is_alt_gr(mods: ModMask) -> bool {
    mods.contains(ModMask::CTRL | ModMask::ALT) && !mods.intersects(ModMask::META | ModMask::SUPER)
}

fn is_printable(c: char) -> bool {
    !c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: KeyPress) -> InputEvent {
        InputEvent::Key(k)
    }

    #[test]
    fn printable_chars_insert() {
        assert_eq!(translate(&key(KeyPress::char('a'))), Action::Insert('a'));
        assert_eq!(translate(&key(KeyPress::char(' '))), Action::Insert(' '));
        assert_eq!(translate(&key(KeyPress::char('ß'))), Action::Insert('ß'));
        let shifted = KeyPress::new(KeyToken::Char('Q'), ModMask::SHIFT);
        assert_eq!(translate(&key(shifted)), Action::Insert('Q'));
    }

    #[test]
    fn control_chars_never_insert() {
        assert_eq!(translate(&key(KeyPress::char('\u{1b}'))), Action::Ignore);
        assert_eq!(translate(&key(KeyPress::char('\u{7f}'))), Action::Ignore);
    }

    #[test]
    fn alt_chord_is_ignored() {
        let alt_x = KeyPress::new(KeyToken::Char('x'), ModMask::ALT);
        assert_eq!(translate(&key(alt_x)), Action::Ignore);
    }

    #[test]
    fn alt_gr_symbols_insert() {
        let alt_gr = ModMask::CTRL | ModMask::ALT;
        for c in ['@', '€', '{', '}', '\\', '[', '~', 'ł', 'ą'] {
            let k = KeyPress::new(KeyToken::Char(c), alt_gr);
            assert_eq!(translate(&key(k)), Action::Insert(c), "{c:?}");
        }
        let shifted = KeyPress::new(KeyToken::Char('|'), alt_gr | ModMask::SHIFT);
        assert_eq!(translate(&key(shifted)), Action::Insert('|'));
    }

    #[test]
    fn ctrl_alt_letters_stay_chords() {
        let alt_gr = ModMask::CTRL | ModMask::ALT;
        for c in ['x', 'c', 'D'] {
            let k = KeyPress::new(KeyToken::Char(c), alt_gr);
            assert_eq!(translate(&key(k)), Action::Ignore, "{c:?}");
        }
        let meta = KeyPress::new(KeyToken::Char('@'), alt_gr | ModMask::META);
        assert_eq!(translate(&key(meta)), Action::Ignore);
        let ctrl_only = KeyPress::new(KeyToken::Char('@'), ModMask::CTRL);
        assert_eq!(translate(&key(ctrl_only)), Action::Ignore);
    }

    #[test]
    fn ctrl_table() {
        assert_eq!(translate(&key(KeyPress::ctrl('c'))), Action::Cancel);
        assert_eq!(translate(&key(KeyPress::ctrl('C'))), Action::Cancel);
        assert_eq!(translate(&key(KeyPress::ctrl('d'))), Action::EndOfInput);
        assert_eq!(translate(&key(KeyPress::ctrl('h'))), Action::DeleteLeft);
        assert_eq!(translate(&key(KeyPress::ctrl('m'))), Action::Submit);
        assert_eq!(translate(&key(KeyPress::ctrl('j'))), Action::Submit);
        assert_eq!(translate(&key(KeyPress::ctrl('u'))), Action::Ignore);
    }

    #[test]
    fn named_keys() {
        assert_eq!(
            translate(&key(KeyPress::named(NamedKey::Enter))),
            Action::Submit
        );
        assert_eq!(
            translate(&key(KeyPress::named(NamedKey::Backspace))),
            Action::DeleteLeft
        );
        assert_eq!(
            translate(&key(KeyPress::named(NamedKey::Delete))),
            Action::DeleteLeft
        );
        for ignored in [
            NamedKey::Left,
            NamedKey::Home,
            NamedKey::Esc,
            NamedKey::Tab,
            NamedKey::F(1),
        ] {
            assert_eq!(translate(&key(KeyPress::named(ignored))), Action::Ignore);
        }
    }

    #[test]
    fn paste_drops_control_chars() {
        let ev = InputEvent::Paste("ab\r\ncd\t".into());
        assert_eq!(translate(&ev), Action::InsertText("abcd".into()));
        assert_eq!(
            translate(&InputEvent::Paste("\n".into())),
            Action::Ignore
        );
    }

    #[test]
    fn out_of_band_events() {
        assert_eq!(translate(&InputEvent::Interrupt), Action::Cancel);
        assert_eq!(translate(&InputEvent::Resize(80, 24)), Action::Ignore);
        assert_eq!(translate(&InputEvent::Unsupported), Action::Ignore);
    }
}
