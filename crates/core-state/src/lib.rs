//! Session state: the live password buffer.
//!
//! `PasswordBuffer` is the only place typed characters live. It supports the
//! two edits the input state machine needs (append at end, delete at end) and
//! hands out a borrowed `&str` view only for the duration of a closure, so the
//! plaintext never escapes into a longer-lived allocation.
//!
//! Memory hygiene:
//! * Storage sits in a `SecretBox`, zeroized on drop.
//! * Growth copies into a fresh allocation and zeroizes the old one, so no
//!   stale copy is left behind by `Vec` reallocation.
//! * `pop` zeroes the removed slot before shrinking the length.
//! * `Debug` is redacted; there is no `Display`, `Clone` or `Serialize`.

use secrecy::zeroize::Zeroize;
use secrecy::{ExposeSecret, ExposeSecretMut, SecretBox};
use std::fmt;

const INITIAL_CAPACITY: usize = 64;

pub struct PasswordBuffer {
    chars: SecretBox<Vec<char>>,
}

impl Default for PasswordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordBuffer {
    pub fn new() -> Self {
        Self {
            chars: SecretBox::new(Box::new(Vec::with_capacity(INITIAL_CAPACITY))),
        }
    }

    /// Number of characters held. The only property observable through the mask.
    pub fn len(&self) -> usize {
        self.chars.expose_secret().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append one character at the end.
    pub fn push(&mut self, c: char) {
        let chars = self.chars.expose_secret_mut();
        if chars.len() == chars.capacity() {
            let mut grown = Vec::with_capacity((chars.capacity() * 2).max(INITIAL_CAPACITY));
            grown.extend_from_slice(chars);
            chars.zeroize();
            *chars = grown;
        }
        chars.push(c);
    }

    /// Remove the last character. Returns `false` when the buffer was already empty.
    pub fn pop(&mut self) -> bool {
        let chars = self.chars.expose_secret_mut();
        match chars.last_mut() {
            Some(last) => {
                last.zeroize();
                chars.pop();
                true
            }
            None => false,
        }
    }

    /// Wipe every character.
    pub fn clear(&mut self) {
        self.chars.expose_secret_mut().zeroize();
    }

    /// Run `f` against a temporary UTF-8 view of the buffer. The temporary is
    /// zeroized before returning.
    pub fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let chars = self.chars.expose_secret();
        let mut plain = String::with_capacity(chars.iter().map(|c| c.len_utf8()).sum());
        plain.extend(chars.iter());
        let out = f(&plain);
        plain.zeroize();
        out
    }
}

impl fmt::Debug for PasswordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(s: &str) -> PasswordBuffer {
        let mut b = PasswordBuffer::new();
        s.chars().for_each(|c| b.push(c));
        b
    }

    #[test]
    fn push_and_pop_at_end() {
        let mut b = filled("abc");
        assert_eq!(b.len(), 3);
        assert!(b.pop());
        assert_eq!(b.with_str(str::to_owned), "ab");
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut b = PasswordBuffer::new();
        assert!(!b.pop());
        assert!(b.is_empty());
        assert_eq!(b.with_str(str::len), 0);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let b = filled("pässwörd🔒");
        assert_eq!(b.len(), 9);
        assert_eq!(b.with_str(|s| s.chars().count()), 9);
    }

    #[test]
    fn growth_preserves_content() {
        let long: String = std::iter::repeat_n('x', INITIAL_CAPACITY * 3 + 1).collect();
        let b = filled(&long);
        assert_eq!(b.len(), long.chars().count());
        assert!(b.with_str(|s| s == long));
    }

    #[test]
    fn clear_empties_buffer() {
        let mut b = filled("secret");
        b.clear();
        assert!(b.is_empty());
    }

    #[test]
    fn debug_is_redacted() {
        let b = filled("hunter2");
        let shown = format!("{b:?}");
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("len: 7"));
    }
}
