use core_actions::{Outcome, handle_event};
use core_events::{InputEvent, KeyPress, NamedKey};
use core_state::PasswordBuffer;
use proptest::prelude::*;

fn ch(c: char) -> InputEvent {
    InputEvent::Key(KeyPress::char(c))
}

fn named(k: NamedKey) -> InputEvent {
    InputEvent::Key(KeyPress::named(k))
}

fn contents(b: &PasswordBuffer) -> String {
    b.with_str(str::to_owned)
}

#[test]
fn type_backspace_enter_scenario() {
    let mut buf = PasswordBuffer::new();
    let events = [
        ch('a'),
        ch('b'),
        ch('c'),
        named(NamedKey::Backspace),
        named(NamedKey::Enter),
    ];
    let mut mutations = 0;
    let mut last = Outcome::Continue;
    for ev in &events {
        let r = handle_event(ev, &mut buf);
        if r.mutated {
            mutations += 1;
        }
        last = r.outcome;
        if last != Outcome::Continue {
            break;
        }
    }
    assert_eq!(last, Outcome::Submit);
    assert_eq!(mutations, 4);
    assert_eq!(contents(&buf), "ab");
}

#[test]
fn interrupt_cancels_with_content() {
    let mut buf = PasswordBuffer::new();
    for c in "xyz".chars() {
        handle_event(&ch(c), &mut buf);
    }
    let r = handle_event(&InputEvent::Key(KeyPress::ctrl('c')), &mut buf);
    assert_eq!(r.outcome, Outcome::Cancel);
    let r = handle_event(&InputEvent::Interrupt, &mut buf);
    assert_eq!(r.outcome, Outcome::Cancel);
}

#[test]
fn escape_sequences_do_not_touch_buffer() {
    let mut buf = PasswordBuffer::new();
    handle_event(&ch('k'), &mut buf);
    for ev in [
        named(NamedKey::Left),
        named(NamedKey::Up),
        named(NamedKey::Esc),
        InputEvent::Unsupported,
        InputEvent::Resize(10, 10),
    ] {
        let r = handle_event(&ev, &mut buf);
        assert_eq!(r.outcome, Outcome::Continue);
        assert!(!r.mutated);
    }
    assert_eq!(contents(&buf), "k");
}

#[test]
fn paste_is_one_mutation() {
    let mut buf = PasswordBuffer::new();
    let r = handle_event(&InputEvent::Paste("correct horse".into()), &mut buf);
    assert!(r.mutated);
    assert_eq!(r.outcome, Outcome::Continue);
    assert_eq!(buf.len(), 13);
}

proptest! {
    #[test]
    fn appended_chars_are_never_dropped(s in "[a-zA-Z0-9 !@#$%^&*()_+=-]{0,64}") {
        let mut buf = PasswordBuffer::new();
        for c in s.chars() {
            let r = handle_event(&ch(c), &mut buf);
            prop_assert!(r.mutated);
        }
        prop_assert_eq!(buf.len(), s.chars().count());
        prop_assert_eq!(contents(&buf), s);
    }

    #[test]
    fn backspaces_never_underflow(n_chars in 0usize..16, n_backspaces in 0usize..32) {
        let mut buf = PasswordBuffer::new();
        for _ in 0..n_chars {
            handle_event(&ch('x'), &mut buf);
        }
        for _ in 0..n_backspaces {
            handle_event(&named(NamedKey::Backspace), &mut buf);
        }
        prop_assert_eq!(buf.len(), n_chars.saturating_sub(n_backspaces));
    }
}
