use super::*;

// --- Auto-correct on space, and the one-shot undo window ---

#[test]
fn test_space_applies_closest_correction() {
    let mut h = harness_with_words(&["hello", "help"]);
    // "hep" is distance 1 from "help" and distance 3 from "hello".
    h.type_str("hep ");
    assert_eq!(h.field_text(), "help ");
}

#[test]
fn test_known_word_is_not_corrected() {
    let mut h = harness_with_words(&["hello", "help"]);
    h.type_str("help ");
    assert_eq!(h.field_text(), "help ");
}

#[test]
fn test_single_char_word_is_not_corrected() {
    let mut h = harness_with_words(&["an"]);
    h.type_str("a ");
    assert_eq!(h.field_text(), "a ");
}

#[test]
fn test_delete_undoes_correction() {
    let mut h = harness_with_words(&["hello"]);
    h.type_str("helo ");
    assert_eq!(h.field_text(), "hello ");

    // One backspace reverts the whole correction, space included.
    h.session.on_delete();
    assert_eq!(h.field_text(), "helo");
}

#[test]
fn test_undo_suppresses_next_correction_once() {
    let mut h = harness_with_words(&["hello"]);
    h.type_str("helo ");
    h.session.on_delete();
    assert_eq!(h.field_text(), "helo");

    // The next space keeps the word exactly as typed.
    h.session.on_space();
    assert_eq!(h.field_text(), "helo ");
}

#[test]
fn test_undo_window_is_single_use() {
    let mut h = harness_with_words(&["hello"]);
    h.type_str("helo ");
    h.session.on_delete();
    assert_eq!(h.field_text(), "helo");

    // A second backspace is an ordinary delete, not another undo.
    h.session.on_delete();
    assert_eq!(h.field_text(), "hel");
}

#[test]
fn test_typing_invalidates_undo_window() {
    let mut h = harness_with_words(&["hello"]);
    h.type_str("helo ");
    assert_eq!(h.field_text(), "hello ");

    // Continuing to type closes the window; backspace deletes one char.
    h.type_str("x");
    h.session.on_delete();
    assert_eq!(h.field_text(), "hello ");
}

#[test]
fn test_paste_closes_undo_window() {
    let mut h = harness_with_words(&["hello"]);
    h.type_str("helo ");
    assert_eq!(h.field_text(), "hello ");

    h.session.paste_text("x");
    h.session.on_delete();
    assert_eq!(h.field_text(), "hello ");
}

#[test]
fn test_corrected_word_becomes_bigram_context() {
    let mut h = harness_with_words(&["hello", "help"]);
    h.type_str("hep there ");

    h.type_str("help ");
    assert_eq!(h.suggestions(), vec!["there"]);
}
