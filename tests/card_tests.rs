// Host-side tests for card-face text formatting.

use card_core::*;

fn groups(a: &str, b: &str, c: &str, d: &str) -> [String; 4] {
    [a.into(), b.into(), c.into(), d.into()]
}

#[test]
fn spaced_number_keeps_its_groups() {
    assert_eq!(
        split_card_number("5248 1903 7741 0826"),
        groups("5248", "1903", "7741", "0826")
    );
}

#[test]
fn unbroken_run_is_chunked_by_four() {
    assert_eq!(
        split_card_number("5248190377410826"),
        groups("5248", "1903", "7741", "0826")
    );
    assert_eq!(split_card_number("1234567"), groups("1234", "567", "", ""));
}

#[test]
fn short_input_is_padded() {
    assert_eq!(split_card_number("52 48"), groups("52", "48", "", ""));
    assert_eq!(split_card_number("1234"), groups("1234", "", "", ""));
    assert_eq!(split_card_number(""), groups("", "", "", ""));
    assert_eq!(split_card_number("   "), groups("", "", "", ""));
}

#[test]
fn extra_whitespace_and_overflow() {
    assert_eq!(
        split_card_number("  4000\t0000  1111 2222 "),
        groups("4000", "0000", "1111", "2222")
    );
    assert_eq!(
        split_card_number("1 2 3 4 5 6"),
        groups("1", "2", "3", "4")
    );
    // Runs longer than 16 characters keep only the first four groups
    assert_eq!(
        split_card_number("11112222333344445555"),
        groups("1111", "2222", "3333", "4444")
    );
}

#[test]
fn chunking_counts_characters_not_bytes() {
    assert_eq!(split_card_number("ＡＢＣＤＥ"), groups("ＡＢＣＤ", "Ｅ", "", ""));
}

#[test]
fn slot_names_match_markup() {
    assert_eq!(TextSlot::NumberGroup(2).name(), "number-2");
    assert_eq!(TextSlot::Holder.name(), "holder");
    assert_eq!(TextSlot::Expiry.name(), "expiry");
}
