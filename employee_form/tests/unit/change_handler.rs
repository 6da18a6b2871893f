use employee_form::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn phone_keeps_digits_in_order(raw in "[0-9a-zA-Z]{0,30}") {
        let mut snapshot = FormSnapshot::new();
        let notice = handle_change(&mut snapshot, FieldChange::Phone(raw.clone()));

        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(PHONE_MAX_LENGTH).collect();
        prop_assert_eq!(&digits, &snapshot.phone);
        prop_assert!(snapshot.phone.chars().count() <= PHONE_MAX_LENGTH);

        let had_letters = raw.chars().any(|c| c.is_ascii_alphabetic());
        prop_assert_eq!(had_letters, notice.is_some());
    }

    #[test]
    fn phone_never_holds_letters(raw in "\\PC{0,40}") {
        let phone = normalize_phone(&raw);
        prop_assert!(!phone.value.chars().any(char::is_alphabetic));
        prop_assert!(phone.value.chars().count() <= PHONE_MAX_LENGTH);
    }

    #[test]
    fn other_text_fields_are_verbatim(raw in "\\PC{0,40}") {
        let mut snapshot = FormSnapshot::new();
        for field in Field::ALL.iter().filter(|f| f.is_text() && **f != Field::Phone) {
            let notice = handle_change(&mut snapshot, FieldChange::from_input(*field, raw.clone()).unwrap());
            prop_assert_eq!(None, notice);
            prop_assert_eq!(Some(raw.as_str()), snapshot.text(*field));
        }
    }
}

#[test]
fn letters_are_removed_before_truncating() {
    let mut snapshot = FormSnapshot::new();
    let notice = handle_change(&mut snapshot, FieldChange::Phone("12a3b45678901".to_string()));

    assert_eq!("12345678901", snapshot.phone);
    assert_eq!(Some(Notice::Warning(NUMBERS_ONLY_MESSAGE.to_string())), notice);
}

#[test]
fn change_leaves_other_fields_alone() {
    let mut snapshot = crate::support::valid_snapshot();
    handle_change(&mut snapshot, FieldChange::MiddleName("Augusta".to_string()));

    let mut expected = crate::support::valid_snapshot();
    expected.middle_name = "Augusta".to_string();
    assert_eq!(expected, snapshot);
}
