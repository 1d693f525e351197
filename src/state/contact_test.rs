use super::*;

fn filled() -> ContactDraft {
    let mut draft = ContactDraft::default();
    draft.set(ContactField::Name, "Ada".into());
    draft.set(ContactField::Email, "ada@example.com".into());
    draft.set(ContactField::Subject, "Hello".into());
    draft.set(ContactField::Message, "Let's build something.".into());
    draft
}

#[test]
fn set_and_get_address_each_field() {
    let draft = filled();
    assert_eq!(draft.get(ContactField::Name), "Ada");
    assert_eq!(draft.get(ContactField::Email), "ada@example.com");
    assert_eq!(draft.get(ContactField::Subject), "Hello");
    assert_eq!(draft.get(ContactField::Message), "Let's build something.");
}

#[test]
fn submit_clears_all_fields_and_acknowledges() {
    let mut draft = filled();
    assert!(!draft.is_blank());
    assert_eq!(draft.submit(), "Thank you! Your message has been sent.");
    assert!(draft.is_blank());
}

#[test]
fn submit_blank_or_odd_input_still_succeeds() {
    let mut blank = ContactDraft::default();
    assert_eq!(blank.submit(), CONTACT_ACKNOWLEDGEMENT);

    let mut odd = ContactDraft::default();
    odd.set(ContactField::Email, "not-an-email".into());
    odd.set(ContactField::Message, "ü\u{0}\n".repeat(500));
    odd.submit();
    assert!(odd.is_blank());
}
