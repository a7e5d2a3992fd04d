use super::*;

#[test]
fn error_state_adds_modifier_class() {
    assert_eq!(input_class(false), "form-input");
    assert_eq!(input_class(true), "form-input form-input--error");
    assert_eq!(check_class(true), "form-check form-check--error");
}

#[test]
fn focus_targets_first_invalid_field_in_form_order() {
    use crate::state::login::LoginDraft;
    use crate::state::persona::Persona;
    use crate::state::registration::RegistrationDraft;
    use time::macros::date;

    let errors = RegistrationDraft::empty(Persona::Rider).validate(date!(2026 - 10 - 17));
    assert_eq!(first_invalid_id(&errors), Some("name"));

    let login = LoginDraft { email: "rider@example.com".to_owned(), password: String::new() };
    assert_eq!(first_invalid_id(&login.validate()), Some("password"));

    assert_eq!(first_invalid_id(&FieldErrors::default()), None);
}
