use super::*;

#[test]
fn signup_form_defaults_to_empty_fields() {
    let form = SignupForm::default();
    assert!(form.email.is_empty());
    assert!(form.activity.is_empty());
}

#[test]
fn reset_clears_both_fields() {
    let mut form = SignupForm::new("a@x.com", "Chess Club");
    form.reset();
    assert_eq!(form, SignupForm::default());
}
