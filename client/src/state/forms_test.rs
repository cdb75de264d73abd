use super::*;

#[test]
fn login_form_requires_name_and_password() {
    let form = LoginForm { name: "ann".to_owned(), password: " ".to_owned() };
    assert_eq!(form.validate(), Err(MISSING_CREDENTIALS));
    let form = LoginForm { name: String::new(), password: "pw".to_owned() };
    assert_eq!(form.validate(), Err(MISSING_CREDENTIALS));
}

#[test]
fn login_form_passes_values_through_untrimmed() {
    let form = LoginForm { name: "ann".to_owned(), password: " pw ".to_owned() };
    assert_eq!(form.validate(), Ok(Credentials { name: "ann".to_owned(), password: " pw ".to_owned() }));
}

#[test]
fn signup_form_requires_role() {
    let mut form = SignupForm { name: "ann".to_owned(), password: "pw".to_owned(), role: None };
    assert_eq!(form.validate(), Err(MISSING_ROLE));
    form.role = Some(Role::Author);
    assert_eq!(
        form.validate(),
        Ok(RegisterRequest { name: "ann".to_owned(), password: "pw".to_owned(), role: Role::Author })
    );
}

#[test]
fn signup_form_checks_credentials_before_role() {
    let form = SignupForm::default();
    assert_eq!(form.validate(), Err(MISSING_CREDENTIALS));
}

#[test]
fn status_begin_clears_previous_feedback() {
    let mut status = FormStatus { message: Some("old".to_owned()), error: Some("bad".to_owned()), busy: false };
    status.begin();
    assert_eq!(status, FormStatus { message: None, error: None, busy: true });
}

#[test]
fn status_succeed_and_fail_are_exclusive() {
    let mut status = FormStatus::default();
    status.begin();
    status.fail("exists");
    assert_eq!(status.error.as_deref(), Some("exists"));
    assert!(status.message.is_none());
    assert!(!status.busy);

    status.begin();
    status.succeed("done");
    assert_eq!(status.message.as_deref(), Some("done"));
    assert!(status.error.is_none());
}
