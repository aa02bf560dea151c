use form_rules::{rules, Field, FieldGroup, FileUpload, Form, FormItem, Payload, Rule, RuleChain};
use std::{cell::RefCell, rc::Rc};

fn password_chain() -> RuleChain<String, &'static str> {
    RuleChain::new()
        .terminal(rules::not_empty("The password cannot be empty"))
        .rule(rules::min_length(6, "The password must have at least 6 characters"))
        .rule(rules::min_lower_case(2, "The password must have at least 2 lowercase letters"))
        .rule(rules::min_digit(2, "The password must have at least 2 digits"))
}

#[test]
fn failing_terminal_rule_stops_the_chain() {
    let chain = password_chain();

    let violations = chain.evaluate(&"".to_string(), &"password").unwrap_err();

    // none of the later rules ran, only the terminal one reported
    assert_eq!(1, violations.len());
    assert_eq!("NOT_EMPTY", violations.violations[0].code);
}

#[test]
fn failing_non_terminal_rules_all_report_against_the_same_value() {
    let chain = password_chain();

    let violations = chain.evaluate(&"ab1".to_string(), &"password").unwrap_err();

    assert_eq!(
        vec![
            "The password must have at least 6 characters".to_string(),
            "The password must have at least 2 digits".to_string(),
        ],
        violations.messages()
    );
}

#[test]
fn chain_passes_a_conforming_value() {
    let chain = password_chain();
    assert!(chain.evaluate(&"abc123".to_string(), &"password").is_ok());
}

#[test]
fn not_empty_trims_before_checking() {
    let rule = rules::not_empty("required");
    assert!(rule.evaluate(&" ".to_string(), &"name").is_err());
    assert!(rule.evaluate(&"a".to_string(), &"name").is_ok());
}

#[test]
fn number_accepts_integers_and_the_zero_literal() {
    let rule = rules::number("not a number");
    assert!(rule.evaluate(&"0".to_string(), &"quantity").is_ok());
    assert!(rule.evaluate(&"12".to_string(), &"quantity").is_ok());
    assert!(rule.evaluate(&"-3".to_string(), &"quantity").is_ok());
    assert!(rule.evaluate(&"".to_string(), &"quantity").is_err());
    assert!(rule.evaluate(&"1.5".to_string(), &"quantity").is_err());
}

#[test]
fn password_match_follows_the_referenced_field() {
    let mut password: Field<String, &'static str> = Field::new("password");
    let mut repeat = Field::new("repeat_password").chain(RuleChain::new().terminal(
        rules::password_match(password.handle(), "The passwords do not match"),
    ));

    password.bind("secret1".to_string());
    repeat.bind("secret1".to_string());
    assert!(repeat.validate());

    password.bind("secret2".to_string());
    assert!(!repeat.validate());
    assert_eq!(
        vec!["The passwords do not match".to_string()],
        repeat.errors()
    );
}

#[test]
fn one_failing_field_fails_the_whole_form() {
    let first_name = Rc::new(RefCell::new(Field::new("firstName").chain(
        RuleChain::new().terminal(rules::not_empty("The first name cannot be empty")),
    )));
    let subject = Rc::new(RefCell::new(Field::new("subject").chain(
        RuleChain::new().terminal(rules::not_empty("The subject cannot be empty")),
    )));
    let email = Rc::new(RefCell::new(Field::new("email").chain(
        RuleChain::new().terminal(rules::email("Invalid email format")),
    )));

    let mut form = Form::new()
        .field(Rc::clone(&first_name))
        .field(Rc::clone(&subject))
        .field(Rc::clone(&email));

    let mut payload = Payload::new();
    payload.insert_text("firstName", "Ada");
    payload.insert_text("subject", "");
    payload.insert_text("email", "ada@example.com");

    form.bind(&payload);
    assert!(!form.validate());
    assert!(form.has_error());

    assert!(!first_name.borrow().has_error());
    assert!(subject.borrow().has_error());
    assert!(!email.borrow().has_error());
    assert_eq!(vec!["The subject cannot be empty".to_string()], form.errors());
}

#[test]
fn reset_returns_the_form_to_the_blank_failure_state() {
    let subject = Rc::new(RefCell::new(Field::new("subject").chain(
        RuleChain::new().terminal(rules::not_empty("The subject cannot be empty")),
    )));
    let mut form = Form::new().field(Rc::clone(&subject));

    let mut payload = Payload::new();
    payload.insert_text("subject", "Hello");

    form.bind(&payload);
    assert!(form.validate());

    form.reset();
    assert!(!form.has_error());
    assert_eq!(None, subject.borrow().value());

    // unbound required fields fail again, as on an empty submission
    assert!(!form.validate());
    assert!(form.has_error());
    assert_eq!(vec!["The subject cannot be empty".to_string()], form.errors());
}

#[test]
fn a_field_without_rules_is_always_valid() {
    let mut last_name: Field<String, &'static str> = Field::new("lastName");
    assert!(last_name.validate());

    last_name.bind("anything".to_string());
    assert!(last_name.validate());
    assert!(!last_name.has_error());
}

#[test]
fn missing_payload_entry_fails_a_required_field() {
    let subject = Rc::new(RefCell::new(Field::new("subject").chain(
        RuleChain::new().terminal(rules::not_empty("The subject cannot be empty")),
    )));
    let mut form = Form::new().field(Rc::clone(&subject));

    form.bind(&Payload::new());
    assert!(!form.validate());
    assert_eq!(None, subject.borrow().value());
}

#[test]
fn binding_from_the_payload_trims_and_escapes() {
    let mut comment: Field<String, &'static str> = Field::new("comment");

    let mut payload = Payload::new();
    payload.insert_text("comment", "  <b>hi</b>  ");

    comment.bind_from(&payload);
    assert_eq!(Some("&lt;b&gt;hi&lt;/b&gt;".to_string()), comment.value());
}

#[test]
fn display_value_falls_back_to_the_default() {
    let mut category: Field<String, &'static str> =
        Field::new("category").default_value("landscape".to_string());

    assert_eq!(Some("landscape".to_string()), category.display_value());
    assert_eq!(None, category.value());

    category.bind("portrait".to_string());
    assert_eq!(Some("portrait".to_string()), category.display_value());

    category.reset();
    assert_eq!(Some("landscape".to_string()), category.display_value());
}

#[test]
fn upload_rules_check_declared_type_then_size() {
    let chain: RuleChain<FileUpload, &'static str> = RuleChain::new()
        .terminal(rules::mimetype(
            ["image/jpeg", "image/jpg", "image/png"],
            "Unsupported file format",
        ))
        .terminal(rules::max_size(
            2 * 1024 * 1024,
            "The file must not exceed 2M",
        ));

    let small_png = FileUpload::new("photo.png", "image/png", 500_000, "/tmp/upload_0");
    assert!(chain.evaluate(&small_png, &"imagen").is_ok());

    let large_png = FileUpload::new("photo.png", "image/png", 3_000_000, "/tmp/upload_1");
    let violations = chain.evaluate(&large_png, &"imagen").unwrap_err();
    assert_eq!(vec!["The file must not exceed 2M".to_string()], violations.messages());

    // the terminal mimetype failure hides the size check entirely
    let large_gif = FileUpload::new("anim.gif", "image/gif", 3_000_000, "/tmp/upload_2");
    let violations = chain.evaluate(&large_gif, &"imagen").unwrap_err();
    assert_eq!(vec!["Unsupported file format".to_string()], violations.messages());
}

#[test]
fn file_fields_bind_from_the_file_payload() {
    let image = Rc::new(RefCell::new(
        Field::new("imagen").chain(RuleChain::new().terminal(rules::mimetype(
            ["image/png"],
            "Unsupported file format",
        ))),
    ));
    let mut form = Form::new().field(Rc::clone(&image));

    let mut payload = Payload::new();
    payload.insert_file(
        "imagen",
        FileUpload::new("photo.png", "image/png", 1_024, "/tmp/upload_0"),
    );

    form.bind(&payload);
    assert!(form.validate());
    assert_eq!(
        Some("photo.png".to_string()),
        image.borrow().value().map(|file| file.file_name)
    );

    // an absent upload is checked as an empty file and rejected
    form.bind(&Payload::new());
    assert!(!form.validate());
}

#[test]
fn groups_delegate_to_their_nested_fields() {
    let first_name = Rc::new(RefCell::new(Field::new("firstName").chain(
        RuleChain::new().terminal(rules::not_empty("The first name cannot be empty")),
    )));
    let last_name: Rc<RefCell<Field<String, &'static str>>> =
        Rc::new(RefCell::new(Field::new("lastName")));

    let name_group = Rc::new(RefCell::new(
        FieldGroup::new()
            .field(Rc::clone(&first_name))
            .field(Rc::clone(&last_name)),
    ));

    let mut form = Form::new().field(Rc::clone(&name_group));

    let mut payload = Payload::new();
    payload.insert_text("firstName", "");
    payload.insert_text("lastName", "Lovelace");

    form.bind(&payload);
    assert!(!form.validate());
    assert!(name_group.borrow().has_error());
    assert_eq!(
        vec!["The first name cannot be empty".to_string()],
        form.errors()
    );
    assert_eq!(Some("Lovelace".to_string()), last_name.borrow().value());
}

#[test]
fn form_level_errors_surface_after_a_clean_validation() {
    let username = Rc::new(RefCell::new(Field::new("username").chain(
        RuleChain::new().terminal(rules::not_empty("The username cannot be empty")),
    )));
    let mut form = Form::new().field(Rc::clone(&username));

    let mut payload = Payload::new();
    payload.insert_text("username", "ada");

    form.bind(&payload);
    assert!(form.validate());
    assert!(!form.has_error());

    form.add_error("A user with that name is already registered");
    assert!(form.has_error());
    assert_eq!(
        vec!["A user with that name is already registered".to_string()],
        form.errors()
    );

    form.reset();
    assert!(!form.has_error());
    assert!(form.errors().is_empty());
}

#[test]
fn email_in_domain_reports_the_most_basic_failure_first() {
    let chain = rules::email_in_domain(
        "example.com",
        "The email cannot be empty",
        "Invalid email format",
        "The email must belong to example.com",
    );

    let violations = chain.evaluate(&"".to_string(), &"email").unwrap_err();
    assert_eq!(vec!["The email cannot be empty".to_string()], violations.messages());

    let violations = chain
        .evaluate(&"not-an-address".to_string(), &"email")
        .unwrap_err();
    assert_eq!(vec!["Invalid email format".to_string()], violations.messages());

    let violations = chain
        .evaluate(&"ada@elsewhere.com".to_string(), &"email")
        .unwrap_err();
    assert_eq!(
        vec!["The email must belong to example.com".to_string()],
        violations.messages()
    );

    assert!(chain.evaluate(&"ada@example.com".to_string(), &"email").is_ok());
}

#[test]
fn violations_can_be_looked_up_by_field_key() {
    let mut password = Field::new("password").chain(password_chain());
    password.bind("ab1".to_string());
    assert!(!password.validate());

    let violations = password.violations();
    assert_eq!(2, violations.len());
    assert!(violations.get(&"password").is_some());
    assert!(violations.get(&"email").is_none());
}
