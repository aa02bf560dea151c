//! Ready-made rules for the common field checks.
//!
//! Every constructor takes the message to record on failure; the
//! library never invents message text of its own. The returned
//! [RuleFn](crate::RuleFn)s are linked into a
//! [RuleChain](crate::RuleChain) and attached to a
//! [Field](crate::Field).

use crate::{FieldHandle, FileUpload, RuleChain, RuleFn, RuleViolation};

/// The value must be non-empty after trimming.
///
/// ## Example
/// ```
/// use form_rules::{rules, Rule};
///
/// let rule = rules::not_empty("The name cannot be empty");
/// let key = "name".to_string();
/// assert!(rule.evaluate(&"a".to_string(), &key).is_ok());
/// assert!(rule.evaluate(&" ".to_string(), &key).is_err());
/// ```
pub fn not_empty<Key>(message: impl Into<String>) -> RuleFn<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let message = message.into();
    RuleFn::new(move |value: &String, key: &Key| {
        if value.trim().is_empty() {
            Err(RuleViolation::new(key.clone(), "NOT_EMPTY")
                .message(message.clone())
                .into())
        } else {
            Ok(())
        }
    })
}

/// The value must have standard email syntax. The empty value is
/// rejected; there is no address to check.
pub fn email<Key>(message: impl Into<String>) -> RuleFn<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let message = message.into();
    RuleFn::new(move |value: &String, key: &Key| {
        if email_address::EmailAddress::is_valid(value) {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "EMAIL")
                .message(message.clone())
                .into())
        }
    })
}

/// The value's domain part must be the configured domain, or a
/// subdomain of it. The comparison is case-insensitive; a value with
/// no `@` is rejected.
///
/// ## Example
/// ```
/// use form_rules::{rules, Rule};
///
/// let rule = rules::email_domain("example.com", "The email must belong to example.com");
/// let key = "email".to_string();
/// assert!(rule.evaluate(&"a@example.com".to_string(), &key).is_ok());
/// assert!(rule.evaluate(&"a@mail.example.com".to_string(), &key).is_ok());
/// assert!(rule.evaluate(&"a@elsewhere.com".to_string(), &key).is_err());
/// assert!(rule.evaluate(&"not-an-address".to_string(), &key).is_err());
/// ```
pub fn email_domain<Key>(
    domain: impl Into<String>,
    message: impl Into<String>,
) -> RuleFn<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let domain = domain.into().to_ascii_lowercase();
    let suffix = format!(".{}", domain);
    let message = message.into();
    RuleFn::new(move |value: &String, key: &Key| {
        let accepted = match value.rsplit_once('@') {
            Some((_, host)) => {
                let host = host.to_ascii_lowercase();
                host == domain || host.ends_with(&suffix)
            }
            None => false,
        };

        if accepted {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "EMAIL_DOMAIN")
                .message(message.clone())
                .into())
        }
    })
}

/// The value must have at least `minimum` characters.
pub fn min_length<Key>(minimum: usize, message: impl Into<String>) -> RuleFn<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let message = message.into();
    RuleFn::new(move |value: &String, key: &Key| {
        if value.chars().count() >= minimum {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "MIN_LENGTH")
                .message(message.clone())
                .into())
        }
    })
}

/// The value must contain at least `minimum` ASCII lowercase
/// letters.
pub fn min_lower_case<Key>(minimum: usize, message: impl Into<String>) -> RuleFn<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let message = message.into();
    RuleFn::new(move |value: &String, key: &Key| {
        let count = value
            .chars()
            .filter(|character| character.is_ascii_lowercase())
            .count();

        if count >= minimum {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "MIN_LOWER_CASE")
                .message(message.clone())
                .into())
        }
    })
}

/// The value must contain at least `minimum` ASCII digits.
pub fn min_digit<Key>(minimum: usize, message: impl Into<String>) -> RuleFn<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let message = message.into();
    RuleFn::new(move |value: &String, key: &Key| {
        let count = value
            .chars()
            .filter(|character| character.is_ascii_digit())
            .count();

        if count >= minimum {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "MIN_DIGIT")
                .message(message.clone())
                .into())
        }
    })
}

/// The value must equal the current value of another field, read
/// through its [handle](crate::Field::handle) at the moment this
/// rule runs. An unbound referenced field compares as empty.
///
/// ## Example
/// ```
/// use form_rules::{rules, Field, RuleChain};
///
/// let password: Field<String, String> = Field::new("password".to_string());
/// let mut repeat = Field::new("repeat_password".to_string()).chain(
///     RuleChain::new().terminal(rules::password_match(
///         password.handle(),
///         "The passwords do not match",
///     )),
/// );
///
/// let mut password = password;
/// password.bind("secret1".to_string());
/// repeat.bind("secret1".to_string());
/// assert!(repeat.validate());
///
/// // rebinding the referenced field is observed
/// password.bind("secret2".to_string());
/// assert!(!repeat.validate());
/// assert_eq!(
///     vec!["The passwords do not match".to_string()],
///     repeat.errors()
/// );
/// ```
pub fn password_match<Key>(
    other: FieldHandle<String>,
    message: impl Into<String>,
) -> RuleFn<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let message = message.into();
    RuleFn::new(move |value: &String, key: &Key| {
        let expected = other.current().unwrap_or_default();

        if *value == expected {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "PASSWORD_MATCH")
                .message(message.clone())
                .into())
        }
    })
}

/// The upload's declared content type must be one of the allowed
/// types.
pub fn mimetype<Key, S>(
    allowed: impl IntoIterator<Item = S>,
    message: impl Into<String>,
) -> RuleFn<FileUpload, Key>
where
    Key: Clone + PartialEq + 'static,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    let message = message.into();
    RuleFn::new(move |file: &FileUpload, key: &Key| {
        if allowed.iter().any(|mime| *mime == file.content_type) {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "MIMETYPE")
                .message(message.clone())
                .into())
        }
    })
}

/// The upload must be at most `limit` bytes.
pub fn max_size<Key>(limit: u64, message: impl Into<String>) -> RuleFn<FileUpload, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let message = message.into();
    RuleFn::new(move |file: &FileUpload, key: &Key| {
        if file.size <= limit {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "MAX_SIZE")
                .message(message.clone())
                .into())
        }
    })
}

/// The value must be an integer. The literal `"0"` is accepted
/// outright, ahead of the general parse; the asymmetry is deliberate
/// and callers can rely on `"0"` always passing.
///
/// ## Example
/// ```
/// use form_rules::{rules, Rule};
///
/// let rule = rules::number("The quantity must be a number");
/// let key = "quantity".to_string();
/// assert!(rule.evaluate(&"0".to_string(), &key).is_ok());
/// assert!(rule.evaluate(&"12".to_string(), &key).is_ok());
/// assert!(rule.evaluate(&"".to_string(), &key).is_err());
/// assert!(rule.evaluate(&"1.5".to_string(), &key).is_err());
/// ```
pub fn number<Key>(message: impl Into<String>) -> RuleFn<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    let message = message.into();
    RuleFn::new(move |value: &String, key: &Key| {
        let accepted = value.as_str() == "0" || value.parse::<i64>().is_ok();

        if accepted {
            Ok(())
        } else {
            Err(RuleViolation::new(key.clone(), "NUMBER")
                .message(message.clone())
                .into())
        }
    })
}

/// A ready-made chain requiring a non-empty, well-formed email
/// address belonging to the given domain. Every link is terminal, so
/// one message is recorded at a time, most basic check first.
///
/// ## Example
/// ```
/// use form_rules::{rules, Rule};
///
/// let chain = rules::email_in_domain(
///     "example.com",
///     "The email cannot be empty",
///     "Invalid email format",
///     "The email must belong to example.com",
/// );
///
/// let key = "email".to_string();
/// assert!(chain.evaluate(&"a@example.com".to_string(), &key).is_ok());
///
/// let violations = chain.evaluate(&"a@elsewhere.com".to_string(), &key).unwrap_err();
/// assert_eq!(
///     vec!["The email must belong to example.com".to_string()],
///     violations.messages()
/// );
/// ```
pub fn email_in_domain<Key>(
    domain: impl Into<String>,
    empty_message: impl Into<String>,
    format_message: impl Into<String>,
    domain_message: impl Into<String>,
) -> RuleChain<String, Key>
where
    Key: Clone + PartialEq + 'static,
{
    RuleChain::new()
        .terminal(not_empty(empty_message))
        .terminal(email(format_message))
        .terminal(email_domain(domain, domain_message))
}
