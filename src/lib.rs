//! This is a library for validating submitted HTML form data, one
//! request at a time.
//!
//! Each [Field](Field) wraps a named input: the value bound from the
//! request [Payload](Payload), an optional default for the first
//! render, and a [RuleChain](RuleChain) of checks. Rules in a chain
//! run in the order they were linked; a failing rule records a
//! [RuleViolation](RuleViolation) with its caller-configured
//! message, and a failing *terminal* rule stops the rest of the
//! chain. Fields and nested [FieldGroup](FieldGroup)s are gathered
//! into a [Form](Form), whose [validate()](Form::validate) runs
//! every field and reports the aggregate outcome, so the caller can
//! either re-render the form with the recorded messages or hand the
//! bound values to the persistence layer.
//!
//! The common checks live in the [rules](rules) module; anything
//! else can be expressed as a [RuleFn](RuleFn) closure.
//!
//! ```
//! use form_rules::{rules, Field, Form, Payload, RuleChain};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let username = Rc::new(RefCell::new(
//!     Field::new("username".to_string())
//!         .chain(RuleChain::new().terminal(rules::not_empty("The username cannot be empty"))),
//! ));
//!
//! let password = Rc::new(RefCell::new(
//!     Field::new("password".to_string()).chain(
//!         RuleChain::new()
//!             .terminal(rules::not_empty("The password cannot be empty"))
//!             .rule(rules::min_length(6, "The password must have at least 6 characters"))
//!             .rule(rules::min_lower_case(2, "The password must have at least 2 lowercase letters"))
//!             .rule(rules::min_digit(2, "The password must have at least 2 digits")),
//!     ),
//! ));
//!
//! let repeat = Rc::new(RefCell::new(
//!     Field::new("repeat_password".to_string()).chain(RuleChain::new().terminal(
//!         rules::password_match(password.borrow().handle(), "The passwords do not match"),
//!     )),
//! ));
//!
//! let mut form = Form::new()
//!     .field(Rc::clone(&username))
//!     .field(Rc::clone(&password))
//!     .field(Rc::clone(&repeat));
//!
//! let mut payload = Payload::new();
//! payload.insert_text("username".to_string(), "ada");
//! payload.insert_text("password".to_string(), "lovelace42");
//! payload.insert_text("repeat_password".to_string(), "lovelace42");
//!
//! form.bind(&payload);
//! assert!(form.validate());
//!
//! // a weak password collects every applicable message in one pass
//! payload.insert_text("password".to_string(), "abc");
//! payload.insert_text("repeat_password".to_string(), "abc");
//! form.bind(&payload);
//! assert!(!form.validate());
//! assert_eq!(
//!     vec![
//!         "The password must have at least 6 characters".to_string(),
//!         "The password must have at least 2 digits".to_string(),
//!     ],
//!     password.borrow().errors()
//! );
//! ```

mod chain;
mod error;
mod field;
mod form;
mod form_item;
mod group;
mod payload;
mod rule;
mod rule_fn;
pub mod rules;

pub use chain::*;
pub use error::*;
pub use field::*;
pub use form::*;
pub use form_item::*;
pub use group::*;
pub use payload::*;
pub use rule::*;
pub use rule_fn::*;
