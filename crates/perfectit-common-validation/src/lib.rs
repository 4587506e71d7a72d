// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared validation utilities for user-facing forms.
//!
//! This crate provides the field-level checks used by registration and profile
//! forms: email, password, username, URL, and phone number formats, plus
//! first-error-wins composition over several checks.
//!
//! Validators return `Err(ValidationError)` with the user-facing message as the
//! error display text; predicates (`is_email`, `is_url`, `is_phone_number`)
//! answer the bare format question.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use url::Url;

static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").unwrap()
});

const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 20;
const PASSWORD_MIN_LEN: usize = 8;

/// A failed field validation, carrying the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("This field is required")]
	Required,
	#[error("Please enter a valid email address")]
	EmailInvalid,
	#[error("Password must be at least 8 characters")]
	PasswordTooShort,
	#[error("Password must contain at least one number")]
	PasswordNoNumber,
	#[error("Password must contain at least one special character")]
	PasswordNoSpecial,
	#[error("Username must be at least 3 characters")]
	UsernameTooShort,
	#[error("Username must be no more than 20 characters")]
	UsernameTooLong,
	#[error("Username can only contain letters, numbers, and underscores")]
	UsernameInvalid,
	#[error("Please enter a valid URL")]
	UrlInvalid,
	#[error("Please enter a valid phone number")]
	PhoneInvalid,
}

/// Outcome of a single field validation.
pub type ValidationResult = Result<(), ValidationError>;

fn is_blank(value: &str) -> bool {
	value.trim().is_empty()
}

/// Check whether a string looks like an email address.
pub fn is_email(email: &str) -> bool {
	EMAIL_REGEX.is_match(email)
}

/// Validate a required email field.
pub fn validate_email(email: &str) -> ValidationResult {
	if is_blank(email) {
		return Err(ValidationError::Required);
	}
	if !is_email(email) {
		return Err(ValidationError::EmailInvalid);
	}
	Ok(())
}

/// Validate a password against the sign-up policy: at least 8 characters,
/// one digit, and one special character.
pub fn validate_password(password: &str) -> ValidationResult {
	if is_blank(password) {
		return Err(ValidationError::Required);
	}
	if password.chars().count() < PASSWORD_MIN_LEN {
		return Err(ValidationError::PasswordTooShort);
	}
	if !password.chars().any(|c| c.is_ascii_digit()) {
		return Err(ValidationError::PasswordNoNumber);
	}
	if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
		return Err(ValidationError::PasswordNoSpecial);
	}
	Ok(())
}

/// Validate a username: 3-20 characters, letters, numbers, and underscores.
pub fn validate_username(username: &str) -> ValidationResult {
	if is_blank(username) {
		return Err(ValidationError::Required);
	}
	if username.chars().count() < USERNAME_MIN_LEN {
		return Err(ValidationError::UsernameTooShort);
	}
	if username.chars().count() > USERNAME_MAX_LEN {
		return Err(ValidationError::UsernameTooLong);
	}
	if !USERNAME_REGEX.is_match(username) {
		return Err(ValidationError::UsernameInvalid);
	}
	Ok(())
}

/// Check whether a string parses as an absolute URL.
pub fn is_url(url: &str) -> bool {
	Url::parse(url).is_ok()
}

/// Validate a URL field. Blank input is accepted unless `required`.
pub fn validate_url(url: &str, required: bool) -> ValidationResult {
	if is_blank(url) {
		return if required {
			Err(ValidationError::Required)
		} else {
			Ok(())
		};
	}
	if !is_url(url) {
		return Err(ValidationError::UrlInvalid);
	}
	Ok(())
}

/// Check whether a string looks like a phone number. Whitespace is ignored.
pub fn is_phone_number(phone: &str) -> bool {
	let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
	PHONE_REGEX.is_match(&compact)
}

/// Validate a phone number field. Blank input is accepted unless `required`.
pub fn validate_phone_number(phone: &str, required: bool) -> ValidationResult {
	if is_blank(phone) {
		return if required {
			Err(ValidationError::Required)
		} else {
			Ok(())
		};
	}
	if !is_phone_number(phone) {
		return Err(ValidationError::PhoneInvalid);
	}
	Ok(())
}

/// Validate that an optional text field is present and non-blank.
pub fn validate_required(value: Option<&str>) -> ValidationResult {
	match value {
		Some(v) if !is_blank(v) => Ok(()),
		_ => Err(ValidationError::Required),
	}
}

/// Validate that a list field has at least one entry.
pub fn validate_required_list<T>(values: &[T]) -> ValidationResult {
	if values.is_empty() {
		return Err(ValidationError::Required);
	}
	Ok(())
}

/// Run validators in order against one value, stopping at the first failure.
pub fn compose<T: ?Sized>(
	value: &T,
	validators: &[&dyn Fn(&T) -> ValidationResult],
) -> ValidationResult {
	for validator in validators {
		validator(value)?;
	}
	Ok(())
}

/// Validate a set of named fields, collecting the first error per field.
///
/// Each rule is a field name plus a closure capturing that field's value.
/// Fields that pass are absent from the returned map.
pub fn validate_form(
	rules: &[(&str, &dyn Fn() -> ValidationResult)],
) -> BTreeMap<String, ValidationError> {
	let mut errors = BTreeMap::new();
	for (field, validate) in rules {
		if let Err(error) = validate() {
			errors.insert((*field).to_string(), error);
		}
	}
	errors
}
