// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions for identity handling.
//!
//! Unlike internally generated ids, a [`SubjectId`] wraps the opaque string the
//! identity provider assigns to a confirmed account. It is never parsed or
//! synthesized on this side of the boundary, only carried.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a confirmed identity, assigned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
	/// Create a subject id from the provider-supplied value.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Get the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consume the wrapper and return the inner string.
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl fmt::Display for SubjectId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for SubjectId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl From<&str> for SubjectId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

/// Access groups a user can belong to.
///
/// Lower precedence values take priority when a user belongs to several groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserGroup {
	/// Full moderation and administration access.
	Admin,
	/// Can moderate published content.
	Moderator,
	/// Default group for every confirmed account.
	StandardUser,
}

impl UserGroup {
	/// Numeric precedence of this group (lower wins).
	pub fn precedence(&self) -> u8 {
		match self {
			UserGroup::Admin => 1,
			UserGroup::Moderator => 2,
			UserGroup::StandardUser => 3,
		}
	}
}
