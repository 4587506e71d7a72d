// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Post-confirmation trigger event types.
//!
//! The identity confirmation event source delivers one [`ConfirmationEvent`] per
//! confirmed sign-up (and per confirmed password reset, which shares the trigger).
//! The provisioning flow must acknowledge by returning the event it received, so
//! these types preserve fields they do not interpret: `caller_context` and
//! `response` pass through as raw JSON, and unmodeled user attributes are kept in
//! [`UserAttributes::extra`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::SubjectId;

/// An identity confirmation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationEvent {
	pub version: String,
	pub region: String,
	pub user_pool_id: String,
	pub user_name: String,
	#[serde(default)]
	pub caller_context: serde_json::Value,
	pub trigger_source: String,
	pub request: ConfirmationRequest,
	#[serde(default)]
	pub response: serde_json::Value,
}

/// The request portion of a confirmation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRequest {
	pub user_attributes: UserAttributes,
}

/// Identity attributes supplied with a confirmation event.
///
/// All attributes arrive as strings. Attribute keys this system does not model
/// (e.g. `email_verified` variants added by social providers) are retained in
/// `extra` so the event round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sub: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email_verified: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub preferred_username: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub picture: Option<String>,
	#[serde(flatten)]
	pub extra: BTreeMap<String, String>,
}

impl UserAttributes {
	/// The confirmed identity's subject id, if present and non-empty.
	pub fn subject_id(&self) -> Option<SubjectId> {
		non_empty(self.sub.as_deref()).map(SubjectId::from)
	}

	/// The email attribute, if present and non-empty.
	pub fn email(&self) -> Option<&str> {
		non_empty(self.email.as_deref())
	}

	/// The preferred username attribute, if present and non-empty.
	pub fn preferred_username(&self) -> Option<&str> {
		non_empty(self.preferred_username.as_deref())
	}

	/// The profile picture URL, if present and non-empty.
	pub fn picture(&self) -> Option<&str> {
		non_empty(self.picture.as_deref())
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}
