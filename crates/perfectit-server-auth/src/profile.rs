// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User profile record types.
//!
//! A [`ProfileRecord`] is created exactly once per confirmed identity and is
//! owned by the application's data layer thereafter; provisioning never updates
//! or deletes it.
//!
//! # PII Handling
//!
//! This struct contains personally identifiable information (PII):
//! - `email` and `username` are user-provided PII
//! - These fields should be redacted in logs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::SubjectId;

/// A durable user profile, keyed by the identity provider's subject id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
	/// The confirmed identity's subject identifier. Unique key.
	pub id: SubjectId,

	/// Display handle, derived at provisioning time.
	pub username: String,

	/// Email address from the identity attributes, if any.
	pub email: Option<String>,

	/// Avatar image URL (e.g. a social provider's profile picture).
	pub avatar_url: Option<String>,

	/// Free-form biography. Always absent at creation.
	pub bio: Option<String>,

	/// Ordered expertise tags. Always empty at creation.
	pub expertise_tags: Vec<String>,

	/// Reputation score. Starts at zero.
	pub reputation_score: i64,

	/// Whether the profile has been verified. Starts false.
	pub is_verified: bool,

	/// Links to external profiles. Always absent at creation.
	pub social_links: Option<SocialLinks>,

	/// When the profile was created.
	pub created_at: DateTime<Utc>,

	/// When the profile was last updated. Equals `created_at` at creation.
	pub updated_at: DateTime<Utc>,

	/// Access-control tag, equal to `id`.
	pub owner: SubjectId,
}

impl ProfileRecord {
	/// Build a freshly provisioned profile with creation defaults.
	///
	/// `now` is captured once by the caller so `created_at` and `updated_at`
	/// are identical.
	pub fn new(
		id: SubjectId,
		username: String,
		email: Option<String>,
		avatar_url: Option<String>,
		now: DateTime<Utc>,
	) -> Self {
		let owner = id.clone();
		Self {
			id,
			username,
			email,
			avatar_url,
			bio: None,
			expertise_tags: Vec::new(),
			reputation_score: 0,
			is_verified: false,
			social_links: None,
			created_at: now,
			updated_at: now,
			owner,
		}
	}
}

/// Links from a profile to external accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub twitter: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub linkedin: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub github: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub website: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_profile_has_creation_defaults() {
		let now = Utc::now();
		let profile = ProfileRecord::new(
			SubjectId::new("u1"),
			"alice".to_string(),
			Some("alice@x.com".to_string()),
			None,
			now,
		);

		assert!(profile.bio.is_none());
		assert!(profile.expertise_tags.is_empty());
		assert_eq!(profile.reputation_score, 0);
		assert!(!profile.is_verified);
		assert!(profile.social_links.is_none());
		assert_eq!(profile.created_at, profile.updated_at);
		assert_eq!(profile.owner, profile.id);
	}

	#[test]
	fn test_social_links_omits_absent_fields() {
		let links = SocialLinks {
			github: Some("https://github.com/alice".to_string()),
			..SocialLinks::default()
		};
		let json = serde_json::to_value(&links).unwrap();
		assert_eq!(
			json,
			serde_json::json!({ "github": "https://github.com/alice" })
		);
	}
}
