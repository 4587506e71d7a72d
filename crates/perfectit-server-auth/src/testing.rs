// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Test factories for profile records.
//!
//! These helpers build realistic-looking profiles for unit tests without
//! reaching for a database.

use chrono::Utc;
use uuid::Uuid;

use crate::profile::{ProfileRecord, SocialLinks};
use crate::types::SubjectId;

const EXPERTISE_TAGS: &[&str] = &[
	"react",
	"typescript",
	"aws",
	"graphql",
	"nextjs",
	"testing",
	"design",
	"backend",
];

/// Generate a random subject id.
pub fn sample_subject_id() -> SubjectId {
	SubjectId::new(Uuid::new_v4().to_string())
}

/// A profile as it looks immediately after provisioning: creation defaults only.
pub fn make_new_profile(id: &SubjectId, username: &str) -> ProfileRecord {
	ProfileRecord::new(
		id.clone(),
		username.to_string(),
		Some(format!("{username}@example.com")),
		None,
		Utc::now(),
	)
}

/// A profile with populated, randomized fields, as the data layer would hold
/// after the user has been active for a while.
pub fn make_profile(username: &str) -> ProfileRecord {
	let mut profile = make_new_profile(&sample_subject_id(), username);

	let tag_count = 1 + fastrand::usize(..4);
	profile.expertise_tags = (0..tag_count)
		.map(|_| EXPERTISE_TAGS[fastrand::usize(..EXPERTISE_TAGS.len())].to_string())
		.collect();
	profile.bio = Some(format!("{username} making things perfect"));
	profile.reputation_score = fastrand::i64(0..=1000);
	profile.avatar_url = Some(format!("https://example.com/avatars/{username}.jpg"));
	profile.social_links = Some(SocialLinks {
		github: Some(format!("https://github.com/{username}")),
		..SocialLinks::default()
	});
	profile
}

/// A verified profile with an established reputation.
pub fn make_verified_profile(username: &str) -> ProfileRecord {
	let mut profile = make_profile(username);
	profile.is_verified = true;
	profile.reputation_score = fastrand::i64(500..=1000);
	profile
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_profile_factory_keeps_creation_defaults() {
		let id = sample_subject_id();
		let profile = make_new_profile(&id, "alice");
		assert_eq!(profile.id, id);
		assert_eq!(profile.reputation_score, 0);
		assert!(!profile.is_verified);
		assert!(profile.expertise_tags.is_empty());
	}

	#[test]
	fn test_verified_profile_factory() {
		let profile = make_verified_profile("bob");
		assert!(profile.is_verified);
		assert!(profile.reputation_score >= 500);
		assert!(!profile.expertise_tags.is_empty());
	}
}
