// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Profile repository for database operations.
//!
//! Profiles are keyed by the identity provider's subject id. Creation is a
//! conditional insert: the primary-key constraint is the only existence check,
//! so concurrent provisioning attempts for the same subject race at the store
//! and exactly one wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use perfectit_server_auth::{ProfileRecord, SocialLinks, SubjectId};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;

#[async_trait]
pub trait ProfileStore: Send + Sync {
	async fn create_profile(&self, profile: &ProfileRecord) -> Result<(), DbError>;
	async fn get_profile_by_id(&self, id: &SubjectId) -> Result<Option<ProfileRecord>, DbError>;
}

/// Repository for profile database operations.
///
/// The backing table name is configuration, not a constant: deployments point
/// provisioning at their profile table via `USER_TABLE_NAME`.
#[derive(Clone)]
pub struct ProfileRepository {
	pool: SqlitePool,
	table: String,
}

impl ProfileRepository {
	/// Create a new repository with the given pool and table name.
	///
	/// # Arguments
	/// * `pool` - SQLite connection pool
	/// * `table` - name of the profiles table
	pub fn new(pool: SqlitePool, table: impl Into<String>) -> Self {
		Self {
			pool,
			table: table.into(),
		}
	}

	/// The configured table name.
	pub fn table(&self) -> &str {
		&self.table
	}

	/// Insert a profile if no profile exists for its subject id.
	///
	/// Issues exactly one write; existence is established solely by the
	/// primary-key constraint.
	///
	/// # Errors
	/// Returns `DbError::Conflict` if a profile with this id already exists,
	/// `DbError::Sqlx` for any other database failure.
	#[tracing::instrument(skip(self, profile), fields(profile_id = %profile.id))]
	pub async fn create_profile(&self, profile: &ProfileRecord) -> Result<(), DbError> {
		let expertise_tags = serde_json::to_string(&profile.expertise_tags)?;
		let social_links = profile
			.social_links
			.as_ref()
			.map(serde_json::to_string)
			.transpose()?;

		let query = format!(
			r#"
			INSERT INTO "{}" (id, username, email, avatar_url, bio, expertise_tags, reputation_score, is_verified, social_links, created_at, updated_at, owner)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
			self.table
		);

		sqlx::query(&query)
			.bind(profile.id.as_str())
			.bind(&profile.username)
			.bind(&profile.email)
			.bind(&profile.avatar_url)
			.bind(&profile.bio)
			.bind(expertise_tags)
			.bind(profile.reputation_score)
			.bind(profile.is_verified)
			.bind(social_links)
			.bind(profile.created_at.to_rfc3339())
			.bind(profile.updated_at.to_rfc3339())
			.bind(profile.owner.as_str())
			.execute(&self.pool)
			.await
			.map_err(|e| match e {
				sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
					DbError::Conflict(format!("Profile already exists: {}", profile.id))
				}
				_ => DbError::Sqlx(e),
			})?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(profile_id = %id))]
	pub async fn get_profile_by_id(&self, id: &SubjectId) -> Result<Option<ProfileRecord>, DbError> {
		let query = format!(
			r#"
			SELECT id, username, email, avatar_url, bio, expertise_tags, reputation_score, is_verified, social_links, created_at, updated_at, owner
			FROM "{}"
			WHERE id = ?
			"#,
			self.table
		);

		let row = sqlx::query(&query)
			.bind(id.as_str())
			.fetch_optional(&self.pool)
			.await?;

		row.map(|r| row_to_profile(&r)).transpose()
	}
}

#[async_trait]
impl ProfileStore for ProfileRepository {
	async fn create_profile(&self, profile: &ProfileRecord) -> Result<(), DbError> {
		self.create_profile(profile).await
	}

	async fn get_profile_by_id(&self, id: &SubjectId) -> Result<Option<ProfileRecord>, DbError> {
		self.get_profile_by_id(id).await
	}
}

fn row_to_profile(row: &sqlx::sqlite::SqliteRow) -> Result<ProfileRecord, DbError> {
	let id: String = row.get("id");
	let owner: String = row.get("owner");
	let expertise_tags_json: String = row.get("expertise_tags");
	let social_links_json: Option<String> = row.get("social_links");
	let is_verified: i64 = row.get("is_verified");
	let created_at: String = row.get("created_at");
	let updated_at: String = row.get("updated_at");

	let expertise_tags: Vec<String> = serde_json::from_str(&expertise_tags_json)?;
	let social_links: Option<SocialLinks> = social_links_json
		.map(|json| serde_json::from_str(&json))
		.transpose()?;

	Ok(ProfileRecord {
		id: SubjectId::new(id),
		username: row.get("username"),
		email: row.get("email"),
		avatar_url: row.get("avatar_url"),
		bio: row.get("bio"),
		expertise_tags,
		reputation_score: row.get("reputation_score"),
		is_verified: is_verified != 0,
		social_links,
		created_at: DateTime::parse_from_rfc3339(&created_at)
			.map_err(|e| DbError::Internal(format!("Invalid created_at: {e}")))?
			.with_timezone(&Utc),
		updated_at: DateTime::parse_from_rfc3339(&updated_at)
			.map_err(|e| DbError::Internal(format!("Invalid updated_at: {e}")))?
			.with_timezone(&Utc),
		owner: SubjectId::new(owner),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{create_profiles_table, create_test_pool, DEFAULT_PROFILE_TABLE};
	use perfectit_server_auth::testing::{make_new_profile, make_profile, sample_subject_id};

	async fn make_profile_repo() -> ProfileRepository {
		let pool = create_test_pool().await;
		create_profiles_table(&pool, DEFAULT_PROFILE_TABLE).await;
		ProfileRepository::new(pool, DEFAULT_PROFILE_TABLE)
	}

	#[tokio::test]
	async fn test_create_and_get_profile() {
		let repo = make_profile_repo().await;
		let id = sample_subject_id();
		let profile = make_new_profile(&id, "alice");

		repo.create_profile(&profile).await.unwrap();

		let fetched = repo.get_profile_by_id(&id).await.unwrap();
		assert!(fetched.is_some());
		let fetched = fetched.unwrap();
		assert_eq!(fetched.id, id);
		assert_eq!(fetched.username, "alice");
		assert_eq!(fetched.email, Some("alice@example.com".to_string()));
		assert_eq!(fetched.reputation_score, 0);
		assert!(!fetched.is_verified);
		assert!(fetched.expertise_tags.is_empty());
		assert!(fetched.social_links.is_none());
		assert_eq!(fetched.owner, id);
	}

	#[tokio::test]
	async fn test_get_profile_not_found() {
		let repo = make_profile_repo().await;

		let result = repo
			.get_profile_by_id(&sample_subject_id())
			.await
			.unwrap();
		assert!(result.is_none());
	}

	#[tokio::test]
	async fn test_create_profile_conflict_on_duplicate_id() {
		let repo = make_profile_repo().await;
		let id = sample_subject_id();
		let first = make_new_profile(&id, "alice");
		let second = make_new_profile(&id, "alice2");

		repo.create_profile(&first).await.unwrap();

		let err = repo.create_profile(&second).await.unwrap_err();
		assert!(matches!(err, DbError::Conflict(_)));

		// The losing write must not have clobbered the original.
		let fetched = repo.get_profile_by_id(&id).await.unwrap().unwrap();
		assert_eq!(fetched.username, "alice");
	}

	#[tokio::test]
	async fn test_populated_profile_round_trips() {
		let repo = make_profile_repo().await;
		let profile = make_profile("carol");

		repo.create_profile(&profile).await.unwrap();

		let fetched = repo.get_profile_by_id(&profile.id).await.unwrap().unwrap();
		assert_eq!(fetched.expertise_tags, profile.expertise_tags);
		assert_eq!(fetched.social_links, profile.social_links);
		assert_eq!(fetched.bio, profile.bio);
	}

	#[tokio::test]
	async fn test_repository_uses_configured_table() {
		let pool = create_test_pool().await;
		create_profiles_table(&pool, "CustomProfiles").await;
		let repo = ProfileRepository::new(pool, "CustomProfiles");
		assert_eq!(repo.table(), "CustomProfiles");

		let id = sample_subject_id();
		repo
			.create_profile(&make_new_profile(&id, "dave"))
			.await
			.unwrap();
		assert!(repo.get_profile_by_id(&id).await.unwrap().is_some());
	}
}
