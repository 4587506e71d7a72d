// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Table name used by tests unless they exercise table configuration.
pub const DEFAULT_PROFILE_TABLE: &str = "User";

/// Create an in-memory pool for tests.
///
/// Capped at one connection: each SQLite `:memory:` connection is its own
/// database, so a larger pool would hand tests empty databases.
pub async fn create_test_pool() -> SqlitePool {
	let options = SqliteConnectOptions::from_str(":memory:")
		.unwrap()
		.create_if_missing(true);

	SqlitePoolOptions::new()
		.max_connections(1)
		.connect_with(options)
		.await
		.expect("Failed to create test pool")
}

pub async fn create_profiles_table(pool: &SqlitePool, table: &str) {
	let ddl = format!(
		r#"
		CREATE TABLE IF NOT EXISTS "{table}" (
			id TEXT PRIMARY KEY,
			username TEXT NOT NULL,
			email TEXT,
			avatar_url TEXT,
			bio TEXT,
			expertise_tags TEXT NOT NULL,
			reputation_score INTEGER NOT NULL DEFAULT 0,
			is_verified INTEGER NOT NULL DEFAULT 0,
			social_links TEXT,
			created_at TEXT NOT NULL,
			updated_at TEXT NOT NULL,
			owner TEXT NOT NULL
		)
		"#
	);

	sqlx::query(&ddl).execute(pool).await.unwrap();
}
