// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults and environment variables.

use tracing::debug;

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{DatabaseConfigLayer, ProvisioningConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// Environment variable configuration source.
///
/// Reads `PERFECTIT_SERVER_DATABASE_URL` and `USER_TABLE_NAME` (the latter
/// keeps the name the deployment tooling already sets for the profiles table).
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			database: Some(DatabaseConfigLayer {
				url: env_var("PERFECTIT_SERVER_DATABASE_URL"),
			}),
			provisioning: Some(ProvisioningConfigLayer {
				user_table_name: env_var("USER_TABLE_NAME"),
			}),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Defaults < Precedence::Environment);
	}

	#[test]
	fn test_defaults_source_is_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.database.is_none());
		assert!(layer.provisioning.is_none());
	}

	#[test]
	fn test_env_source_reads_table_name() {
		std::env::set_var("USER_TABLE_NAME", "ConfiguredUserTable");
		let layer = EnvSource.load().unwrap();
		std::env::remove_var("USER_TABLE_NAME");

		assert_eq!(
			layer.provisioning.unwrap().user_table_name.as_deref(),
			Some("ConfiguredUserTable")
		);
	}

	#[test]
	fn test_env_var_ignores_empty_values() {
		std::env::set_var("PERFECTIT_TEST_EMPTY", "");
		assert_eq!(env_var("PERFECTIT_TEST_EMPTY"), None);
		std::env::remove_var("PERFECTIT_TEST_EMPTY");
	}
}
