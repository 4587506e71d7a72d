// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the PerfectIt backend.
//!
//! This crate provides:
//! - Layered configuration from defaults and environment variables
//! - Type-safe sections with explicit merge precedence
//!
//! There is no configuration file: the deployable settings are the database
//! URL and the profile table name, both environment-provided.
//!
//! # Usage
//!
//! ```ignore
//! use perfectit_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("profiles stored in {}", config.provisioning.user_table_name);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::{
	DatabaseConfig, DatabaseConfigLayer, ProvisioningConfig, ProvisioningConfigLayer,
};
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence};

use tracing::debug;

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub database: DatabaseConfig,
	pub provisioning: ProvisioningConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables
/// 2. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource), Box::new(EnvSource)];

	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	Ok(finalize(merged))
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> ServerConfig {
	ServerConfig {
		database: layer.database.unwrap_or_default().finalize(),
		provisioning: layer.provisioning.unwrap_or_default().finalize(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_finalize_empty_layer_yields_defaults() {
		let config = finalize(ServerConfigLayer::default());
		assert_eq!(config.database.url, "sqlite:./perfectit.db");
		assert_eq!(config.provisioning.user_table_name, "User");
	}

	#[test]
	fn test_layer_merge_overrides_sections() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer {
			database: Some(DatabaseConfigLayer {
				url: Some("sqlite:/var/lib/perfectit/data.db".to_string()),
			}),
			provisioning: None,
		});

		let config = finalize(base);
		assert_eq!(config.database.url, "sqlite:/var/lib/perfectit/data.db");
		assert_eq!(config.provisioning.user_table_name, "User");
	}
}
