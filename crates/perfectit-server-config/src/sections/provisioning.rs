// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User provisioning configuration.

use serde::Deserialize;

/// Provisioning configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct ProvisioningConfig {
	/// Name of the table holding user profile records.
	pub user_table_name: String,
}

impl Default for ProvisioningConfig {
	fn default() -> Self {
		Self {
			user_table_name: "User".to_string(),
		}
	}
}

/// Provisioning configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisioningConfigLayer {
	#[serde(default)]
	pub user_table_name: Option<String>,
}

impl ProvisioningConfigLayer {
	pub fn merge(&mut self, other: ProvisioningConfigLayer) {
		if other.user_table_name.is_some() {
			self.user_table_name = other.user_table_name;
		}
	}

	pub fn finalize(self) -> ProvisioningConfig {
		ProvisioningConfig {
			user_table_name: self.user_table_name.unwrap_or_else(|| "User".to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_table_name() {
		let config = ProvisioningConfigLayer::default().finalize();
		assert_eq!(config.user_table_name, "User");
	}

	#[test]
	fn test_custom_table_name() {
		let layer = ProvisioningConfigLayer {
			user_table_name: Some("Profiles".to_string()),
		};
		let config = layer.finalize();
		assert_eq!(config.user_table_name, "Profiles");
	}

	#[test]
	fn test_merge_prefers_other() {
		let mut base = ProvisioningConfigLayer {
			user_table_name: Some("User".to_string()),
		};
		base.merge(ProvisioningConfigLayer {
			user_table_name: Some("Profiles".to_string()),
		});
		assert_eq!(base.finalize().user_table_name, "Profiles");
	}
}
