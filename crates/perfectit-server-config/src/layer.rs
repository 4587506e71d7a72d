// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer, merged across sources in precedence order.

use serde::Deserialize;

use crate::sections::{DatabaseConfigLayer, ProvisioningConfigLayer};

/// Partial server configuration from one source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub database: Option<DatabaseConfigLayer>,
	#[serde(default)]
	pub provisioning: Option<ProvisioningConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge a higher-precedence layer into this one.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		if let Some(database) = other.database {
			match &mut self.database {
				Some(existing) => existing.merge(database),
				None => self.database = Some(database),
			}
		}
		if let Some(provisioning) = other.provisioning {
			match &mut self.provisioning {
				Some(existing) => existing.merge(provisioning),
				None => self.provisioning = Some(provisioning),
			}
		}
	}
}
