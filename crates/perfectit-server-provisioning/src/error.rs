// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use perfectit_server_db::DbError;

/// Errors that can occur during user provisioning.
#[derive(Debug, thiserror::Error)]
pub enum ProvisioningError {
	/// The confirmation event carried no subject id. Raised before any store
	/// operation; never retried.
	#[error("user ID is required")]
	MissingSubjectId,

	#[error("database error: {0}")]
	Database(#[from] DbError),
}
