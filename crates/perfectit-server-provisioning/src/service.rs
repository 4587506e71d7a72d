// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The post-confirmation provisioning service.

use std::sync::Arc;

use chrono::Utc;
use perfectit_server_auth::{ConfirmationEvent, ProfileRecord, SubjectId, UserAttributes};
use perfectit_server_db::{DbError, ProfileStore};

use crate::error::ProvisioningError;

/// Terminal outcomes of one provisioning attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProvisionOutcome {
	Created,
	AlreadyExists,
}

/// Derive the initial username from identity attributes.
///
/// First applicable rule wins:
/// 1. the preferred username, if non-empty
/// 2. the local part of the email (before the first `@`), if non-empty
/// 3. `user_` followed by the first 8 characters of the subject id
///
/// Subject ids shorter than 8 characters yield a correspondingly shorter
/// fallback; the value is truncated, never padded.
pub fn derive_username(attrs: &UserAttributes, subject_id: &SubjectId) -> String {
	if let Some(preferred) = attrs.preferred_username() {
		return preferred.to_string();
	}

	if let Some(email) = attrs.email() {
		let local = email.split('@').next().unwrap_or_default();
		if !local.is_empty() {
			return local.to_string();
		}
	}

	let prefix: String = subject_id.as_str().chars().take(8).collect();
	format!("user_{prefix}")
}

/// Provisions a profile record for each newly confirmed identity.
///
/// The service is stateless; the injected [`ProfileStore`] is the only
/// collaborator, and its conditional insert is the only synchronization point
/// between duplicate or concurrent invocations for the same subject.
#[derive(Clone)]
pub struct UserProvisioningService {
	store: Arc<dyn ProfileStore>,
}

impl UserProvisioningService {
	/// Create a new service backed by the given store.
	pub fn new(store: Arc<dyn ProfileStore>) -> Self {
		Self { store }
	}

	/// Handle an identity confirmation event.
	///
	/// Returns the original event on success and on duplicate invocation, so
	/// the caller can acknowledge the trigger either way.
	///
	/// # Errors
	/// Returns `ProvisioningError::MissingSubjectId` if the event carries no
	/// subject id (no store call is made), or `ProvisioningError::Database`
	/// for any store failure other than "profile already exists".
	#[tracing::instrument(skip(self, event), fields(user_name = %event.user_name))]
	pub async fn handle_post_confirmation(
		&self,
		event: ConfirmationEvent,
	) -> Result<ConfirmationEvent, ProvisioningError> {
		match self.provision(&event).await? {
			ProvisionOutcome::Created => {}
			ProvisionOutcome::AlreadyExists => {
				tracing::info!("user profile already exists, skipping creation");
			}
		}
		Ok(event)
	}

	async fn provision(
		&self,
		event: &ConfirmationEvent,
	) -> Result<ProvisionOutcome, ProvisioningError> {
		let attrs = &event.request.user_attributes;
		let subject_id = attrs
			.subject_id()
			.ok_or(ProvisioningError::MissingSubjectId)?;

		let username = derive_username(attrs, &subject_id);
		let profile = ProfileRecord::new(
			subject_id,
			username,
			attrs.email().map(str::to_string),
			attrs.picture().map(str::to_string),
			Utc::now(),
		);

		match self.store.create_profile(&profile).await {
			Ok(()) => {
				tracing::info!(profile_id = %profile.id, "user profile created");
				Ok(ProvisionOutcome::Created)
			}
			Err(DbError::Conflict(_)) => Ok(ProvisionOutcome::AlreadyExists),
			Err(e) => Err(e.into()),
		}
	}
}
