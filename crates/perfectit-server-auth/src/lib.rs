// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identity and profile types for the PerfectIt backend.
//!
//! This crate provides:
//! - [`SubjectId`] - type-safe wrapper around the identity provider's subject identifier
//! - [`ConfirmationEvent`] - the post-confirmation trigger payload delivered by the
//!   identity confirmation event source
//! - [`ProfileRecord`] - the durable user profile created at first confirmation
//! - [`UserGroup`] - access groups with numeric precedence
//!
//! The event types round-trip unchanged through serde: the provisioning flow must
//! return the event it received verbatim, including attributes it does not model.

pub mod event;
pub mod profile;
pub mod testing;
pub mod types;

pub use event::{ConfirmationEvent, ConfirmationRequest, UserAttributes};
pub use profile::{ProfileRecord, SocialLinks};
pub use types::{SubjectId, UserGroup};
