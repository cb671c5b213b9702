// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use tabulon_core::Columns;
use tabulon_type::Result;

pub mod error;
pub mod registry;
pub mod text;

pub use error::ConfigurationError;
pub use registry::Transforms;

/// Raw parameters of a pipeline step, as produced by the configuration layer.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// One step of a table pipeline.
pub trait Transform: Send + Sync {
	/// Stable identifier the pipeline host uses to look the step up.
	fn name(&self) -> &'static str;

	/// Upgrades parameters written by an older version of this step. Must be
	/// a no-op on parameters that are already current.
	fn migrate_params(&self, params: Params) -> Params {
		params
	}

	/// Runs the step. `None` means no table is available upstream yet and is
	/// passed through unchanged.
	fn render(&self, input: Option<Columns>, params: &Params) -> Result<Option<Columns>>;
}
