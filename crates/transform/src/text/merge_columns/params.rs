// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tabulon_type::Result;
use tracing::debug;

use super::MergeColumns;
use crate::{ConfigurationError, Params};

const LEGACY_FIRST: &str = "firstcolumn";
const LEGACY_SECOND: &str = "secondcolumn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeColumnsParams {
	#[serde(default, deserialize_with = "null_as_default")]
	pub columns: Vec<String>,
	#[serde(default = "default_delimiter", deserialize_with = "delimiter_or_default")]
	pub delimiter: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub newcolumn: String,
}

impl Default for MergeColumnsParams {
	fn default() -> Self {
		Self {
			columns: vec![],
			delimiter: default_delimiter(),
			newcolumn: String::new(),
		}
	}
}

impl MergeColumnsParams {
	pub fn new(columns: impl IntoIterator<Item = impl Into<String>>, delimiter: &str, newcolumn: &str) -> Self {
		Self {
			columns: columns.into_iter().map(Into::into).collect(),
			delimiter: delimiter.to_string(),
			newcolumn: newcolumn.to_string(),
		}
	}

	/// Parses raw parameters, upgrading the two-slot shape first.
	pub fn from_params(params: &Params) -> Result<Self> {
		let migrated = migrate_params(params.clone());
		serde_json::from_value(Value::Object(migrated)).map_err(|err| {
			ConfigurationError::InvalidParams {
				transform: MergeColumns::NAME.to_string(),
				reason: err.to_string(),
			}
			.into()
		})
	}

	pub fn into_params(self) -> Params {
		let mut params = Params::new();
		params.insert("columns".to_string(), Value::Array(self.columns.into_iter().map(Value::String).collect()));
		params.insert("delimiter".to_string(), Value::String(self.delimiter));
		params.insert("newcolumn".to_string(), Value::String(self.newcolumn));
		params
	}

	/// Nothing to merge, or nowhere to write it.
	pub fn is_noop(&self) -> bool {
		self.columns.is_empty() || self.newcolumn.is_empty()
	}
}

/// Converts `{firstcolumn, secondcolumn, ..}` into `{columns: [..], ..}`.
///
/// Empty or unset slots are dropped and `firstcolumn` stays ahead of
/// `secondcolumn`. Any other slot value is carried over unchanged, so a
/// malformed slot fails parsing like a malformed `columns` entry would.
/// Parameters without either legacy key are returned as is.
pub fn migrate_params(mut params: Params) -> Params {
	if !params.contains_key(LEGACY_FIRST) && !params.contains_key(LEGACY_SECOND) {
		return params;
	}

	let first = params.remove(LEGACY_FIRST);
	let second = params.remove(LEGACY_SECOND);

	let columns: Vec<Value> = [first, second]
		.into_iter()
		.flatten()
		.filter(|slot| match slot {
			Value::Null => false,
			Value::String(name) => !name.is_empty(),
			_ => true,
		})
		.collect();

	debug!(columns = columns.len(), "migrated two-slot merge parameters");
	params.insert("columns".to_string(), Value::Array(columns));
	params
}

fn default_delimiter() -> String {
	"-".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn delimiter_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_delimiter))
}
