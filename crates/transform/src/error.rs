// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabulon_type::{Error, error::Diagnostic, error::IntoDiagnostic};

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
	#[error("column `{column}` does not exist")]
	ColumnNotFound {
		column: String,
		available: Vec<String>,
	},

	#[error("column `{column}` is ambiguous")]
	AmbiguousColumn {
		column: String,
		matches: usize,
	},

	#[error("invalid parameters for `{transform}`: {reason}")]
	InvalidParams {
		transform: String,
		reason: String,
	},
}

impl IntoDiagnostic for ConfigurationError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ConfigurationError::ColumnNotFound {
				column,
				available,
			} => {
				let notes = if available.is_empty() {
					vec!["the input table has no columns".to_string()]
				} else {
					vec![format!("available columns: {}", available.join(", "))]
				};
				Diagnostic {
					code: "CONFIG_001".to_string(),
					message,
					column: None,
					label: Some(format!("unknown column `{}`", column)),
					help: Some("pick a column that exists in the input table".to_string()),
					notes,
					cause: None,
				}
			}

			ConfigurationError::AmbiguousColumn {
				column,
				matches,
			} => Diagnostic {
				code: "CONFIG_003".to_string(),
				message,
				column: None,
				label: Some(format!("`{}` names {} columns", column, matches)),
				help: Some("rename the duplicate columns before this step".to_string()),
				notes: vec![],
				cause: None,
			},

			ConfigurationError::InvalidParams {
				transform,
				..
			} => Diagnostic {
				code: "CONFIG_002".to_string(),
				message,
				column: None,
				label: Some("malformed parameters".to_string()),
				help: Some(format!("check the parameter types expected by `{}`", transform)),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<ConfigurationError> for Error {
	fn from(err: ConfigurationError) -> Self {
		Error::new(err)
	}
}
