// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use tabulon_type::BitVec;
use tracing::trace;

use crate::value::column::{ColumnData, container::Utf8Container};

impl ColumnData {
	/// The column rendered as text with its presence bits unchanged. Text
	/// columns are borrowed; every other kind is rendered once, row by row,
	/// with the same form `as_string` produces.
	pub fn to_utf8(&self) -> Cow<'_, Utf8Container> {
		match self {
			ColumnData::Utf8(container) => Cow::Borrowed(container),
			ColumnData::Categorical(container) => {
				trace!(rows = container.len(), labels = container.labels().len(), "flattening categorical");
				let mut values = Vec::with_capacity(container.len());
				let mut bitvec = BitVec::with_capacity(container.len());
				for label in container.iter() {
					match label {
						Some(label) => {
							values.push(label.to_string());
							bitvec.push(true);
						}
						None => {
							values.push(String::new());
							bitvec.push(false);
						}
					}
				}
				Cow::Owned(Utf8Container::new(values, bitvec))
			}
			other => {
				trace!(rows = other.len(), kind = %other.get_type(), "rendering column as text");
				let mut values = Vec::with_capacity(other.len());
				let mut bitvec = BitVec::with_capacity(other.len());
				for idx in 0..other.len() {
					match other.as_string(idx) {
						Some(text) => {
							values.push(text);
							bitvec.push(true);
						}
						None => {
							values.push(String::new());
							bitvec.push(false);
						}
					}
				}
				Cow::Owned(Utf8Container::new(values, bitvec))
			}
		}
	}
}
