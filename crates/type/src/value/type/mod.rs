// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// The declared kind of a column.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// A 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A UTF-8 encoded text
	Utf8,
	/// Text drawn from a finite label set, stored as dictionary codes
	Categorical,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 | Type::Uint16)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_categorical(&self) -> bool {
		matches!(self, Type::Categorical)
	}

	/// Text for merging purposes: plain text or categorical labels.
	pub fn is_textual(&self) -> bool {
		self.is_utf8() || self.is_categorical()
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Float4 => f.write_str("FLOAT4"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Int1 => f.write_str("INT1"),
			Type::Int2 => f.write_str("INT2"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Int16 => f.write_str("INT16"),
			Type::Uint1 => f.write_str("UINT1"),
			Type::Uint2 => f.write_str("UINT2"),
			Type::Uint4 => f.write_str("UINT4"),
			Type::Uint8 => f.write_str("UINT8"),
			Type::Uint16 => f.write_str("UINT16"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Categorical => f.write_str("CATEGORICAL"),
			Type::Undefined => f.write_str("UNDEFINED"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Type;

	#[test]
	fn test_textual() {
		assert!(Type::Utf8.is_textual());
		assert!(Type::Categorical.is_textual());
		assert!(!Type::Int4.is_textual());
		assert!(!Type::Undefined.is_textual());
	}

	#[test]
	fn test_number() {
		assert!(Type::Float8.is_number());
		assert!(Type::Uint16.is_number());
		assert!(!Type::Boolean.is_number());
		assert!(!Type::Categorical.is_number());
	}
}
