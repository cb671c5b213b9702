// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod number;
mod r#type;

pub use r#type::{GetType, Type};

use crate::value::number::{format_float4, format_float8};

/// A single cell, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// A 8-byte unsigned integer
	Uint8(u64),
	/// A 16-byte unsigned integer
	Uint16(u128),
	/// A UTF-8 encoded text
	Utf8(String),
	/// The label of a categorical cell
	Categorical(String),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn categorical(v: impl Into<String>) -> Self {
		Value::Categorical(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Utf8(_) => Type::Utf8,
			Value::Categorical(_) => Type::Categorical,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => f.write_str(&format_float4(*value)),
			Value::Float8(value) => f.write_str(&format_float8(*value)),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Uint16(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Categorical(value) => Display::fmt(value, f),
			Value::Undefined => f.write_str("undefined"),
		}
	}
}

macro_rules! impl_from_native {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Value::$variant(v)
				}
			}
		)*
	};
}

impl_from_native! {
	bool => Boolean,
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
	String => Utf8,
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Undefined)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Value::Int4(1).to_string(), "1");
		assert_eq!(Value::Float8(2.0).to_string(), "2.0");
		assert_eq!(Value::Float4(2.5).to_string(), "2.5");
		assert_eq!(Value::Boolean(true).to_string(), "true");
		assert_eq!(Value::utf8("nan").to_string(), "nan");
		assert_eq!(Value::categorical("red").to_string(), "red");
		assert_eq!(Value::Undefined.to_string(), "undefined");
	}

	#[test]
	fn test_from_option() {
		assert_eq!(Value::from(Some(3i32)), Value::Int4(3));
		assert_eq!(Value::from(None::<i32>), Value::Undefined);
		assert_eq!(Value::from(Some("x")), Value::Utf8("x".to_string()));
	}

	#[test]
	fn test_get_type() {
		assert_eq!(Value::categorical("a").get_type(), Type::Categorical);
		assert_eq!(Value::Uint8(1).get_type(), Type::Uint8);
	}
}
