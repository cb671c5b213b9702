// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A vector that is cheap to clone. Clones share the same allocation until
/// one of them is mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct CowVec<T>
where
	T: Clone,
{
	inner: Arc<Vec<T>>,
}

impl<T> CowVec<T>
where
	T: Clone,
{
	pub fn new(vec: Vec<T>) -> Self {
		Self {
			inner: Arc::new(vec),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self::new(Vec::with_capacity(capacity))
	}

	pub fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	/// Ensures unique ownership and returns a mutable reference to the inner Vec.
	pub fn make_mut(&mut self) -> &mut Vec<T> {
		Arc::make_mut(&mut self.inner)
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		self.inner.get(idx)
	}

	/// Set by index (copy-on-write if necessary).
	pub fn set(&mut self, idx: usize, value: T) {
		self.make_mut()[idx] = value;
	}

	pub fn push(&mut self, value: T) {
		self.make_mut().push(value);
	}

	pub fn extend(&mut self, iter: impl IntoIterator<Item = T>) {
		self.make_mut().extend(iter);
	}

	pub fn is_shared(&self) -> bool {
		Arc::strong_count(&self.inner) > 1
	}
}

impl<T> Deref for CowVec<T>
where
	T: Clone,
{
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<T> Default for CowVec<T>
where
	T: Clone,
{
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T> IntoIterator for CowVec<T>
where
	T: Clone,
{
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		Arc::unwrap_or_clone(self.inner).into_iter()
	}
}

impl<T> From<Vec<T>> for CowVec<T>
where
	T: Clone,
{
	fn from(vec: Vec<T>) -> Self {
		Self::new(vec)
	}
}

impl<T> Serialize for CowVec<T>
where
	T: Clone + Serialize,
{
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_slice().serialize(serializer)
	}
}

impl<'de, T> Deserialize<'de> for CowVec<T>
where
	T: Clone + Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Vec::<T>::deserialize(deserializer).map(CowVec::new)
	}
}
