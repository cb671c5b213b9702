// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabulon_type::{BitVec, CowVec, Value};

/// Dictionary encoded text. Every defined row stores a code into `labels`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoricalContainer {
	labels: CowVec<String>,
	codes: CowVec<u32>,
	bitvec: BitVec,
	/// Label to code. Rebuilt from `labels` whenever it falls behind, which
	/// happens after deserialization.
	#[serde(skip)]
	index: HashMap<String, u32>,
}

impl PartialEq for CategoricalContainer {
	fn eq(&self, other: &Self) -> bool {
		self.labels == other.labels && self.codes == other.codes && self.bitvec == other.bitvec
	}
}

impl CategoricalContainer {
	pub fn new(labels: Vec<String>, codes: Vec<u32>, bitvec: BitVec) -> Self {
		debug_assert_eq!(codes.len(), bitvec.len());
		debug_assert!(
			codes.iter().zip(bitvec.iter()).all(|(&code, defined)| !defined || (code as usize) < labels.len())
		);
		let index = labels.iter().enumerate().map(|(code, label)| (label.clone(), code as u32)).collect();
		Self {
			labels: CowVec::new(labels),
			codes: CowVec::new(codes),
			bitvec,
			index,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			labels: CowVec::default(),
			codes: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
			index: HashMap::new(),
		}
	}

	/// Builds the dictionary from row labels, assigning codes in first-seen order.
	pub fn from_labels(rows: Vec<Option<String>>) -> Self {
		let mut labels: Vec<String> = Vec::new();
		let mut index: HashMap<String, u32> = HashMap::new();
		let mut codes = Vec::with_capacity(rows.len());
		let mut bitvec = BitVec::with_capacity(rows.len());

		for row in rows {
			match row {
				Some(label) => {
					let code = *index.entry(label).or_insert_with_key(|label| {
						labels.push(label.clone());
						(labels.len() - 1) as u32
					});
					codes.push(code);
					bitvec.push(true);
				}
				None => {
					codes.push(0);
					bitvec.push(false);
				}
			}
		}

		Self::new(labels, codes, bitvec)
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.codes.len(), self.bitvec.len());
		self.codes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}

	pub fn push(&mut self, label: String) {
		if self.index.len() != self.labels.len() {
			self.index = self.labels.iter().enumerate().map(|(code, label)| (label.clone(), code as u32)).collect();
		}

		let code = match self.index.get(&label) {
			Some(&code) => code,
			None => {
				let code = self.labels.len() as u32;
				self.index.insert(label.clone(), code);
				self.labels.push(label);
				code
			}
		};
		self.codes.push(code);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.codes.push(0);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if index < self.len() && self.bitvec.get(index) {
			self.labels.get(self.codes[index] as usize).map(String::as_str)
		} else {
			None
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		self.bitvec.get(idx)
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(Value::categorical).unwrap_or(Value::Undefined)
	}

	pub fn labels(&self) -> &CowVec<String> {
		&self.labels
	}

	pub fn codes(&self) -> &CowVec<u32> {
		&self.codes
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		(0..self.len()).map(|idx| self.get(idx))
	}
}

impl Default for CategoricalContainer {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_labels_interns_first_seen() {
		let container = CategoricalContainer::from_labels(vec![
			Some("b".to_string()),
			None,
			Some("a".to_string()),
			Some("b".to_string()),
		]);

		assert_eq!(container.labels().as_slice(), &["b".to_string(), "a".to_string()]);
		assert_eq!(container.codes().as_slice(), &[0, 0, 1, 0]);
		assert_eq!(container.iter().collect::<Vec<_>>(), vec![Some("b"), None, Some("a"), Some("b")]);
	}

	#[test]
	fn test_push_reuses_label() {
		let mut container = CategoricalContainer::default();
		container.push("x".to_string());
		container.push_undefined();
		container.push("x".to_string());

		assert_eq!(container.labels().len(), 1);
		assert_eq!(container.get(2), Some("x"));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get_value(0), Value::Categorical("x".to_string()));
	}

	#[test]
	fn test_push_many_rows_interns_each_label_once() {
		let mut container = CategoricalContainer::default();
		for row in 0..1000 {
			container.push(format!("label-{}", row % 7));
		}

		assert_eq!(container.labels().len(), 7);
		assert_eq!(container.len(), 1000);
		assert_eq!(container.get(999), Some("label-5"));
		assert_eq!(container.codes()[14], 0);
	}

	#[test]
	fn test_push_after_from_labels_reuses_codes() {
		let mut container = CategoricalContainer::from_labels(vec![Some("a".to_string()), Some("b".to_string())]);
		container.push("b".to_string());

		assert_eq!(container.labels().len(), 2);
		assert_eq!(container.codes().as_slice(), &[0, 1, 1]);
	}

	#[test]
	fn test_push_after_deserialize_reuses_codes() {
		let original = CategoricalContainer::from_labels(vec![Some("a".to_string()), None]);
		let mut container: CategoricalContainer =
			serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
		assert_eq!(container, original);

		container.push("a".to_string());
		assert_eq!(container.labels().len(), 1);
		assert_eq!(container.get(2), Some("a"));
	}

	#[test]
	fn test_missing_row_with_zero_code_is_missing() {
		let container = CategoricalContainer::new(
			vec!["only".to_string()],
			vec![0, 0],
			BitVec::from_slice(&[false, true]),
		);
		assert_eq!(container.get(0), None);
		assert_eq!(container.get(1), Some("only"));
	}
}
