// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use crate::{Transform, text::MergeColumns};

type Factory = Box<dyn Fn() -> Box<dyn Transform> + Send + Sync>;

/// Transforms a pipeline host can instantiate by name.
pub struct Transforms {
	transforms: HashMap<String, Factory>,
}

impl Transforms {
	pub fn new() -> Self {
		Self {
			transforms: HashMap::new(),
		}
	}

	/// Every transform shipped with this crate.
	pub fn builtin() -> Self {
		let mut result = Self::new();
		result.register(MergeColumns::NAME, MergeColumns::new);
		result
	}

	pub fn register<F, T>(&mut self, name: &str, init: F)
	where
		F: Fn() -> T + Send + Sync + 'static,
		T: Transform + 'static,
	{
		self.transforms.insert(name.to_string(), Box::new(move || Box::new(init()) as Box<dyn Transform>));
	}

	pub fn get(&self, name: &str) -> Option<Box<dyn Transform>> {
		self.transforms.get(name).map(|init| init())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.transforms.contains_key(name)
	}

	pub fn names(&self) -> Vec<&str> {
		let mut result: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
		result.sort_unstable();
		result
	}
}

impl Default for Transforms {
	fn default() -> Self {
		Self::builtin()
	}
}
