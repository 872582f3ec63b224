// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::hash::Hash;

use dashmap::DashMap;

/// Memo table for pure lookups keyed by their exact inputs.
///
/// Entries are never evicted: keys are short digit prefixes or picker
/// queries over a fixed table, so the key space stays small.
#[derive(Debug)]
pub struct MatchCache<K: Eq + Hash, V> {
    cache: DashMap<K, V>,
}

impl<K: Eq + Hash, V: Clone> MatchCache<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.cache.get(&key) {
            return value.value().clone();
        }
        let entry = self.cache.entry(key).or_insert_with(compute);
        entry.value().clone()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
