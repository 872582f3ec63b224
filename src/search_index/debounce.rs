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

use std::time::{Duration, Instant};

use crate::helper_constants::SEARCH_DEBOUNCE;

/// Trailing-edge debounce of a type-to-jump query. Every keystroke extends
/// the query and pushes the deadline back; the query is released once the
/// deadline passes without another keystroke.
///
/// Time is passed in explicitly, the caller decides when to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedQuery {
    query: String,
    deadline: Option<Instant>,
    delay: Duration,
}

impl Default for DebouncedQuery {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl DebouncedQuery {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            deadline: None,
            delay,
        }
    }

    /// Appends `text` and supersedes any pending deadline.
    pub fn push(&mut self, text: &str, now: Instant) {
        self.query.push_str(text);
        self.deadline = Some(now + self.delay);
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Takes the query when the deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                Some(std::mem::take(&mut self.query))
            }
            _ => None,
        }
    }
}
