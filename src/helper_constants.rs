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

use std::time::Duration;

/// International prefix shown in front of the dial code.
pub const DEFAULT_PREFIX: &str = "+";
/// National part of the mask used for countries without a predefined one.
/// The dial-code token is prepended when the table is built.
pub const DEFAULT_MASK: &str = "... ... ... ... ..";
/// The ITU limit for a full international number.
pub const MAX_DIGITS: usize = 15;
/// Delay before a type-to-jump search runs in the country picker.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

pub(crate) const MASK_PLACEHOLDER: char = '.';
/// Only this many leading digits take part in country guessing. Real dial
/// codes (with area codes) never get longer, and it bounds the cache.
pub(crate) const GUESS_PREFIX_LEN: usize = 6;
/// Priority of the fold seed; above any real priority value.
pub(crate) const PRIORITY_SENTINEL: i32 = 10001;
