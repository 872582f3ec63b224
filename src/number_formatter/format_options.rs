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

use crate::helper_constants::DEFAULT_PREFIX;

/// Rendering toggles of the [`NumberFormatter`](super::NumberFormatter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Drops the dial-code token of the mask and the leading prefix.
    pub disable_country_code: bool,
    /// Widens the area-code token of area-code variants to the length of
    /// their area code.
    pub enable_area_code_stretch: bool,
    /// Appends digits that don't fit into the mask instead of dropping them.
    pub enable_long_numbers: bool,
    /// When false digits are shown as typed, only prefixed.
    pub auto_format: bool,
    /// International prefix put in front of the dial code.
    pub prefix: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            disable_country_code: false,
            enable_area_code_stretch: false,
            enable_long_numbers: false,
            auto_format: true,
            prefix: DEFAULT_PREFIX.to_owned(),
        }
    }
}
