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

use thiserror::Error;

use crate::helper_constants::MAX_DIGITS;

/// Why an edit left the session unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditRejection {
    #[error("The country code is not editable")]
    CountryCodeLocked,
    #[error("Phone numbers can't have more than {} digits", MAX_DIGITS)]
    TooManyDigits,
    /// Same text as before, e.g. a non-text key press.
    #[error("The text didn't change")]
    Unchanged,
    #[error("The country is not in the table")]
    UnknownCountry,
}
