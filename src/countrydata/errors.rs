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

/// Problems found while loading reference data. The bundled dataset is
/// checked at build time, so these mostly concern caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceDataError {
    #[error("Malformed dataset text: {0}")]
    Malformed(String),
    #[error("Invalid iso2 code '{0}'")]
    InvalidIso2(String),
    #[error("Invalid dial code '{dial_code}' for '{iso2}'")]
    InvalidDialCode { iso2: String, dial_code: String },
    #[error("Invalid area code '{area_code}' for '{iso2}'")]
    InvalidAreaCode { iso2: String, area_code: String },
}
