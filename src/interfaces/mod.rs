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

use std::sync::Arc;

use crate::countrydata::{CountryRecord, RawCountry};

/// Source of the raw country list a [`CountryTable`](crate::CountryTable)
/// is built from. The bundled dataset is available as
/// [`REFERENCE_DATA`](crate::REFERENCE_DATA); hosts with their own data can
/// implement this trait or fill a [`StaticReferenceData`](crate::StaticReferenceData).
pub trait ReferenceDataProvider {
    /// Sovereign countries, in canonical (alphabetical) order.
    fn countries(&self) -> &[RawCountry];
    /// Dependent territories, merged in only when territories are enabled.
    fn territories(&self) -> &[RawCountry];
}

/// Caller-supplied check of the current number. The session never decides
/// validity itself; it only turns a `false` into the configured message.
pub trait ValidityPredicate {
    fn is_valid(
        &self,
        digits: &str,
        selected: Option<&CountryRecord>,
        visible: &[Arc<CountryRecord>],
        hidden: &[Arc<CountryRecord>],
    ) -> bool;
}

impl<F> ValidityPredicate for F
where
    F: Fn(&str, Option<&CountryRecord>, &[Arc<CountryRecord>], &[Arc<CountryRecord>]) -> bool,
{
    fn is_valid(
        &self,
        digits: &str,
        selected: Option<&CountryRecord>,
        visible: &[Arc<CountryRecord>],
        hidden: &[Arc<CountryRecord>],
    ) -> bool {
        self(digits, selected, visible, hidden)
    }
}
