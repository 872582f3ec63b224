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

use std::sync::LazyLock;

use crate::{
    interfaces::ReferenceDataProvider,
    proto_gen::country_data::CountryDataset,
};

use super::{errors::ReferenceDataError, raw_country::RawCountry};

const BUNDLED_DATASET: &str = include_str!("../../resources/country_data.textproto");

/// The reference data compiled into the crate.
pub static REFERENCE_DATA: LazyLock<StaticReferenceData> = LazyLock::new(|| {
    match StaticReferenceData::parse_text(BUNDLED_DATASET) {
        Err(err) => {
            let err_message = format!("Could not parse compiled-in country data: {}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
        Ok(data) => data,
    }
});

/// Reference data held in memory, either parsed from the protobuf text
/// format or assembled by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticReferenceData {
    countries: Vec<RawCountry>,
    territories: Vec<RawCountry>,
}

impl StaticReferenceData {
    pub fn new(
        countries: Vec<RawCountry>,
        territories: Vec<RawCountry>,
    ) -> Result<Self, ReferenceDataError> {
        for raw in countries.iter().chain(territories.iter()) {
            raw.validate()?;
        }
        Ok(Self { countries, territories })
    }

    /// Parses a `CountryDataset` message written in the protobuf text
    /// format, see `resources/country_data.proto`.
    pub fn parse_text(text: &str) -> Result<Self, ReferenceDataError> {
        let dataset: CountryDataset = protobuf::text_format::parse_from_str(text)
            .map_err(|err| ReferenceDataError::Malformed(err.to_string()))?;
        let countries = dataset
            .countries
            .into_iter()
            .map(RawCountry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let territories = dataset
            .territories
            .into_iter()
            .map(RawCountry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Loaded {} countries and {} territories",
            countries.len(),
            territories.len()
        );
        Ok(Self { countries, territories })
    }
}

impl ReferenceDataProvider for StaticReferenceData {
    fn countries(&self) -> &[RawCountry] {
        &self.countries
    }

    fn territories(&self) -> &[RawCountry] {
        &self.territories
    }
}
