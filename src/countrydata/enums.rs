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

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Geographic and political groupings a country can belong to. Used by
/// [`Inclusion::Regions`] to narrow the visible list.
///
/// Parsed from and printed as the kebab-case tags of the reference data,
/// e.g. `"north-america"` or `"eu-union"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Region {
    America,
    Europe,
    Asia,
    Oceania,
    Africa,
    NorthAmerica,
    SouthAmerica,
    CentralAmerica,
    /// Spelled the way the reference data spells it.
    Carribean,
    EuUnion,
    ExUssr,
    ExYugos,
    Baltic,
    MiddleEast,
    NorthAfrica,
}

/// Which countries show their area-code variants in the visible list.
///
/// Variants that are not shown still take part in matching through the
/// hidden set, but only while area codes are [`AreaCodes::Disabled`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AreaCodes {
    #[default]
    Disabled,
    All,
    /// Only the listed iso2 codes.
    Only(Vec<String>),
}

impl AreaCodes {
    pub fn is_disabled(&self) -> bool {
        matches!(self, AreaCodes::Disabled)
    }

    pub fn is_enabled_for(&self, iso2: &str) -> bool {
        match self {
            AreaCodes::Disabled => false,
            AreaCodes::All => true,
            AreaCodes::Only(codes) => codes.iter().any(|code| code == iso2),
        }
    }
}

/// Which records make it into the visible list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Inclusion {
    #[default]
    All,
    /// Only the listed iso2 codes.
    Only(Vec<String>),
    /// Records tagged with at least one of the regions.
    Regions(Vec<Region>),
}

/// User lists whose own order is kept instead of the alphabetical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ListKind {
    /// The `Inclusion::Only` list.
    OnlyCountries,
    PreferredCountries,
}
