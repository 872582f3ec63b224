mod country_record;
mod country_table;
pub mod enums;
pub mod errors;
mod helper_functions;
mod raw_country;
mod reference_data;

pub use country_record::CountryRecord;
pub use country_table::CountryTable;
pub use enums::{AreaCodes, Inclusion, ListKind, Region};
pub use errors::ReferenceDataError;
pub use raw_country::RawCountry;
pub use reference_data::{StaticReferenceData, REFERENCE_DATA};
