mod localization;

pub use localization::Localization;
