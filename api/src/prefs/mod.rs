//! User-tunable settings for the converter.

pub mod converter_prefs;
