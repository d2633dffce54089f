//! Read time estimation for content pipelines.
//!
//! A [`Configuration`] is built once from the raw settings with [`build`] and then
//! shared read-only. For every document the host checks [`is_supported`], picks the
//! profile with [`resolve_profile`] and turns its word count into a
//! [`ReadTimeResult`] with [`build_result`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod profile;

pub use calculator::{
    build_result, compute_minutes_seconds, count_words, pluralize, ReadTimeResult,
};
pub use config::{build, is_supported, resolve_profile, Configuration};
pub use error::{CalculationError, ConfigError};
pub use profile::LanguageProfile;
