//! Environment readers for the `CARDIO_*` configuration variables

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, warn};

/// Reads and parses one `CARDIO_*` environment variable
///
/// Unset variables read as `None`. A set-but-unparseable value is reported
/// and also treated as unset, so a bad `.env` line degrades to the library
/// default instead of failing client construction.
pub fn env_value<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Debug,
{
    let raw = env::var(name).ok()?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring unparseable {name}={raw}: {e:?}");
            None
        }
    }
}

/// Reads one `CARDIO_*` environment variable, falling back to the library
/// default when it is unset or unparseable
pub fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Debug,
{
    match env_value(name) {
        Some(value) => value,
        None => {
            debug!("{name} not set, using default {default:?}");
            default
        }
    }
}
