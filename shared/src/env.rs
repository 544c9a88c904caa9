use std::env;
use std::str::FromStr;

use strum::EnumString;

#[derive(Debug, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Run mode selected by `ENV`.
///
/// When `ENV` is unset or not one of `development` / `production`, the build
/// profile decides: debug builds run as development, release builds as
/// production. Use [`unrecognized`] to find out whether a value was ignored.
pub fn which() -> Environment {
    which_from(env::var("ENV").ok().as_deref())
}

/// The raw `ENV` value when it is set but not a known run mode.
pub fn unrecognized() -> Option<String> {
    unrecognized_from(env::var("ENV").ok().as_deref())
}

fn default_env() -> Environment {
    if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    }
}

fn which_from(value: Option<&str>) -> Environment {
    value
        .and_then(|v| Environment::from_str(v).ok())
        .unwrap_or_else(default_env)
}

fn unrecognized_from(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| Environment::from_str(v).is_err())
        .map(str::to_owned)
}
