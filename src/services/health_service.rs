use std::{io, num::ParseIntError};

use tracing::{debug, error};

use crate::{
    config::{APP_ENV_VAR, APP_PORT_VAR, DEFAULT_APP_ENV, DEFAULT_APP_PORT, EnvSource},
    dto::health::HealthResponse,
    error::ServiceError,
    state::SharedState,
};

/// Build the health payload from the current environment and host name.
///
/// Nothing is cached: every call re-reads `APP_ENV` and `APP_PORT`, so changes to
/// the environment are visible on the next request.
pub fn health_status(state: &SharedState) -> Result<HealthResponse, ServiceError> {
    let env = state.env();
    let app_env = env.get_or(APP_ENV_VAR, DEFAULT_APP_ENV);
    let app_port =
        read_port(env).inspect_err(|err| error!(error = %err, "health check failed"))?;
    let hostname = current_hostname()?;

    debug!(env = %app_env, %hostname, app_port, "health check");
    Ok(HealthResponse::ok(app_env, hostname, app_port))
}

/// Parse `APP_PORT` as a base-10 integer; no default is substituted on failure.
fn read_port(env: &dyn EnvSource) -> Result<i64, ServiceError> {
    let raw = env.get_or(APP_PORT_VAR, DEFAULT_APP_PORT);
    parse_integer(&raw).map_err(|source| ServiceError::ValueConversion {
        var: APP_PORT_VAR,
        value: raw,
        source,
    })
}

/// Parse a signed decimal integer, accepting single underscores between digits
/// (`8_000`). Values outside the `i64` range are rejected.
fn parse_integer(raw: &str) -> Result<i64, ParseIntError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    let grouped = digits.contains('_')
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__");

    if grouped {
        trimmed.replace('_', "").parse()
    } else {
        trimmed.parse()
    }
}

/// Network name of the machine, as reported by the operating system.
fn current_hostname() -> Result<String, ServiceError> {
    let name = hostname::get().map_err(ServiceError::Hostname)?;
    name.into_string().map_err(|raw| {
        ServiceError::Hostname(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("hostname is not valid UTF-8: {raw:?}"),
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::tests::FakeEnv, state::AppState};

    fn state(pairs: &[(&str, &str)]) -> SharedState {
        AppState::with_env(Arc::new(FakeEnv::with(pairs)))
    }

    #[test]
    fn defaults_when_unset() {
        let status = health_status(&state(&[])).unwrap();
        assert_eq!(status.status, "ok");
        assert_eq!(status.env, "development");
        assert_eq!(status.app_port, 8000);
        assert_eq!(status.hostname, current_hostname().unwrap());
    }

    #[test]
    fn reads_environment_overrides() {
        let state = state(&[("APP_ENV", "production"), ("APP_PORT", "9090")]);
        let status = health_status(&state).unwrap();
        assert_eq!(status.env, "production");
        assert_eq!(status.app_port, 9090);
    }

    #[test]
    fn port_tolerates_surrounding_whitespace() {
        let status = health_status(&state(&[("APP_PORT", " 8080\n")])).unwrap();
        assert_eq!(status.app_port, 8080);
    }

    #[test]
    fn rejects_non_integer_port() {
        for bad in ["not-a-number", "", "80.5", "0x1f"] {
            let err = health_status(&state(&[("APP_PORT", bad)])).unwrap_err();
            match err {
                ServiceError::ValueConversion { var, value, .. } => {
                    assert_eq!(var, "APP_PORT");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn port_accepts_digit_group_underscores() {
        let state = state(&[("APP_PORT", "8_000")]);
        assert_eq!(health_status(&state).unwrap().app_port, 8000);
        assert_eq!(parse_integer("-1_2_3"), Ok(-123));
    }

    #[test]
    fn port_rejects_misplaced_underscores() {
        for bad in ["_8000", "8000_", "8__000", "+_8000", "_"] {
            assert!(parse_integer(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn port_beyond_i64_is_a_conversion_error() {
        let state = state(&[("APP_PORT", "99999999999999999999")]);
        let err = health_status(&state).unwrap_err();
        assert!(matches!(err, ServiceError::ValueConversion { var: "APP_PORT", .. }));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let state = state(&[("APP_ENV", "staging")]);
        let first = health_status(&state).unwrap();
        let second = health_status(&state).unwrap();
        assert_eq!(first, second);
    }
}
