//! Environment-driven configuration: variable names, defaults, and the lookup seam
//! handlers use to read them at request time.

use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use tracing::{info, warn};

/// Environment variable naming the deployment environment reported by `/health`.
pub const APP_ENV_VAR: &str = "APP_ENV";
/// Environment variable holding the application port.
pub const APP_PORT_VAR: &str = "APP_PORT";
/// Environment variable overriding the bind address.
pub const APP_HOST_VAR: &str = "APP_HOST";
/// Value reported when [`APP_ENV_VAR`] is unset.
pub const DEFAULT_APP_ENV: &str = "development";
/// Raw value used when [`APP_PORT_VAR`] is unset.
pub const DEFAULT_APP_PORT: &str = "8000";
/// Port bound when [`APP_PORT_VAR`] is unusable at startup.
const FALLBACK_LISTEN_PORT: u16 = 8000;
/// Address bound when [`APP_HOST_VAR`] is unset or invalid.
const DEFAULT_LISTEN_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Key/value lookup over string configuration inputs.
///
/// Implementations must not cache: every call reflects the current value so that
/// environment changes become visible on the next request.
pub trait EnvSource: Send + Sync {
    /// Return the value for `key`, or `None` when it is unset or not valid unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Return the value for `key`, falling back to `default` when unset.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_owned())
    }
}

/// [`EnvSource`] backed by the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Socket address the HTTP server binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenConfig {
    addr: SocketAddr,
}

impl ListenConfig {
    /// Resolve the listen address from `APP_HOST` and `APP_PORT`.
    ///
    /// Unusable values are logged and replaced by defaults so a bad port never
    /// prevents startup; `/health` still reports the malformed value per request.
    pub fn from_env(source: &dyn EnvSource) -> Self {
        let host = match source.get(APP_HOST_VAR) {
            Some(raw) => raw.trim().parse::<IpAddr>().unwrap_or_else(|err| {
                warn!(value = %raw, error = %err, "invalid APP_HOST; using default");
                DEFAULT_LISTEN_HOST
            }),
            None => DEFAULT_LISTEN_HOST,
        };

        let port = match source.get(APP_PORT_VAR) {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(0) => {
                    warn!(
                        value = %raw,
                        fallback = FALLBACK_LISTEN_PORT,
                        "APP_PORT 0 would bind an ephemeral port; binding fallback"
                    );
                    FALLBACK_LISTEN_PORT
                }
                Ok(port) => port,
                Err(err) => {
                    warn!(
                        value = %raw,
                        error = %err,
                        fallback = FALLBACK_LISTEN_PORT,
                        "APP_PORT is not a usable port; binding fallback"
                    );
                    FALLBACK_LISTEN_PORT
                }
            },
            None => {
                info!(port = FALLBACK_LISTEN_PORT, "APP_PORT unset; using default port");
                FALLBACK_LISTEN_PORT
            }
        };

        Self {
            addr: SocketAddr::new(host, port),
        }
    }

    /// Address to bind.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}
