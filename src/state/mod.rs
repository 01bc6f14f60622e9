use std::sync::Arc;

use crate::config::{EnvSource, ProcessEnv};

/// Cheaply clonable handle to [`AppState`].
pub type SharedState = Arc<AppState>;

/// Central application state shared by every handler.
pub struct AppState {
    env: Arc<dyn EnvSource>,
}

impl AppState {
    /// Construct a new [`AppState`] reading the process environment.
    pub fn new() -> SharedState {
        Self::with_env(Arc::new(ProcessEnv))
    }

    /// Construct a new [`AppState`] over an arbitrary environment source.
    pub fn with_env(env: Arc<dyn EnvSource>) -> SharedState {
        Arc::new(Self { env })
    }

    /// Environment lookup consulted at request time.
    pub fn env(&self) -> &dyn EnvSource {
        self.env.as_ref()
    }
}
