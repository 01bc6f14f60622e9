/// Payloads shared by several routes.
pub mod common;
/// `/health` payload.
pub mod health;
/// `/` payload.
pub mod welcome;
