/// Client implementing every service interface
pub mod client;
/// Application configuration module
pub mod config;
/// Static endpoint tables per API domain
pub mod endpoints;
/// Service interfaces
pub mod interfaces;
/// Caller-injected request diagnostics
pub mod observer;
/// Session holding the bearer token
pub mod session;
