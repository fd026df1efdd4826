// Application configuration
// Logging can only be toggled in development builds

#[cfg(debug_assertions)]
pub const LOGGING_ENABLED: bool = true; // Debug builds log by default

#[cfg(not(debug_assertions))]
pub const LOGGING_ENABLED: bool = false; // Release builds are silent

/// Port the remote signaling endpoint listens on. The offer URL is always
/// `http://{host}:{SIGNALING_PORT}/offer`.
pub const SIGNALING_PORT: u16 = 8080;
