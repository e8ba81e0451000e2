// Constants shared across multiple modules

// Backend endpoint used when no override is configured
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000/calculate";

// Environment overrides read by the binary
pub const BACKEND_URL_ENV: &str = "STARSCAN_BACKEND_URL";
pub const TIMEOUT_SECS_ENV: &str = "STARSCAN_TIMEOUT_SECS";

// Texts shown in the result area
pub const SCANNING_MESSAGE: &str = "Scanning the stars...";
pub const SERVER_ERROR_PREFIX: &str = "Server Error: ";
pub const CONNECTION_FAILED_MESSAGE: &str = "Connection Failed.";

// Struggle sent when the user picked none
pub const DEFAULT_STRUGGLE: &str = "Passion";
