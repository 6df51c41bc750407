pub mod level;
pub mod seed;

/// Window title for the desktop host.
pub const APP_NAME: &str = "Warren";
