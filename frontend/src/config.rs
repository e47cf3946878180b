use log::Level;

/// localStorage key marking that the welcome modal has been shown.
pub const VISIT_FLAG_KEY: &str = "hasVisited";
pub const VISIT_FLAG_VALUE: &str = "true";

/// How long the welcome modal stays up before dismissing itself.
pub const WELCOME_DISMISS_MS: u32 = 3000;

pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// How long a replaced card stays on screen while it slides out.
pub const CARD_EXIT_MS: u32 = 500;

/// Where the page expects its images and icons to be served from. The files
/// themselves are deployed separately and are not part of this crate.
pub const ASSET_BASE: &str = "/assets";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", ASSET_BASE, file.trim_start_matches('/'))
}
