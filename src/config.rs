//! Shared destinations, asset paths and build settings used across the site.

pub const GITHUB_URL: &str = "https://github.com/shuntia/lunaris";
pub const RELEASES_URL: &str = "https://github.com/shuntia/lunaris/releases";
pub const ARCHITECTURE_URL: &str = "https://github.com/shuntia/lunaris#architecture";
pub const PLUGINS_URL: &str = "https://github.com/shuntia/lunaris/tree/main/plugins";
pub const DOCS_URL: &str = "https://github.com/shuntia/lunaris/tree/main/docs";

pub const BACKDROP_IMAGE: &str = "/assets/starry_sky.svg";

/// Log level the site boots with. Debug builds keep the per-pointer hero
/// telemetry; release builds stop at info.
pub fn log_level(debug_build: bool) -> log::Level {
    if debug_build {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_builds_keep_debug_telemetry() {
        assert_eq!(log_level(true), log::Level::Debug);
    }

    #[test]
    fn release_builds_filter_debug_telemetry() {
        assert!(log_level(false) < log::Level::Debug);
    }
}
