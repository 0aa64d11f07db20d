//! Built-in platform defaults
//!
//! Default settings for the platform identifiers a detection layer is
//! expected to report. Each entry names the mode the platform starts in.

use uiconf_meta::keys::{ACTIVATOR, MODE, SWIPE_BACK_ENABLED};
use uiconf_meta::{PlatformConfig, Settings};

/// Number of built-in platform entries.
pub const BUILTIN_PLATFORM_COUNT: usize = 5;

/// Returns all built-in platform configs as `(id, config)` pairs.
pub fn builtin_platform_configs() -> Vec<(&'static str, PlatformConfig)> {
    vec![
        (
            "core",
            Settings::new()
                .with(MODE, "md")
                .with("keyboardHeight", 290)
                .into(),
        ),
        ("mobile", PlatformConfig::default()),
        (
            "ios",
            Settings::new()
                .with(MODE, "ios")
                .with(SWIPE_BACK_ENABLED, true)
                .with("autoFocusAssist", "delay")
                .with("hoverCSS", false)
                .with("keyboardHeight", 250)
                .into(),
        ),
        (
            "android",
            Settings::new()
                .with(MODE, "md")
                .with(ACTIVATOR, "ripple")
                .with("autoFocusAssist", "immediate")
                .with("hoverCSS", false)
                .with("keyboardHeight", 300)
                .into(),
        ),
        (
            "windows",
            Settings::new()
                .with(MODE, "wp")
                .with("autoFocusAssist", "immediate")
                .with("hoverCSS", false)
                .into(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count_matches() {
        assert_eq!(builtin_platform_configs().len(), BUILTIN_PLATFORM_COUNT);
    }

    #[test]
    fn each_mode_is_a_builtin_mode() {
        let modes = uiconf_meta::ModeRegistry::with_builtins();
        for (id, config) in builtin_platform_configs() {
            if let Some(mode) = config.mode() {
                assert!(modes.contains(mode), "{id} names unknown mode {mode}");
            }
        }
    }
}
