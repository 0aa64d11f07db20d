//! Builds the configuration store from command-line sources

use std::path::Path;
use std::sync::Arc;

use uiconf_core::AppContext;
use uiconf_meta::UserConfig;
use uiconf_platform::StaticPlatform;

use crate::cli::SourceArgs;
use crate::error::{CliError, Result};

/// Load the user file, assemble the platform and build an isolated store.
pub fn load(args: &SourceArgs) -> Result<AppContext> {
    let user = match &args.config {
        Some(path) => load_user_config(path)?,
        None => UserConfig::new(),
    };

    let mut builder = StaticPlatform::builder()
        .platforms(args.platforms.iter().cloned())
        .with_builtin_configs();
    if let Some(url) = &args.url {
        builder = builder.url(url)?;
    }
    let platform = builder.build();

    tracing::debug!(
        platforms = ?args.platforms,
        user_keys = user.settings.len(),
        user_platforms = user.platforms.len(),
        "Loaded configuration sources"
    );
    Ok(AppContext::isolated(user, Some(Arc::new(platform))))
}

/// Parse a user configuration file, picking the format by extension.
pub fn load_user_config(path: &Path) -> Result<UserConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let user = if is_toml {
        UserConfig::from_toml_str(&content)?
    } else {
        UserConfig::from_json_str(&content)?
    };
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn sources(platforms: &[&str]) -> SourceArgs {
        SourceArgs {
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            config: None,
            url: None,
        }
    }

    #[test]
    fn picks_format_by_extension() {
        let dir = tempdir().unwrap();
        let toml_path = dir.path().join("user.TOML");
        fs::write(&toml_path, "spinner = \"dots\"\n").unwrap();
        let json_path = dir.path().join("user.conf");
        fs::write(&json_path, r#"{"spinner": "lines"}"#).unwrap();

        let from_toml = load_user_config(&toml_path).unwrap();
        let from_json = load_user_config(&json_path).unwrap();
        assert_eq!(from_toml.to_json(), json!({ "spinner": "dots" }));
        assert_eq!(from_json.to_json(), json!({ "spinner": "lines" }));
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_user_config(Path::new("/nonexistent/uiconf.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/uiconf.json"));
    }

    #[test]
    fn load_uses_builtin_platform_defaults() {
        let context = load(&sources(&["mobile", "android"])).unwrap();
        assert_eq!(context.config().get("activator").unwrap(), json!("ripple"));
        assert_eq!(context.config().get_number("keyboardHeight").unwrap(), 300.0);
    }

    #[test]
    fn load_applies_url_overrides() {
        let mut args = sources(&["core"]);
        args.url = Some("https://app.test/#/home?vmSpinner=dots".to_string());

        let context = load(&args).unwrap();
        assert_eq!(context.config().get("spinner").unwrap(), json!("dots"));
    }

    #[test]
    fn load_rejects_malformed_url() {
        let mut args = sources(&["core"]);
        args.url = Some("not a url".to_string());
        assert!(matches!(load(&args), Err(CliError::Platform(_))));
    }
}
