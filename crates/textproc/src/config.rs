use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use textproc_config::GlobalArgs;
use textproc_settings::{DEFAULT_CONFIG_FILE, Settings};

/// File settings (explicit `--config`, else `./textproc.toml` if present)
/// with flag overrides applied.
pub(crate) fn resolve_settings(global: &GlobalArgs) -> Result<Settings> {
    let path = match &global.config {
        Some(path) => Some(path.clone()),
        None => discover(Path::new(".")),
    };

    let settings = match path {
        Some(path) => {
            info!(path = %path.display(), "loading settings");
            Settings::from_file(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?
        }
        None => Settings::default(),
    };
    Ok(global.apply_overrides(settings))
}

fn discover(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_finds_default_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(dir.path()).is_none());
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "").unwrap();
        assert_eq!(
            discover(dir.path()),
            Some(dir.path().join(DEFAULT_CONFIG_FILE))
        );
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let global = GlobalArgs {
            config: Some(PathBuf::from("/definitely/not/textproc.toml")),
            ..GlobalArgs::default()
        };
        let err = resolve_settings(&global).unwrap_err();
        assert!(err.to_string().contains("Failed to load settings"));
    }
}
