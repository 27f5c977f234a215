use std::path::Path;

use anyhow::{bail, Context};
use confique::Config as DeriveConfig;

#[derive(Debug, DeriveConfig)]
pub struct Config {
    /// Input nested deeper than this is rejected before parsing, since the parser recurses once
    /// per level. Set to 0 to disable the check.
    #[config(default = 128, env = "JSONVIEW_MAX_NESTING_DEPTH")]
    pub max_nesting_depth: usize,

    /// Accept whitespace after the top-level value. Anything else after it is always an error.
    #[config(default = true)]
    pub allow_trailing_whitespace: bool,

    /// Warn about keys that appear more than once in the same object.
    #[config(default = true)]
    pub lint_duplicate_keys: bool,

    /// Warn about `""` keys.
    #[config(default = true)]
    pub lint_empty_keys: bool,

    /// Labels in the outline longer than this many characters are cut short with `...`.
    /// 0 means no limit.
    #[config(default = 80)]
    pub outline_width: usize,
}

/// Loads the configuration from the environment and, if given, a TOML file. The file has to
/// exist; an absent `--config` just means defaults.
pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut builder = Config::builder().env();
    if let Some(path) = path {
        if !path.is_file() {
            bail!("config file `{}` does not exist", path.display());
        }
        builder = builder.file(path);
    }
    builder.load().context("failed to load configuration")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = load(None).unwrap();
        assert!(config.allow_trailing_whitespace);
        assert!(config.lint_duplicate_keys);
        assert!(config.lint_empty_keys);
        assert_eq!(config.outline_width, 80);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "max_nesting_depth = 4\nlint_empty_keys = false").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.max_nesting_depth, 4);
        assert!(!config.lint_empty_keys);
        assert!(config.lint_duplicate_keys);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }
}
