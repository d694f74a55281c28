//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variable overriding `api.base_url`
pub const BASE_URL_ENV: &str = "WHALLEY_API_BASE_URL";

const PROJECT_FILES: [&str; 2] = ["whalley.toml", ".whalley.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `WHALLEY_API_BASE_URL` environment variable
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./whalley.toml` or `./.whalley.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/whalley/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        Self::file_figment(
            global.as_deref(),
            project.as_deref(),
            config_path.map(PathBuf::as_path),
        )?
        .merge(Env::raw().only(&[BASE_URL_ENV]).map(|_| "api.base_url".into()))
        .extract()
        .map_err(Box::new)
    }

    /// Merge defaults with the given files, lowest priority first
    fn file_figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Figment, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            // A missing explicit file is an error, unlike the discovered ones
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/whalley/config.toml` (or the platform
    /// equivalent), whether or not the file exists.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("whalley").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if std::env::var_os(BASE_URL_ENV).is_some() {
            println!("  [FOUND] Env:     {}", BASE_URL_ENV);
        } else {
            println!("  [     ] Env:     {}", BASE_URL_ENV);
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./whalley.toml or ./.whalley.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use whalley_domain::OutputFormat;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn extract(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> FileConfig {
        ConfigLoader::file_figment(global, project, explicit)
            .unwrap()
            .extract()
            .unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.preview.limit, 3);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("whalley"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        assert_eq!(extract(None, None, None), FileConfig::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = write(
            &dir,
            "global.toml",
            "[api]\nbase_url = \"http://global\"\ntimeout_seconds = 30\n",
        );
        let project = write(&dir, "whalley.toml", "[api]\nbase_url = \"http://project\"\n");

        let config = extract(Some(&global), Some(&project), None);
        assert_eq!(config.api.base_url, "http://project");
        // Keys absent from the higher file keep the lower value
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn test_explicit_overrides_project() {
        let dir = TempDir::new().unwrap();
        let project = write(&dir, "whalley.toml", "[output]\nformat = \"table\"\n");
        let explicit = write(&dir, "custom.toml", "[output]\nformat = \"json\"\n");

        let config = extract(None, Some(&project), Some(&explicit));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        let dir = TempDir::new().unwrap();
        let explicit = write(
            &dir,
            "custom.toml",
            "[api]\nbase_url = \"http://from-file\"\ntimeout_seconds = 30\n",
        );

        // No other test reads or writes this variable
        unsafe { std::env::set_var(BASE_URL_ENV, "http://from-env:9999") };
        let from_env = ConfigLoader::load(None);
        let over_file = ConfigLoader::load(Some(&explicit));
        unsafe { std::env::remove_var(BASE_URL_ENV) };

        assert_eq!(from_env.unwrap().api.base_url, "http://from-env:9999");
        let config = over_file.unwrap();
        assert_eq!(config.api.base_url, "http://from-env:9999");
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ConfigLoader::file_figment(None, None, Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_value_is_error() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.toml", "[preview]\nlimit = \"three\"\n");
        let result: Result<FileConfig, _> = ConfigLoader::file_figment(None, None, Some(&bad))
            .unwrap()
            .extract();
        assert!(result.is_err());
    }
}
