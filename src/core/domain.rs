use std::path::{Path, PathBuf};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

pub const DEFAULT_STORE_PATH: &str = "books.txt";
// LMS_STORE_PATH, LMS_STORE, LMS_LOG_LEVEL, LMS_LOG_JSON
pub const ENV_PREFIX: &str = "LMS";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub store: RepositoryStore,
    pub store_path: PathBuf,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            store: RepositoryStore::FlatFile,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            log_level: "warn".to_string(),
            log_json: false,
        }
    }

    // Layers an optional config file and then LMS_* environment variables over the defaults.
    pub fn load(path: Option<&Path>) -> LibraryResult<Self> {
        Configuration::load_from(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: Option<&Path>, env: Environment) -> LibraryResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            // format follows the extension (.json, .toml, ...)
            builder = builder.add_source(File::from(path).required(true));
        }
        let config = builder
            .add_source(env)
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn with_store_path(mut self, path: &Path) -> Self {
        self.store_path = path.to_path_buf();
        self
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use config::{Environment, Map};
    use uuid::Uuid;
    use crate::core::domain::{Configuration, DEFAULT_STORE_PATH, ENV_PREFIX};
    use crate::core::repository::RepositoryStore;

    fn env_of(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new();
        assert_eq!(RepositoryStore::FlatFile, config.store);
        assert_eq!(PathBuf::from(DEFAULT_STORE_PATH), config.store_path);
        assert_eq!("warn", config.log_level.as_str());
        assert!(!config.log_json);
    }

    #[test]
    fn test_should_override_store() {
        let config = Configuration::new()
            .with_store(RepositoryStore::InMemory)
            .with_store_path(Path::new("/tmp/other.txt"));
        assert_eq!(RepositoryStore::InMemory, config.store);
        assert_eq!(PathBuf::from("/tmp/other.txt"), config.store_path);
    }

    #[test]
    fn test_should_load_defaults_without_sources() {
        let config = Configuration::load_from(None, env_of(&[])).expect("should load config");
        assert_eq!(Configuration::new(), config);
    }

    #[test]
    fn test_should_load_partial_json_config() {
        let path = std::env::temp_dir().join(format!("lms-config-{}.json", Uuid::new_v4()));
        std::fs::write(&path, r#"{"store": "InMemory", "log_json": true}"#).expect("should write config");
        let config = Configuration::load_from(Some(path.as_path()), env_of(&[])).expect("should load config");
        let _ = std::fs::remove_file(&path);
        assert_eq!(RepositoryStore::InMemory, config.store);
        assert!(config.log_json);
        assert_eq!(PathBuf::from(DEFAULT_STORE_PATH), config.store_path);
        assert_eq!("warn", config.log_level.as_str());
    }

    #[test]
    fn test_should_layer_env_over_file() {
        let path = std::env::temp_dir().join(format!("lms-config-{}.json", Uuid::new_v4()));
        std::fs::write(&path, r#"{"store_path": "/srv/file.txt", "log_level": "info"}"#).expect("should write config");
        let env = env_of(&[("LMS_STORE_PATH", "/srv/env.txt"), ("LMS_LOG_JSON", "true"), ("OTHER_LOG_LEVEL", "trace")]);
        let config = Configuration::load_from(Some(path.as_path()), env).expect("should load config");
        let _ = std::fs::remove_file(&path);
        assert_eq!(PathBuf::from("/srv/env.txt"), config.store_path);
        assert_eq!("info", config.log_level.as_str());
        assert!(config.log_json);
    }

    #[test]
    fn test_should_fail_missing_config_file() {
        let path = std::env::temp_dir().join(format!("lms-missing-{}.json", Uuid::new_v4()));
        assert!(Configuration::load_from(Some(path.as_path()), env_of(&[])).is_err());
    }

    #[test]
    fn test_should_fail_unknown_store() {
        let res = Configuration::load_from(None, env_of(&[("LMS_STORE", "Dynamo")]));
        assert!(res.is_err());
    }
}
