use super::types::{Config, AUTH_TOKEN_KEY_NAME};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const CONFIG_PATH: &str = "config.json";

/// Persistent credential storage. Clones share the same token.
#[derive(Clone, Debug)]
pub struct Repository {
    token: Arc<Mutex<Option<String>>>,
    directory: Option<PathBuf>,
}

impl Default for Repository {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Repository {
    /// Storage in the platform config directory
    pub fn new() -> Result<Self, String> {
        Ok(Self::at(data_directory()?))
    }

    /// Storage in the given directory
    pub fn at(directory: PathBuf) -> Self {
        let token = read(&directory, &token_file())
            .map_err(|e| log::error!("Could not load token: {e}"))
            .ok()
            .flatten();
        Self {
            token: Arc::new(Mutex::new(token)),
            directory: Some(directory),
        }
    }

    /// Storage that forgets everything once dropped
    pub fn in_memory() -> Self {
        Self {
            token: Arc::default(),
            directory: None,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    pub fn save_token(&self, token: &str) {
        match self.token.lock() {
            Ok(mut current) => *current = Some(token.to_string()),
            Err(e) => {
                log::error!("Token Data Error: {e:?}");
                return;
            }
        }
        if let Some(ref directory) = self.directory {
            if let Err(e) = write(directory, &token_file(), &token) {
                log::error!("Could not save token: {e}");
            }
        }
    }

    pub fn drop_token(&self) {
        match self.token.lock() {
            Ok(mut current) => *current = None,
            Err(e) => {
                log::error!("Token Data Error: {e:?}");
                return;
            }
        }
        if let Some(ref directory) = self.directory {
            let path = directory.join(token_file());
            if path.exists() {
                if let Err(e) = std::fs::remove_file(&path) {
                    log::error!("Could not remove {}: {e:?}", path.display());
                }
            }
        }
    }

    /// The stored config, or the defaults if there is none
    pub fn config(&self) -> Config {
        let Some(ref directory) = self.directory else {
            return Config::default();
        };
        match read(directory, CONFIG_PATH) {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                log::error!("Could not load config: {e}");
                Config::default()
            }
        }
    }
}

fn token_file() -> String {
    format!("{AUTH_TOKEN_KEY_NAME}.json")
}

fn read<T: DeserializeOwned>(directory: &std::path::Path, name: &str) -> Result<Option<T>, String> {
    let data_path = directory.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(directory: &std::path::Path, name: &str, value: &T) -> Result<(), String> {
    let data_path = directory.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> Result<PathBuf, String> {
    use directories_next::ProjectDirs;
    let proj_dirs = ProjectDirs::from("com", "pages-academy", "six-cities")
        .ok_or_else(|| "Couldn't find a folder to save data".to_string())?;
    let dirs = proj_dirs.config_dir().to_path_buf();
    if !dirs.exists() {
        std::fs::create_dir_all(&dirs)
            .map_err(|e| format!("Could not create directory {}: {e:?}", dirs.display()))?;
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_directory(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "six-cities-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn clones_share_the_token() {
        let repository = Repository::in_memory();
        let interceptor = repository.clone();
        assert_eq!(interceptor.token(), None);
        repository.save_token("secret");
        assert_eq!(interceptor.token().as_deref(), Some("secret"));
        repository.drop_token();
        assert_eq!(interceptor.token(), None);
    }

    #[test]
    fn token_survives_reload() {
        let dir = scratch_directory("token");
        Repository::at(dir.clone()).save_token("secret");
        assert!(dir.join("six-cities-token.json").exists());

        let reloaded = Repository::at(dir.clone());
        assert_eq!(reloaded.token().as_deref(), Some("secret"));

        reloaded.drop_token();
        assert!(!dir.join("six-cities-token.json").exists());
        assert_eq!(Repository::at(dir.clone()).token(), None);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn config_file_is_optional() {
        let dir = scratch_directory("config");
        assert_eq!(Repository::at(dir.clone()).config(), Config::default());

        std::fs::write(
            dir.join(CONFIG_PATH),
            r#"{"base_url": "http://localhost:3000/six-cities"}"#,
        )
        .unwrap();
        let config = Repository::at(dir.clone()).config();
        assert_eq!(config.base_url, "http://localhost:3000/six-cities");
        assert_eq!(config.request_timeout_ms, Config::default().request_timeout_ms);
        let _ = std::fs::remove_dir_all(dir);
    }
}
