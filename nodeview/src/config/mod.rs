mod error;
mod log;

use std::path::{Path, PathBuf};

use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{error::Error, log::LogConfig};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the kubeconfig file used to reach the cluster. When absent,
    /// the standard kube discovery chain applies.
    pub kubeconfig: Option<PathBuf>,

    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Config {
    pub fn search_config_file_path() -> PathBuf {
        let paths = vec![Self::default_path()]
            .into_iter()
            .chain(nodeview_base::fallback_project_config_directories().into_iter().map(
                |mut path| {
                    path.push(nodeview_base::CLI_CONFIG_NAME);
                    path
                },
            ))
            .collect::<Vec<_>>();
        for path in paths {
            let Ok(exists) = path.try_exists() else {
                continue;
            };
            if exists {
                return path;
            }
        }
        Self::default_path()
    }

    #[inline]
    pub fn default_path() -> PathBuf {
        [
            nodeview_base::PROJECT_CONFIG_DIR.to_path_buf(),
            PathBuf::from(nodeview_base::CLI_CONFIG_NAME),
        ]
        .into_iter()
        .collect()
    }

    /// Loads the configuration from `path`, resolving `~`-relative paths in
    /// the `kubeconfig` and log file entries.
    ///
    /// A missing configuration file is not an error; the defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the file exists but cannot be read or parsed, or
    /// if a contained path cannot be resolved.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let path =
                path.as_ref().try_resolve().map(|path| path.to_path_buf()).with_context(|_| {
                    error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() }
                })?;
            if !path.exists() {
                return Ok(Self::default());
            }
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.kubeconfig = Self::resolve_optional_path(config.kubeconfig)?;
        config.log.file_path = Self::resolve_optional_path(config.log.file_path)?;

        Ok(config)
    }

    fn resolve_optional_path(path: Option<PathBuf>) -> Result<Option<PathBuf>, Error> {
        match path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Ok(Some(path)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }

    #[must_use]
    pub fn template_basic() -> Vec<u8> {
        serde_yaml::to_string(&Self::default()).map_or_else(|_| Vec::new(), String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = serde_yaml::from_str("kubeconfig: /etc/kube/config\n")
            .expect("Should parse a minimal config");
        assert_eq!(config.kubeconfig, Some(PathBuf::from("/etc/kube/config")));
        assert!(!config.log.emit_stdout);
    }

    #[test]
    fn test_default_template_parses_back() {
        let template = Config::template_basic();
        let config: Config =
            serde_yaml::from_slice(&template).expect("Default template should be valid YAML");
        assert_eq!(config.kubeconfig, None);
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let config = Config::load("/nonexistent/nodeview/config.yaml")
            .expect("A missing config file should not be an error");
        assert_eq!(config.kubeconfig, None);
    }
}
