use std::path::{Path, PathBuf};

use crate::error::CosmicError;

/// Credentials for a Cosmic bucket.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub bucket_slug: String,
    pub read_key: String,
    /// Held for parity with the deployment contract; the read operations
    /// never send it.
    pub write_key: Option<String>,
}

/// Where a credential field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each credential field.
#[derive(Debug)]
pub struct CredentialSources {
    pub bucket_slug: CredentialSource,
    pub read_key: CredentialSource,
    pub write_key: CredentialSource,
}

/// TOML config file format.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    cosmic: Option<CosmicConfig>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct CosmicConfig {
    bucket_slug: Option<String>,
    read_key: Option<String>,
    write_key: Option<String>,
}

impl Credentials {
    /// Load credentials from environment variables or the config file.
    ///
    /// Priority: env vars > config file.
    /// Required: bucket_slug, read_key.
    /// Optional: write_key.
    pub fn load() -> Result<Self, CosmicError> {
        let config = load_config_file();

        let bucket_slug = std::env::var("COSMIC_BUCKET_SLUG")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.bucket_slug.clone()))
            .ok_or_else(|| {
                CosmicError::config(
                    "Missing bucket slug. Set COSMIC_BUCKET_SLUG env var or add to config file",
                )
            })?;

        let read_key = std::env::var("COSMIC_READ_KEY")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.read_key.clone()))
            .ok_or_else(|| {
                CosmicError::config(
                    "Missing read key. Set COSMIC_READ_KEY env var or add to config file",
                )
            })?;

        let write_key = std::env::var("COSMIC_WRITE_KEY")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.write_key.clone()));

        Ok(Self {
            bucket_slug,
            read_key,
            write_key,
        })
    }
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gamehub").join("credentials.toml"))
}

/// Save credentials to the config file, creating parent directories as
/// needed. Returns the path the file was written to.
pub fn save_to_file(creds: &Credentials) -> Result<PathBuf, CosmicError> {
    let path = config_path()
        .ok_or_else(|| CosmicError::config("Could not determine config directory"))?;
    write_config_file(creds, &path)?;
    Ok(path)
}

/// Determine where each credential field is coming from.
pub fn credential_sources() -> CredentialSources {
    let config = load_config_file();

    let bucket_slug = if std::env::var("COSMIC_BUCKET_SLUG").is_ok() {
        CredentialSource::EnvVar("COSMIC_BUCKET_SLUG")
    } else if config
        .as_ref()
        .and_then(|c| c.bucket_slug.as_ref())
        .is_some()
    {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    let read_key = if std::env::var("COSMIC_READ_KEY").is_ok() {
        CredentialSource::EnvVar("COSMIC_READ_KEY")
    } else if config.as_ref().and_then(|c| c.read_key.as_ref()).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    let write_key = if std::env::var("COSMIC_WRITE_KEY").is_ok() {
        CredentialSource::EnvVar("COSMIC_WRITE_KEY")
    } else if config.as_ref().and_then(|c| c.write_key.as_ref()).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    CredentialSources {
        bucket_slug,
        read_key,
        write_key,
    }
}

fn load_config_file() -> Option<CosmicConfig> {
    let path = config_path()?;
    read_config_file(&path)
}

fn read_config_file(path: &Path) -> Option<CosmicConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.cosmic
}

fn write_config_file(creds: &Credentials, path: &Path) -> Result<(), CosmicError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ConfigFile {
        cosmic: Some(CosmicConfig {
            bucket_slug: Some(creds.bucket_slug.clone()),
            read_key: Some(creds.read_key.clone()),
            write_key: creds.write_key.clone(),
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| CosmicError::config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(path, toml_str)?;
    Ok(())
}
