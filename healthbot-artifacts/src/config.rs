use std::{env, path::PathBuf};

use dotenv::dotenv;
use log::warn;

use crate::source::{self, ArtifactSource, Unconfigured};

pub const ARTIFACT_URL_VAR: &str = "HEALTHBOT_ARTIFACT_URL";
pub const ARTIFACT_DIR_VAR: &str = "HEALTHBOT_ARTIFACT_DIR";
const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL the artifact files are served under. Only needed when a file is missing.
    pub artifact_url: Option<String>,
    pub artifact_dir: PathBuf,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_vars(env::var(ARTIFACT_URL_VAR).ok(), env::var(ARTIFACT_DIR_VAR).ok())
    }

    fn from_vars(artifact_url: Option<String>, artifact_dir: Option<String>) -> Self {
        Self {
            artifact_url: artifact_url.filter(|url| !url.trim().is_empty()),
            artifact_dir: artifact_dir
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_DIR)),
        }
    }

    pub fn source(&self) -> Box<dyn ArtifactSource> {
        match &self.artifact_url {
            Some(url) => Box::new(source::create(url.clone())),
            None => {
                warn!(
                    "{} is not set, missing artifacts cannot be downloaded",
                    ARTIFACT_URL_VAR
                );
                Box::new(Unconfigured)
            }
        }
    }
}
