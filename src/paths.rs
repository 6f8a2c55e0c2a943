// File: src/paths.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

pub struct AppPaths;

impl AppPaths {
    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "eventide", "eventide")
    }

    /// Helper to ensure a directory exists before returning it.
    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(path)
    }

    /// Config directory, honoring the EVENTIDE_TEST_DIR override used by tests.
    pub fn get_config_dir() -> Result<PathBuf> {
        if let Ok(test_dir) = env::var("EVENTIDE_TEST_DIR") {
            return Self::ensure_exists(PathBuf::from(test_dir));
        }

        let proj = Self::get_proj_dirs()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::ensure_exists(proj.config_dir().to_path_buf())
    }

    pub fn get_config_file_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }
}
