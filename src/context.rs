// File: ./src/context.rs
/*! Where a run finds its files.

The `AppContext` trait decides the config directory (config.toml and the
skip lists) and the data directory (input and output documents). Two
implementations exist:

- `StandardContext`: an explicit `--root` gives `<root>/config` and
  `<root>/data`. Without one, documents live in the current directory and
  config comes from the per-user config directory if it has been set up,
  else also from the current directory.
- `TestContext`: a throwaway temp directory, removed on drop.

Nothing here reads environment variables or globals; callers pass the
context explicitly.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn get_data_dir(&self) -> Result<PathBuf>;
    fn get_config_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    /// Resolves a config-relative file (skip lists). Absolute paths pass through.
    fn config_file(&self, name: &str) -> Result<PathBuf> {
        resolve(self.get_config_dir()?, name)
    }

    /// Resolves a data-relative file (documents). Absolute paths pass through.
    fn data_file(&self, name: &str) -> Result<PathBuf> {
        resolve(self.get_data_dir()?, name)
    }
}

fn resolve(base: PathBuf, name: &str) -> Result<PathBuf> {
    let path = Path::new(name);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(base.join(path))
    }
}

// --- Production Implementation ---

#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(path)
    }

    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "stakecal", "stakecal")
    }

    fn current_dir() -> Result<PathBuf> {
        std::env::current_dir().context("Could not determine current directory")
    }
}

impl AppContext for StandardContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return Self::ensure_exists(root.join("data"));
        }
        Self::current_dir()
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return Self::ensure_exists(root.join("config"));
        }
        if let Some(proj) = Self::get_proj_dirs()
            && proj.config_dir().is_dir()
        {
            return Ok(proj.config_dir().to_path_buf());
        }
        Self::current_dir()
    }
}

// --- Test Implementation ---

#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    /// Creates a new TestContext backed by a unique temporary directory.
    pub fn new() -> Self {
        let uuid = uuid::Uuid::new_v4();
        let root = std::env::temp_dir().join(format!("stakecal_test_{}", uuid));
        // Tests will panic if this fails.
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        let p = self.root.join("data");
        std::fs::create_dir_all(&p)?;
        Ok(p)
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        let p = self.root.join("config");
        std::fs::create_dir_all(&p)?;
        Ok(p)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Best-effort cleanup; ignore errors.
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
