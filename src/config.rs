// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::context::AppContext;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_input_file() -> String {
    "Calendar Data.docx".to_string()
}
fn default_two_week_output() -> String {
    "Two Week Calendar.docx".to_string()
}
fn default_upcoming_output() -> String {
    "Upcoming Events.docx".to_string()
}
fn default_major_output() -> String {
    "Major Events.docx".to_string()
}

fn default_skip_events_file() -> String {
    "skip_events.txt".to_string()
}
fn default_skip_events_upcoming_file() -> String {
    "skip_events_upcoming.txt".to_string()
}
fn default_skip_events_major_file() -> String {
    "skip_events_major.txt".to_string()
}
fn default_skip_if_contains_file() -> String {
    "skip_if_contains.txt".to_string()
}

fn default_bulletin_font() -> String {
    "Times New Roman".to_string()
}
fn default_digest_font() -> String {
    "Calibri".to_string()
}
fn default_digest_font_size() -> u32 {
    9
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default = "default_two_week_output")]
    pub two_week_output: String,
    #[serde(default = "default_upcoming_output")]
    pub upcoming_output: String,
    #[serde(default = "default_major_output")]
    pub major_output: String,

    #[serde(default = "default_skip_events_file")]
    pub skip_events_file: String,
    #[serde(default = "default_skip_events_upcoming_file")]
    pub skip_events_upcoming_file: String,
    #[serde(default = "default_skip_events_major_file")]
    pub skip_events_major_file: String,
    #[serde(default = "default_skip_if_contains_file")]
    pub skip_if_contains_file: String,

    #[serde(default = "default_bulletin_font")]
    pub bulletin_font: String,
    #[serde(default = "default_digest_font")]
    pub digest_font: String,
    #[serde(default = "default_digest_font_size")]
    pub digest_font_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            two_week_output: default_two_week_output(),
            upcoming_output: default_upcoming_output(),
            major_output: default_major_output(),
            skip_events_file: default_skip_events_file(),
            skip_events_upcoming_file: default_skip_events_upcoming_file(),
            skip_events_major_file: default_skip_events_major_file(),
            skip_if_contains_file: default_skip_if_contains_file(),
            bulletin_font: default_bulletin_font(),
            digest_font: default_digest_font(),
            digest_font_size: default_digest_font_size(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the context's config directory.
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error naming the path.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        Self::from_toml(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
