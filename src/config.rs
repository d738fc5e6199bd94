// SPDX-License-Identifier: MIT

//! CLI configuration
//!
//! Loaded from an optional YAML file; every key has a default.

use crate::error::{Result, StoreError};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration for the `wheredb` binary
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Record file loaded at startup
    pub data_file: PathBuf,
    /// Where the `json` output format writes results
    pub json_output: PathBuf,
    /// Format used when the user just presses enter
    pub default_format: OutputFormat,
    /// Fields shown by the `simple` output format, in order
    pub summary_fields: Vec<SummaryField>,
    /// Example query shown in the prompt
    pub example_query: String,
}

/// A labelled field in the simple output format
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SummaryField {
    pub label: String,
    pub field: String,
}

impl SummaryField {
    pub fn new(label: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field: field.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("Dataset/vessels.json"),
            json_output: PathBuf::from("results.json"),
            default_format: OutputFormat::Simple,
            summary_fields: vec![
                SummaryField::new("Name", "Z01_CURRENT_NAME"),
                SummaryField::new("Type", "P36_VESSEL_TYPE"),
            ],
            example_query: "WHERE Z13_STATUS_CODE = 4 AND BUILDER_GROUP = 'Guoyu Logistics'"
                .to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
