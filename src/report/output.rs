// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed reports

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Machine-readable rendering. `None` for [`OutputFormat::Text`], which
    /// goes through the formatter instead.
    pub fn serialize<T: Serialize>(&self, report: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(report)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(report)?)),
        }
    }
}
