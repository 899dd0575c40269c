use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

pub(crate) const SETTINGS_SECTION_KEY: &str = "glsl-analyzer";

/// Runtime settings, merged from `initializationOptions` and configuration pushes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerSettings {
    pub logging: LoggingSettings,
}

impl ServerSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    /// Apply a direct or `"glsl-analyzer"`-namespaced payload on top of `self`.
    /// Unknown keys and malformed sections are ignored.
    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<ServerSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged
    }

    fn apply_patch(
        &mut self,
        patch: ServerSettingsPatch,
    ) {
        if let Some(logging) = patch.logging {
            self.logging.apply_patch(logging);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingSettings {
    /// Threshold for messages forwarded to the client, not for the log file.
    pub level: LoggingLevel,
}

impl LoggingSettings {
    fn apply_patch(
        &mut self,
        patch: LoggingSettingsPatch,
    ) {
        if let Some(level) = patch.level {
            self.level = level;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn allows_warn(self) -> bool {
        self >= LoggingLevel::Warn
    }

    pub fn allows_info(self) -> bool {
        self >= LoggingLevel::Info
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ServerSettingsPatch {
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct LoggingSettingsPatch {
    level: Option<LoggingLevel>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());

    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }

    candidates
}

#[cfg(test)]
#[path = "../../tests/src/server/settings_tests.rs"]
mod tests;
