use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// One record for the Datadog HTTP log intake (v1).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogRecord {
    pub message: String,
    pub ddsource: String,
    pub service: String,
    pub hostname: String,
    pub status: Severity,
    /// Comma separated `key:value` pairs.
    pub ddtags: String,
}

/// Joins tags the way the intake expects them.
pub fn format_tags(tags: &[(&str, &str)]) -> String {
    tags.iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags() {
        assert_eq!(
            format_tags(&[("thermostat", "Office"), ("action", "update")]),
            "thermostat:Office,action:update"
        );
        assert_eq!(format_tags(&[]), "");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    }
}
