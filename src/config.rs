//! Card configuration.
//!
//! The host's dashboard store owns the configuration; this crate receives a
//! copy, validates it when the viewer is configured, and hands edited copies
//! back through the editor. An absent `run_id` is omitted from the
//! serialized form entirely rather than stored as an empty string.

use crate::error::{CardError, Result};
use serde::{Deserialize, Serialize};

/// Run id used by the card picker preview before the user configures one.
pub const STUB_RUN_ID: &str = "example_run_id";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl CardConfig {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: Some(run_id.into()),
        }
    }

    /// Stub configuration shown in the host's card picker.
    pub fn stub() -> Self {
        Self::new(STUB_RUN_ID)
    }

    /// Parse and validate a configuration object handed over by the host's
    /// dashboard store. This is the viewer's config-set entry point: a
    /// malformed object or missing `run_id` is rejected here and surfaced
    /// by the host's configuration UI.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: CardConfig = serde_json::from_value(value)?;
        config.validated()?;
        Ok(config)
    }

    /// Validate the configuration the way the viewer does at config-set
    /// time. A missing or empty `run_id` is rejected; the host surfaces the
    /// error through its own configuration UI.
    pub fn validated(&self) -> Result<&str> {
        match self.run_id.as_deref() {
            Some(run_id) if !run_id.is_empty() => Ok(run_id),
            _ => Err(CardError::MissingRunId),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_accepts_non_empty_run_id() {
        let config = CardConfig::new("run1");
        assert_eq!(config.validated().unwrap(), "run1");
    }

    #[test]
    fn test_validated_rejects_missing_run_id() {
        let config = CardConfig::default();
        assert!(matches!(config.validated(), Err(CardError::MissingRunId)));
    }

    #[test]
    fn test_validated_rejects_empty_run_id() {
        let config = CardConfig::new("");
        assert!(matches!(config.validated(), Err(CardError::MissingRunId)));
    }

    #[test]
    fn test_absent_run_id_is_omitted_from_serialized_form() {
        let json = serde_json::to_string(&CardConfig::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_config_round_trips() {
        let config = CardConfig::new("tent_a");
        let json = serde_json::to_string(&config).unwrap();
        let back: CardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_value_accepts_valid_object() {
        let config = CardConfig::from_value(serde_json::json!({ "run_id": "run1" })).unwrap();
        assert_eq!(config.run_id.as_deref(), Some("run1"));
    }

    #[test]
    fn test_from_value_rejects_missing_run_id() {
        assert!(matches!(
            CardConfig::from_value(serde_json::json!({})),
            Err(CardError::MissingRunId)
        ));
    }

    #[test]
    fn test_from_value_rejects_malformed_object() {
        assert!(matches!(
            CardConfig::from_value(serde_json::json!({ "run_id": 42 })),
            Err(CardError::Json(_))
        ));
    }

    #[test]
    fn test_stub_config() {
        assert_eq!(CardConfig::stub().run_id.as_deref(), Some("example_run_id"));
    }
}
