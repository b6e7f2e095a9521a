//! Notification (connection) resource.
//!
//! Notifications are plugin-backed like download clients but take no
//! `forceSave` flag.

use serde::{Deserialize, Serialize};

use crate::rest::fields::{deserialize_null_default, is_zero, FieldInput, FieldOutput};
use crate::rest::{ResourceName, RestResource};

/// A notification as sent on add and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationInput {
    pub on_grab: bool,
    pub on_health_issue: bool,
    pub on_health_restored: bool,
    pub on_application_update: bool,
    pub supports_on_grab: bool,
    pub include_manual_grabs: bool,
    pub supports_on_health_issue: bool,
    pub supports_on_health_restored: bool,
    pub include_health_warnings: bool,
    pub supports_on_application_update: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub name: String,
    pub implementation_name: String,
    pub implementation: String,
    pub config_contract: String,
    pub info_link: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tags: Vec<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub fields: Vec<FieldInput>,
}

/// A notice the backend attaches to a notification plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationMessage {
    pub message: String,
    #[serde(rename = "type")]
    pub message_type: String,
}

/// A notification as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationOutput {
    pub on_grab: bool,
    pub on_health_issue: bool,
    pub on_health_restored: bool,
    pub on_application_update: bool,
    pub supports_on_grab: bool,
    pub include_manual_grabs: bool,
    pub supports_on_health_issue: bool,
    pub supports_on_health_restored: bool,
    pub include_health_warnings: bool,
    pub supports_on_application_update: bool,
    pub id: i64,
    pub name: String,
    pub implementation_name: String,
    pub implementation: String,
    pub config_contract: String,
    pub info_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<NotificationMessage>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tags: Vec<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub fields: Vec<FieldOutput>,
}

impl RestResource for NotificationOutput {
    type Input = NotificationInput;

    const NAME: &'static str = "Notification";
    const PATH: ResourceName = ResourceName::new("notification");

    fn input_id(input: &NotificationInput) -> i64 {
        input.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_decodes_message_and_hidden_field() {
        let output: NotificationOutput = serde_json::from_str(
            r#"{
                "onApplicationUpdate": true,
                "supportsOnHealthIssue": true,
                "name": "Test",
                "fields": [
                    {"order": 0, "name": "path", "value": "/scripts/prowlarr.sh", "type": "filePath"},
                    {"order": 1, "name": "arguments", "type": "textbox", "hidden": "hiddenIfNotSet"}
                ],
                "implementation": "CustomScript",
                "message": {"message": "Testing will execute the script", "type": "warning"},
                "tags": [],
                "id": 3
            }"#,
        )
        .unwrap();

        assert_eq!(output.id, 3);
        assert_eq!(output.message.unwrap().message_type, "warning");
        assert!(output.fields[1].value.is_none());
        assert_eq!(output.fields[1].hidden, "hiddenIfNotSet");
    }

    #[test]
    fn test_output_without_fields_key() {
        let output: NotificationOutput = serde_json::from_str(r#"{"id":1,"name":"x"}"#).unwrap();
        assert!(output.fields.is_empty());
        assert!(output.tags.is_empty());
    }

    #[test]
    fn test_input_omits_zero_id() {
        let input = NotificationInput {
            name: "Test".to_string(),
            ..NotificationInput::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.ends_with(r#""tags":[],"fields":[]}"#));
    }
}
