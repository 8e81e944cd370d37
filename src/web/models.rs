use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inbound chat body. `message` is read leniently: absent, null or
/// non-string values all become an empty string. The body itself must
/// still be a JSON object.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl<'de> Deserialize<'de> for ChatRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = match Value::deserialize(deserializer)? {
            Value::Object(object) => object,
            other => {
                return Err(serde::de::Error::custom(format!(
                    "expected a JSON object, found {}",
                    kind_of(&other)
                )))
            }
        };

        let message = match object.remove("message") {
            Some(Value::String(message)) => message,
            _ => String::new(),
        };

        Ok(Self { message })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> serde_json::Result<ChatRequest> {
        serde_json::from_str(body)
    }

    #[test]
    fn message_is_read_when_present() {
        assert_eq!(parse(r#"{"message":"hi"}"#).unwrap().message, "hi");
    }

    #[test]
    fn missing_or_odd_message_becomes_empty() {
        assert_eq!(parse("{}").unwrap().message, "");
        assert_eq!(parse(r#"{"message":null}"#).unwrap().message, "");
        assert_eq!(parse(r#"{"message":42}"#).unwrap().message, "");
        assert_eq!(parse(r#"{"message":["a"]}"#).unwrap().message, "");
        assert_eq!(parse(r#"{"other":"x"}"#).unwrap().message, "");
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(parse(r#"["hi"]"#).is_err());
        assert!(parse(r#""hi""#).is_err());
        assert!(parse("null").is_err());
        assert!(parse(r#"{"message":"#).is_err());
    }

    #[test]
    fn roles_use_lowercase_wire_names() {
        let message = Message {
            role: Role::System,
            content: "x".into(),
        };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({ "role": "system", "content": "x" })
        );
    }
}
