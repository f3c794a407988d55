use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A message held in the advisor conversation. Lives only in page state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn user(content: String) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: String) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// `POST /api/ai/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: serde_json::Value,
}

impl ChatRequest {
    pub fn new(message: String) -> Self {
        Self {
            message,
            context: serde_json::Value::Object(Default::default()),
        }
    }
}

/// `POST /api/ai/explain`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub calculation_result: serde_json::Value,
}

/// `POST /api/ai/question`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

/// Reply body shared by the chat, explain and question endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiReply {
    #[serde(alias = "explanation", alias = "answer")]
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_has_empty_context() {
        let value = serde_json::to_value(ChatRequest::new("hi".into())).unwrap();
        assert_eq!(value, json!({ "message": "hi", "context": {} }));
    }

    #[test]
    fn test_reply_aliases() {
        let a: AiReply = serde_json::from_value(json!({ "response": "r" })).unwrap();
        let b: AiReply = serde_json::from_value(json!({ "explanation": "e" })).unwrap();
        assert_eq!(a.response, "r");
        assert_eq!(b.response, "e");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(ChatRole::from_str("assistant"), Ok(ChatRole::Assistant));
        assert!(ChatRole::from_str("system").is_err());
        assert!(ChatMessage::user("q".into()).is_user());
    }
}
