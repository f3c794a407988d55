//! AI chat - Model (API functions)

use crate::shared::http::{post_json, ApiError};
use contracts::domain::ai_chat::{AiReply, ChatRequest};
use contracts::shared::api::ApiEnvelope;

pub const GREETING: &str = "Hello! I'm your AI Tax Advisor. I can help you understand the Nigeria Tax Act 2025, calculate your tax liability, and answer tax-related questions. What would you like to know?";

pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

pub const QUICK_QUESTIONS: [&str; 4] = [
    "What are the tax bands for 2025?",
    "How is rent relief calculated?",
    "What is digital asset ring-fencing?",
    "What deductions can I claim?",
];

pub async fn send_chat(message: &str) -> Result<String, ApiError> {
    let request = ChatRequest::new(message.to_string());
    let envelope: ApiEnvelope<AiReply> = post_json("/api/ai/chat", &request).await?;
    Ok(envelope.data.response)
}
