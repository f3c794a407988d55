pub mod aggregate;

pub use aggregate::{AiReply, ChatMessage, ChatRequest, ChatRole, ExplainRequest, QuestionRequest};
