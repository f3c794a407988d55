pub mod ai_chat;
pub mod bank_statement;
pub mod tax;
