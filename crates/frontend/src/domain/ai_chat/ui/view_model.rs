//! AI chat - View Model

use super::model::{send_chat, FALLBACK_REPLY, GREETING};
use crate::layout::ToastService;
use contracts::domain::ai_chat::ChatMessage;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct AiChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
}

impl AiChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(vec![ChatMessage::assistant(GREETING.to_string())]),
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }

    /// Quick questions are offered until the user has said anything.
    pub fn only_greeting(&self) -> bool {
        self.messages.with(|m| m.len() == 1)
    }

    pub fn send(&self, toasts: ToastService) {
        let text = self.input.get_untracked().trim().to_string();
        if text.is_empty() || self.is_sending.get_untracked() {
            return;
        }

        let vm = *self;
        vm.input.set(String::new());
        vm.messages.update(|m| m.push(ChatMessage::user(text.clone())));
        vm.is_sending.set(true);

        spawn_local(async move {
            let reply = match send_chat(&text).await {
                Ok(reply) => reply,
                Err(e) => {
                    log::error!("Chat request failed: {}", e);
                    toasts.error(e.user_message("Failed to get AI response"));
                    FALLBACK_REPLY.to_string()
                }
            };
            vm.messages.update(|m| m.push(ChatMessage::assistant(reply)));
            vm.is_sending.set(false);
        });
    }
}

impl Default for AiChatVm {
    fn default() -> Self {
        Self::new()
    }
}
