//! AI chat - View Component

use super::model::QUICK_QUESTIONS;
use super::view_model::AiChatVm;
use crate::layout::use_toasts;
use crate::shared::components::{PageHeader, StreamingText};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn AiChatPage() -> impl IntoView {
    let vm = AiChatVm::new();
    let toasts = use_toasts();
    let messages_end = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message (or the loading bubble) in view.
    Effect::new(move |_| {
        vm.messages.track();
        vm.is_sending.track();
        if let Some(anchor) = messages_end.get() {
            request_animation_frame(move || {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                anchor.scroll_into_view_with_scroll_into_view_options(&options);
            });
        }
    });

    let send = Callback::new(move |_: ()| vm.send(toasts));

    view! {
        <div class="page ai-chat">
            <PageHeader
                title="AI Tax Advisor"
                subtitle="Ask questions about the Nigeria Tax Act 2025 and get instant, accurate answers"
                icon_name="bot"
            >
                {()}
            </PageHeader>

            <div class="chat">
                <div class="chat__messages">
                    <For
                        each=move || vm.messages.get()
                        key=|msg| msg.id
                        let:msg
                    >
                        {{
                            let is_user = msg.is_user();
                            let first = vm.messages.with_untracked(|m| m.first().map(|f| f.id) == Some(msg.id));
                            view! {
                                <div class=if is_user { "chat__row chat__row--user" } else { "chat__row" }>
                                    <div class="chat__avatar">
                                        {if is_user { icon("user") } else { icon("bot") }}
                                    </div>
                                    <div class="chat__bubble">
                                        {if is_user || first {
                                            view! { <p class="chat__text">{msg.content.clone()}</p> }.into_any()
                                        } else {
                                            view! { <StreamingText text=Signal::stored(msg.content.clone()) class="chat__text" /> }.into_any()
                                        }}
                                    </div>
                                </div>
                            }
                        }}
                    </For>
                    <Show when=move || vm.is_sending.get()>
                        <div class="chat__row">
                            <div class="chat__avatar">{icon("bot")}</div>
                            <div class="chat__bubble chat__bubble--loading">
                                <Spinner size=SpinnerSize::Tiny />
                            </div>
                        </div>
                    </Show>
                    <div node_ref=messages_end></div>
                </div>

                <Show when=move || vm.only_greeting()>
                    <div class="chat__quick">
                        <p class="chat__quick-title">"Quick questions:"</p>
                        <Flex gap=FlexGap::Small attr:style="flex-wrap: wrap;">
                            {QUICK_QUESTIONS
                                .into_iter()
                                .map(|q| view! {
                                    <button class="chip" on:click=move |_| vm.input.set(q.to_string())>
                                        {q}
                                    </button>
                                })
                                .collect_view()}
                        </Flex>
                    </div>
                </Show>

                <div class="chat__input">
                    <Textarea
                        value=vm.input
                        placeholder="Ask a question about Nigeria Tax Act 2025..."
                        attr:style="flex: 1; min-height: 60px; resize: none;"
                        disabled=vm.is_sending
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                send.run(());
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.is_sending.get() || vm.input.with(|s| s.trim().is_empty()))
                        on_click=move |_| send.run(())
                    >
                        {icon("send")}
                    </Button>
                </div>
            </div>

            <div class="info-card">
                <p>
                    <strong>"Note: "</strong>
                    "This AI advisor has access to the full Nigeria Tax Act 2025 document and can provide accurate, cited answers based on the actual legislation."
                </p>
            </div>
        </div>
    }
}
