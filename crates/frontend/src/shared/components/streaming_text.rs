//! Progressive text display for AI output.
//!
//! While the source is still streaming the cumulative text is shown as-is
//! with a blinking cursor. Once it settles the remainder is typed out one
//! character at a time and `on_complete` fires once.

use crate::shared::markup::{segments, Segment};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Milliseconds per typed character.
pub const DEFAULT_TYPING_SPEED_MS: u32 = 10;

/// Byte offsets at which each successive character of `text` ends, skipping
/// everything up to `from`. A `from` that is not a prefix boundary restarts
/// at zero.
fn typing_steps(text: &str, from: usize) -> Vec<usize> {
    let from = if text.is_char_boundary(from) { from } else { 0 };
    text.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .filter(|end| *end > from)
        .collect()
}

/// What the display should do for a new `(text, is_streaming)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypingPlan {
    /// Show the cumulative text as-is.
    Mirror,
    /// Nothing to show; `on_complete` does not fire.
    Clear,
    /// Type the text out from byte `from`, clearing first when `restart` is set.
    Type { from: usize, restart: bool },
}

fn plan_typing(full: &str, shown: &str, streaming: bool) -> TypingPlan {
    if streaming {
        TypingPlan::Mirror
    } else if full.is_empty() {
        TypingPlan::Clear
    } else if full.starts_with(shown) {
        TypingPlan::Type {
            from: shown.len(),
            restart: false,
        }
    } else {
        TypingPlan::Type {
            from: 0,
            restart: true,
        }
    }
}

fn render_segments(text: &str) -> impl IntoView {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => view! { <span>{s}</span> }.into_any(),
            Segment::Bold(s) => view! { <strong>{s}</strong> }.into_any(),
            Segment::LineBreak => view! { <br /> }.into_any(),
        })
        .collect_view()
}

#[component]
pub fn StreamingText(
    #[prop(into)]
    text: Signal<String>,
    /// True while more deltas may still arrive
    #[prop(optional, into)]
    is_streaming: Signal<bool>,
    #[prop(optional)]
    speed_ms: Option<u32>,
    #[prop(optional)]
    on_complete: Option<Callback<()>>,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let speed = speed_ms.unwrap_or(DEFAULT_TYPING_SPEED_MS);
    let shown = RwSignal::new(String::new());
    // Bumped on every source change; a typing loop stops once it is stale.
    let generation = StoredValue::new(0u64);
    let completed = StoredValue::new(false);

    Effect::new(move |_| {
        let full = text.get();
        let streaming = is_streaming.get();

        generation.update_value(|g| *g += 1);
        let my_generation = generation.get_value();

        let plan = plan_typing(&full, &shown.get_untracked(), streaming);
        let start = match plan {
            TypingPlan::Mirror => {
                completed.set_value(false);
                shown.set(full);
                return;
            }
            TypingPlan::Clear => {
                completed.set_value(false);
                shown.set(String::new());
                return;
            }
            TypingPlan::Type { from, restart } => {
                if restart {
                    completed.set_value(false);
                    shown.set(String::new());
                }
                from
            }
        };
        let steps = typing_steps(&full, start);

        spawn_local(async move {
            for end in steps {
                TimeoutFuture::new(speed).await;
                if generation.try_get_value() != Some(my_generation) {
                    return;
                }
                shown.set(full[..end].to_string());
            }
            if generation.try_get_value() == Some(my_generation) && !completed.get_value() {
                completed.set_value(true);
                if let Some(cb) = on_complete {
                    cb.run(());
                }
            }
        });
    });

    let show_cursor = move || is_streaming.get() || shown.with(|s| s.len()) < text.with(|t| t.len());

    view! {
        <div class=format!("streaming-text {}", class)>
            {move || shown.with(|s| render_segments(s))}
            <Show when=show_cursor>
                <span class="streaming-text__cursor" aria-hidden="true">"▍"</span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_steps_from_start() {
        assert_eq!(typing_steps("abc", 0), vec![1, 2, 3]);
        assert!(typing_steps("", 0).is_empty());
    }

    #[test]
    fn test_typing_steps_resume_and_multibyte() {
        // "₦" is three bytes
        assert_eq!(typing_steps("₦5", 0), vec![3, 4]);
        assert_eq!(typing_steps("₦5", 3), vec![4]);
        assert_eq!(typing_steps("₦5", 1), vec![3, 4]);
        assert!(typing_steps("done", 4).is_empty());
    }

    #[test]
    fn test_plan_typing() {
        assert_eq!(plan_typing("", "", false), TypingPlan::Clear);
        assert_eq!(plan_typing("", "old", false), TypingPlan::Clear);
        assert_eq!(plan_typing("", "", true), TypingPlan::Mirror);
        assert_eq!(plan_typing("abc", "ab", true), TypingPlan::Mirror);
        assert_eq!(
            plan_typing("abcd", "ab", false),
            TypingPlan::Type { from: 2, restart: false }
        );
        assert_eq!(
            plan_typing("xyz", "ab", false),
            TypingPlan::Type { from: 0, restart: true }
        );
    }
}
