use crate::shared::icons::icon;
use leptos::prelude::*;

/// Card whose body folds away behind its header.
#[component]
pub fn CollapsibleSection(
    #[prop(into)]
    title: String,
    #[prop(optional)]
    icon_name: Option<&'static str>,
    #[prop(optional)]
    default_open: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let open = RwSignal::new(default_open);

    view! {
        <section class=move || if open.get() { "collapsible collapsible--open" } else { "collapsible" }>
            <button
                type="button"
                class="collapsible__header"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="collapsible__title">
                    {icon_name.map(icon)}
                    <span>{title}</span>
                </span>
                {move || if open.get() { icon("chevron-up") } else { icon("chevron-down") }}
            </button>
            {move || open.get().then(|| view! {
                <div class="collapsible__body">{children()}</div>
            })}
        </section>
    }
}
