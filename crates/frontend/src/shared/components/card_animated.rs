//! Thaw `Card` with the `card-appear` entrance animation from `styles.css`.
//!
//! Pass increasing `delay_ms` values to a row of cards for a staggered
//! entrance:
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=80>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS class on the card.
    #[prop(optional, into)]
    class: String,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = format!(
        "animation: card-appear 0.28s ease-out {}ms both; {}",
        delay_ms, style
    );

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}
