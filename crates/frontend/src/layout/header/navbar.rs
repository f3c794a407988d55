use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/", "Home", "home"),
    ("/calculator", "Calculator", "calculator"),
    ("/bank-statement", "Bank Statement", "file-text"),
    ("/ai-chat", "AI Advisor", "message-square"),
    ("/config", "Config", "settings"),
];

/// Home only matches itself; other links also cover nested paths.
fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{}/", href))
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {NAV_ITEMS.into_iter().map(|(href, title, icon_name)| {
                    let class = move || {
                        if is_active(href, &location.pathname.get()) {
                            "main-nav-bar__link main-nav-bar__link--active"
                        } else {
                            "main-nav-bar__link"
                        }
                    };
                    view! {
                        <li>
                            <A href=href attr:class=class>
                                {icon(icon_name)}
                                <span>{title}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/calculator"));
        assert!(is_active("/calculator", "/calculator"));
        assert!(!is_active("/config", "/configuration"));
    }
}
