//! Link styled as a button.

use crate::content::NavAction;
use leptos::prelude::*;

/// Renders a [`NavAction`] as an anchor carrying its button variant.
///
/// Navigation itself is left to the browser and the application router;
/// this only emits the `href`.
#[component]
pub fn NavButton(action: NavAction) -> impl IntoView {
    view! {
        <a href=action.destination.path() class=action.style.class() data-nav="action">
            {action.label}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ButtonStyle, Route};
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn emits_route_and_variant() {
        let action = NavAction {
            label: "View Demo",
            destination: Route::Demo,
            style: ButtonStyle::Outline,
        };
        let html = view! { <NavButton action=action /> }.to_html();

        assert!(html.starts_with("<a"));
        assert!(html.contains("href=\"/demo\""));
        assert!(html.contains("btn-outline"));
        assert!(html.contains(">View Demo</a>"));
    }
}
