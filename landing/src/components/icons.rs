//! Inline SVG icons for the feature grid.
//!
//! Outline icons drawn on a 24x24 grid with a 2px round stroke (Lucide
//! geometry). Each shape is flattened into a single path so [`Icon`] stays a
//! one-element SVG.

use crate::content::IconId;
use leptos::prelude::*;

/// Renders an inline stroke icon.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon icon=IconId::Network class="feature-icon" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    icon: IconId,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=icon.name()
            aria-hidden="true"
        >
            <path d=icon_path(icon)></path>
        </svg>
    }
}

/// Path data for an icon.
pub const fn icon_path(id: IconId) -> &'static str {
    match id {
        IconId::MessageSquare => ICON_MESSAGE_SQUARE,
        IconId::Network => ICON_NETWORK,
        IconId::GitBranch => ICON_GIT_BRANCH,
        IconId::Code2 => ICON_CODE_2,
    }
}

/// Speech bubble.
pub const ICON_MESSAGE_SQUARE: &str =
    "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z";

/// Three boxes joined by a bracket.
pub const ICON_NETWORK: &str = "M17 16h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1h-4a1 1 0 0 1-1-1v-4a1 1 0 0 1 1-1z\
M3 16h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1v-4a1 1 0 0 1 1-1z\
M10 2h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1h-4a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1z\
M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3M12 12V8";

/// Trunk with a merged branch.
pub const ICON_GIT_BRANCH: &str = "M6 3v12\
M15 6a3 3 0 1 0 6 0a3 3 0 1 0-6 0\
M3 18a3 3 0 1 0 6 0a3 3 0 1 0-6 0\
M18 9a9 9 0 0 1-9 9";

/// Angle brackets around a slash.
pub const ICON_CODE_2: &str = "m18 16 4-4-4-4m-12 0-4 4 4 4m8.5-12-5 16";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn every_icon_has_path_data() {
        for id in [
            IconId::MessageSquare,
            IconId::Network,
            IconId::GitBranch,
            IconId::Code2,
        ] {
            assert!(icon_path(id).starts_with(['M', 'm']), "{id:?}");
        }
    }

    #[test]
    fn renders_named_svg() {
        let html = view! { <Icon icon=IconId::GitBranch /> }.to_html();
        assert!(html.starts_with("<svg"));
        assert!(html.contains("data-icon=\"git-branch\""));
        assert!(html.contains(ICON_GIT_BRANCH));
    }
}
