//! Page composition and the surrounding HTML document.

use crate::content::{FooterLinks, SECTION_ORDER, Section};
use crate::sections::{CallToAction, Features, Footer, Hero};
use crate::styles::{CSP, LANDING_CSS};
use leptos::prelude::*;

/// Document `<title>`.
pub const PAGE_TITLE: &str = "Codebase Onboarding - Understand Any Codebase in Minutes";

/// `<meta name="description">` content.
pub const PAGE_DESCRIPTION: &str = "AI-powered codebase analysis that helps engineers onboard faster.";

/// The landing page body: every section, in [`SECTION_ORDER`].
#[component]
pub fn LandingPage(
    /// Footer link targets
    #[prop(optional)]
    links: FooterLinks,
) -> impl IntoView {
    view! {
        <main class="landing">
            {SECTION_ORDER
                .into_iter()
                .map(|section| match section {
                    Section::Hero => view! { <Hero /> }.into_any(),
                    Section::Features => view! { <Features /> }.into_any(),
                    Section::CallToAction => view! { <CallToAction /> }.into_any(),
                    Section::Footer => view! { <Footer links=links.clone() /> }.into_any(),
                })
                .collect::<Vec<_>>()}
        </main>
    }
}

/// The complete HTML document around [`LandingPage`].
#[component]
pub fn LandingDocument(
    #[prop(optional)]
    links: FooterLinks,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=PAGE_DESCRIPTION />
                <title>{PAGE_TITLE}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingPage links=links />
            </body>
        </html>
    }
}
