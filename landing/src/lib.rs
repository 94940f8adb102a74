//! # onboard-landing
//!
//! Leptos SSR renderer for the Codebase Onboarding landing page.
//!
//! The page is static: a hero, a four-card feature grid, a call-to-action
//! band and a footer. All copy and every link target is a constant in
//! [`content`]; the components in [`sections`] turn those records into
//! markup, and [`render_page`] produces a complete HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use onboard_landing::render_page;
//!
//! let html = render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("href=\"/dashboard\""));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - static records, page outline and drift checks
//! - [`components`] - document shell, icons, navigation buttons
//! - [`sections`] - hero, features, call-to-action, footer
//! - [`styles`] - inline CSS and CSP
//!
//! Rendering goes through Leptos 0.8's `RenderHtml::to_html`; there is no
//! reactive runtime and no hydration.

#![warn(missing_docs)]

pub mod components;
#[allow(missing_docs)]
pub mod content;
#[allow(missing_docs)]
pub mod sections;
pub mod styles;

use components::{LandingDocument, LandingPage};
use content::{
    CTA_ROUTES, DOCUMENTATION_LABEL, FEATURE_COUNT, FooterLinks, GITHUB_LABEL, HERO_ROUTES,
    Route, SECTION_ORDER, Section, StructureError, check_actions,
};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page with placeholder footer links.
///
/// Deterministic: every call returns the same string.
pub fn render_page() -> String {
    render_page_with(&FooterLinks::default())
}

/// Render the complete landing page with the given footer link targets.
///
/// # Example
///
/// ```rust
/// use onboard_landing::{render_page_with, content::FooterLinks};
///
/// let links = FooterLinks {
///     github: "https://github.com/example/project".into(),
///     ..Default::default()
/// };
/// let html = render_page_with(&links);
/// assert!(html.contains("https://github.com/example/project"));
/// ```
pub fn render_page_with(links: &FooterLinks) -> String {
    let doc = view! { <LandingDocument links=links.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the `<main>` element, for embedding into another shell.
pub fn render_fragment(links: &FooterLinks) -> String {
    view! { <LandingPage links=links.clone() /> }.to_html()
}

/// Attribute carried by every rendered [`components::NavButton`].
const NAV_ACTION_ATTR: &str = "data-nav=\"action\"";

/// Check rendered markup (document or fragment) against the fixed page
/// structure: section order, hero and call-to-action targets, feature card
/// count and footer links.
///
/// Complements [`content::verify_structure`], which only sees the constants.
///
/// ```rust
/// use onboard_landing::{render_page, verify_rendered};
///
/// assert!(verify_rendered(&render_page()).is_ok());
/// ```
pub fn verify_rendered(html: &str) -> Result<(), StructureError> {
    let mut starts = Vec::with_capacity(SECTION_ORDER.len());
    for section in SECTION_ORDER {
        let marker = format!("data-section=\"{}\"", section.anchor());
        let at = html
            .find(&marker)
            .ok_or(StructureError::MissingSection(section))?;
        starts.push((at, section));
    }
    starts.sort_by_key(|(at, _)| *at);

    let order: Vec<Section> = starts.iter().map(|(_, section)| *section).collect();
    if order != SECTION_ORDER {
        return Err(StructureError::SectionOrder {
            expected: SECTION_ORDER.to_vec(),
            found: order,
        });
    }

    // Regions follow SECTION_ORDER from here on
    let regions: Vec<&str> = starts
        .iter()
        .enumerate()
        .map(|(i, (start, _))| {
            let end = starts.get(i + 1).map_or(html.len(), |(next, _)| *next);
            &html[*start..end]
        })
        .collect();
    let (hero, features, cta, footer) = (regions[0], regions[1], regions[2], regions[3]);

    check_actions(
        Section::Hero,
        &nav_routes(Section::Hero, hero)?,
        &HERO_ROUTES,
    )?;
    check_actions(
        Section::CallToAction,
        &nav_routes(Section::CallToAction, cta)?,
        &CTA_ROUTES,
    )?;

    let cards = features.matches("class=\"feature-card\"").count();
    if cards != FEATURE_COUNT {
        return Err(StructureError::FeatureCount(cards));
    }

    let link_count = footer.matches("class=\"footer-link\"").count();
    let labels: Vec<&'static str> = [GITHUB_LABEL, DOCUMENTATION_LABEL]
        .into_iter()
        .filter(|label| footer.contains(&format!(">{label}</a>")))
        .collect();
    if link_count != 2 || labels.len() != 2 {
        return Err(StructureError::FooterLinks { found: labels });
    }

    Ok(())
}

/// Routes of the navigation buttons inside one rendered region, in order.
fn nav_routes(section: Section, region: &str) -> Result<Vec<Route>, StructureError> {
    region
        .split("<a ")
        .skip(1)
        .filter_map(|rest| rest.split_once('>').map(|(attrs, _)| attrs))
        .filter(|attrs| attrs.contains(NAV_ACTION_ATTR))
        .map(|attrs| {
            let href = attrs
                .split_once("href=\"")
                .and_then(|(_, value)| value.split_once('"'))
                .map_or("", |(value, _)| value);
            Route::ALL
                .into_iter()
                .find(|route| route.path() == href)
                .ok_or_else(|| StructureError::UnknownRoute {
                    section,
                    href: href.to_string(),
                })
        })
        .collect()
}
