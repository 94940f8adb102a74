//! Static content model for the landing page.
//!
//! Every piece of copy, every feature card and every navigation target lives
//! here as a `const`. The Leptos components in [`crate::sections`] only decide
//! *how* these records look; they never invent content of their own.
//!
//! The same records are projected into a serializable [`PageOutline`], which
//! is what `onboard-landing outline` prints and what [`verify_structure`]
//! checks for drift.
//!
//! # Example
//!
//! ```rust
//! use onboard_landing::content::{outline, verify_structure, FooterLinks, Route};
//!
//! let page = outline(&FooterLinks::default());
//! assert_eq!(page.features.entries.len(), 4);
//! assert_eq!(page.hero.actions[0].destination, Route::Dashboard);
//! assert!(verify_structure(&page).is_ok());
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Target used by footer links until a real destination is configured.
pub const PLACEHOLDER_HREF: &str = "#";

/// Number of cards the feature grid is laid out for.
pub const FEATURE_COUNT: usize = 4;

// ============================================================================
// Navigation
// ============================================================================

/// In-app routes the page may link to.
///
/// A [`NavAction`] can only point at one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    #[serde(rename = "/dashboard")]
    Dashboard,
    #[serde(rename = "/demo")]
    Demo,
}

impl Route {
    /// Every route the landing page is allowed to emit.
    pub const ALL: [Route; 2] = [Route::Dashboard, Route::Demo];

    /// The `href` emitted for this route.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Demo => "/demo",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Visual variant of a navigation button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Outline,
}

impl ButtonStyle {
    /// CSS class selecting the variant in [`crate::styles::LANDING_CSS`].
    pub const fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-lg btn-primary",
            ButtonStyle::Secondary => "btn btn-lg btn-secondary",
            ButtonStyle::Outline => "btn btn-lg btn-outline",
        }
    }
}

/// A labelled, styled control that navigates to a fixed route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavAction {
    pub label: &'static str,
    pub destination: Route,
    pub style: ButtonStyle,
}

// ============================================================================
// Features
// ============================================================================

/// Symbolic identifier of a feature icon.
///
/// Serialized as [`IconId::name`], the same value rendered as `data-icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconId {
    MessageSquare,
    Network,
    GitBranch,
    Code2,
}

impl IconId {
    pub const fn name(self) -> &'static str {
        match self {
            IconId::MessageSquare => "message-square",
            IconId::Network => "network",
            IconId::GitBranch => "git-branch",
            IconId::Code2 => "code-2",
        }
    }
}

impl Serialize for IconId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One product capability shown in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    pub icon: IconId,
    pub title: &'static str,
    pub description: &'static str,
}

// ============================================================================
// Sections
// ============================================================================

/// Top-level regions of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Hero,
    Features,
    CallToAction,
    Footer,
}

impl Section {
    /// Value of the `data-section` attribute on the rendered region.
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::CallToAction => "cta",
            Section::Footer => "footer",
        }
    }
}

/// Render order of the page, top to bottom.
pub const SECTION_ORDER: [Section; 4] = [
    Section::Hero,
    Section::Features,
    Section::CallToAction,
    Section::Footer,
];

/// Hero copy. The heading is split so the tail can be accented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub heading_lead: &'static str,
    pub heading_accent: &'static str,
    pub paragraph: &'static str,
    pub actions: [NavAction; 2],
}

impl HeroContent {
    /// Heading text as a reader sees it, span included.
    pub fn heading(&self) -> String {
        format!("{}{}", self.heading_lead, self.heading_accent)
    }
}

pub const HERO: HeroContent = HeroContent {
    heading_lead: "Understand Any Codebase in ",
    heading_accent: "Minutes",
    paragraph: "AI-powered analysis that helps engineers onboard faster. Connect your GitHub repo and ask questions, explore architecture, and navigate code with confidence.",
    actions: [
        NavAction {
            label: "Get Started Free",
            destination: Route::Dashboard,
            style: ButtonStyle::Primary,
        },
        NavAction {
            label: "View Demo",
            destination: Route::Demo,
            style: ButtonStyle::Outline,
        },
    ],
};

/// Heading block above the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeaturesHeading {
    pub eyebrow: &'static str,
    pub heading: &'static str,
}

pub const FEATURES_HEADING: FeaturesHeading = FeaturesHeading {
    eyebrow: "Faster Onboarding",
    heading: "Everything you need to understand a codebase",
};

pub const FEATURES: [FeatureEntry; FEATURE_COUNT] = [
    FeatureEntry {
        icon: IconId::MessageSquare,
        title: "AI-Powered Q&A",
        description: "Ask natural language questions about your codebase and get intelligent answers with code references.",
    },
    FeatureEntry {
        icon: IconId::Network,
        title: "Visual Architecture",
        description: "Auto-generated interactive diagrams showing how your code components connect and data flows.",
    },
    FeatureEntry {
        icon: IconId::GitBranch,
        title: "Smart Analysis",
        description: "Automatically identifies entry points, dependencies, and critical code paths in seconds.",
    },
    FeatureEntry {
        icon: IconId::Code2,
        title: "Semantic Search",
        description: "Find code by meaning, not just keywords. RAG-powered search understands context.",
    },
];

/// Call-to-action copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CtaContent {
    pub heading: &'static str,
    pub paragraph: &'static str,
    pub action: NavAction,
}

pub const CALL_TO_ACTION: CtaContent = CtaContent {
    heading: "Ready to understand your codebase?",
    paragraph: "Connect your GitHub repository and start asking questions in minutes. No credit card required.",
    action: NavAction {
        label: "Start Free Trial",
        destination: Route::Dashboard,
        style: ButtonStyle::Secondary,
    },
};

pub const COPYRIGHT: &str = "© 2026 Codebase Onboarding SaaS. Built with Next.js and FastAPI.";

pub const GITHUB_LABEL: &str = "GitHub";
pub const DOCUMENTATION_LABEL: &str = "Documentation";

// ============================================================================
// Footer links
// ============================================================================

/// A static external link in the footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: String,
}

/// Configurable targets of the two footer links.
///
/// Both default to [`PLACEHOLDER_HREF`]; no real destination has been
/// settled for either.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterLinks {
    pub github: String,
    pub documentation: String,
}

impl Default for FooterLinks {
    fn default() -> Self {
        Self {
            github: PLACEHOLDER_HREF.to_string(),
            documentation: PLACEHOLDER_HREF.to_string(),
        }
    }
}

impl FooterLinks {
    /// Footer links in display order.
    pub fn links(&self) -> [FooterLink; 2] {
        [
            FooterLink {
                label: GITHUB_LABEL,
                href: self.github.clone(),
            },
            FooterLink {
                label: DOCUMENTATION_LABEL,
                href: self.documentation.clone(),
            },
        ]
    }
}

// ============================================================================
// Outline
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeroOutline {
    pub heading: String,
    pub paragraph: &'static str,
    pub actions: Vec<NavAction>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeaturesOutline {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub entries: Vec<FeatureEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CtaOutline {
    pub heading: &'static str,
    pub paragraph: &'static str,
    pub actions: Vec<NavAction>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterOutline {
    pub links: Vec<FooterLink>,
    pub copyright: &'static str,
}

/// Serializable projection of the whole page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageOutline {
    pub sections: Vec<Section>,
    pub hero: HeroOutline,
    pub features: FeaturesOutline,
    pub call_to_action: CtaOutline,
    pub footer: FooterOutline,
}

/// Build the outline of the page as it renders with `links`.
pub fn outline(links: &FooterLinks) -> PageOutline {
    PageOutline {
        sections: SECTION_ORDER.to_vec(),
        hero: HeroOutline {
            heading: HERO.heading(),
            paragraph: HERO.paragraph,
            actions: HERO.actions.to_vec(),
        },
        features: FeaturesOutline {
            eyebrow: FEATURES_HEADING.eyebrow,
            heading: FEATURES_HEADING.heading,
            entries: FEATURES.to_vec(),
        },
        call_to_action: CtaOutline {
            heading: CALL_TO_ACTION.heading,
            paragraph: CALL_TO_ACTION.paragraph,
            actions: vec![CALL_TO_ACTION.action],
        },
        footer: FooterOutline {
            links: links.links().to_vec(),
            copyright: COPYRIGHT,
        },
    }
}

// ============================================================================
// Drift detection
// ============================================================================

/// Structural drift found in a [`PageOutline`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("section order is {found:?}, expected {expected:?}")]
    SectionOrder {
        expected: Vec<Section>,
        found: Vec<Section>,
    },
    #[error("feature grid has {0} entries, expected 4")]
    FeatureCount(usize),
    #[error("feature #{index} has an empty {field}")]
    EmptyFeatureField { index: usize, field: &'static str },
    #[error("{section:?} has {found} navigation actions, expected {expected}")]
    ActionCount {
        section: Section,
        expected: usize,
        found: usize,
    },
    #[error("{section:?} action #{index} points to {found}, expected {expected}")]
    ActionDestination {
        section: Section,
        index: usize,
        expected: Route,
        found: Route,
    },
    #[error("footer links are {found:?}, expected [\"GitHub\", \"Documentation\"]")]
    FooterLinks { found: Vec<&'static str> },
    #[error("{0:?} section is missing from the rendered page")]
    MissingSection(Section),
    #[error("{section:?} links to unknown route {href:?}")]
    UnknownRoute { section: Section, href: String },
}

/// Expected action targets of the hero, in order.
pub(crate) const HERO_ROUTES: [Route; 2] = [Route::Dashboard, Route::Demo];

/// Expected action targets of the call-to-action band.
pub(crate) const CTA_ROUTES: [Route; 1] = [Route::Dashboard];

pub(crate) fn check_actions(
    section: Section,
    found: &[Route],
    expected: &[Route],
) -> Result<(), StructureError> {
    if found.len() != expected.len() {
        return Err(StructureError::ActionCount {
            section,
            expected: expected.len(),
            found: found.len(),
        });
    }
    for (index, (got, want)) in found.iter().zip(expected).enumerate() {
        if got != want {
            return Err(StructureError::ActionDestination {
                section,
                index,
                expected: *want,
                found: *got,
            });
        }
    }
    Ok(())
}

fn destinations(actions: &[NavAction]) -> Vec<Route> {
    actions.iter().map(|a| a.destination).collect()
}

/// Check an outline against the fixed page structure.
///
/// Returns the first violation found.
pub fn verify_structure(page: &PageOutline) -> Result<(), StructureError> {
    if page.sections != SECTION_ORDER {
        return Err(StructureError::SectionOrder {
            expected: SECTION_ORDER.to_vec(),
            found: page.sections.clone(),
        });
    }

    if page.features.entries.len() != FEATURE_COUNT {
        return Err(StructureError::FeatureCount(page.features.entries.len()));
    }
    for (index, entry) in page.features.entries.iter().enumerate() {
        let field = if entry.icon.name().is_empty() {
            Some("icon")
        } else if entry.title.trim().is_empty() {
            Some("title")
        } else if entry.description.trim().is_empty() {
            Some("description")
        } else {
            None
        };
        if let Some(field) = field {
            return Err(StructureError::EmptyFeatureField { index, field });
        }
    }

    check_actions(
        Section::Hero,
        &destinations(&page.hero.actions),
        &HERO_ROUTES,
    )?;
    check_actions(
        Section::CallToAction,
        &destinations(&page.call_to_action.actions),
        &CTA_ROUTES,
    )?;

    let labels: Vec<&'static str> = page.footer.links.iter().map(|l| l.label).collect();
    if labels != [GITHUB_LABEL, DOCUMENTATION_LABEL] {
        return Err(StructureError::FooterLinks { found: labels });
    }

    Ok(())
}
