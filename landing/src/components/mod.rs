//! Reusable building blocks shared by the page sections.

mod document;
mod icons;
mod nav_button;

pub use document::{LandingDocument, LandingPage, PAGE_DESCRIPTION, PAGE_TITLE};
pub use icons::*;
pub use nav_button::NavButton;
