use crate::components::Icon;
use crate::content::{FEATURES, FEATURES_HEADING, FeatureEntry, Section};
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features" data-section=Section::Features.anchor()>
            <div class="container">
                <div class="section-header">
                    <h2 class="section-eyebrow">{FEATURES_HEADING.eyebrow}</h2>
                    <p class="section-title">{FEATURES_HEADING.heading}</p>
                </div>
                <dl class="features-grid">
                    {FEATURES
                        .into_iter()
                        .map(|entry| view! { <FeatureCard entry=entry /> })
                        .collect::<Vec<_>>()}
                </dl>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    view! {
        <div class="feature-card">
            <dt class="feature-title">
                <Icon icon=entry.icon class="feature-icon" />
                {entry.title}
            </dt>
            <dd class="feature-description">
                <p>{entry.description}</p>
            </dd>
        </div>
    }
}
