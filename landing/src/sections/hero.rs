use crate::components::NavButton;
use crate::content::{HERO, Section};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" data-section=Section::Hero.anchor()>
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {HERO.heading_lead}
                        <span class="hero-title-accent">{HERO.heading_accent}</span>
                    </h1>
                    <p class="hero-description">{HERO.paragraph}</p>
                    <div class="hero-actions">
                        {HERO
                            .actions
                            .into_iter()
                            .map(|action| view! { <NavButton action=action /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
