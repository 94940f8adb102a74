use crate::components::NavButton;
use crate::content::{CALL_TO_ACTION, Section};
use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta" data-section=Section::CallToAction.anchor()>
            <div class="container">
                <div class="cta-content">
                    <h2 class="cta-title">{CALL_TO_ACTION.heading}</h2>
                    <p class="cta-description">{CALL_TO_ACTION.paragraph}</p>
                    <div class="cta-actions">
                        <NavButton action=CALL_TO_ACTION.action />
                    </div>
                </div>
            </div>
        </section>
    }
}
