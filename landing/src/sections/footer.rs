use crate::content::{COPYRIGHT, FooterLinks, Section};
use leptos::prelude::*;

#[component]
pub fn Footer(links: FooterLinks) -> impl IntoView {
    view! {
        <footer class="footer" data-section=Section::Footer.anchor()>
            <div class="container footer-inner">
                <div class="footer-links">
                    {links
                        .links()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="footer-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
