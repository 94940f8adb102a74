//! CSS for the landing page.
//!
//! One stylesheet, inlined into `<head>` by [`crate::render_page`]. It covers
//! the hero gradient, the responsive feature grid (1, 2 and 4 columns), the
//! call-to-action band and the footer, plus a dark scheme driven by
//! `prefers-color-scheme`.
//!
//! Button variants are selected by [`crate::content::ButtonStyle::class`].

/// Complete landing page stylesheet.
pub const LANDING_CSS: &str = r#"
:root {
    --blue-50: #eff6ff;
    --blue-100: #dbeafe;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --page-bg: #ffffff;
    --text-strong: var(--gray-900);
    --text-body: var(--gray-600);
    --border: #e5e7eb;
    --hero-from: var(--blue-50);
    --hero-to: #ffffff;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 80rem;
}

@media (prefers-color-scheme: dark) {
    :root {
        --page-bg: var(--gray-900);
        --text-strong: #ffffff;
        --text-body: var(--gray-300);
        --border: var(--gray-800);
        --hero-from: var(--gray-900);
        --hero-to: var(--gray-800);
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--page-bg);
    color: var(--text-body);
    -webkit-font-smoothing: antialiased;
}

.landing {
    min-height: 100vh;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 6rem 1.5rem;
}

/* Hero */

.hero {
    position: relative;
    overflow: hidden;
    background: linear-gradient(to bottom, var(--hero-from), var(--hero-to));
}

.hero-content {
    max-width: 42rem;
    margin: 0 auto;
    text-align: center;
}

.hero-title {
    margin: 0;
    font-size: 2.25rem;
    line-height: 2.5rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: var(--text-strong);
}

.hero-title-accent {
    color: var(--blue-600);
}

.hero-description {
    margin-top: 1.5rem;
    font-size: 1.125rem;
    line-height: 2rem;
}

.hero-actions,
.cta-actions {
    margin-top: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
}

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 0.375rem;
    border: 1px solid transparent;
    font-weight: 500;
    text-decoration: none;
    transition: background-color 150ms, color 150ms;
}

.btn-lg {
    height: 2.75rem;
    padding: 0 2rem;
    font-size: 1rem;
}

.btn-primary {
    background: var(--blue-600);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--blue-700);
}

.btn-secondary {
    background: #f3f4f6;
    color: var(--gray-900);
}

.btn-secondary:hover {
    background: #e5e7eb;
}

.btn-outline {
    background: transparent;
    border-color: var(--border);
    color: var(--text-strong);
}

.btn-outline:hover {
    background: var(--blue-50);
    color: var(--gray-900);
}

/* Features */

.section-header {
    max-width: 42rem;
    margin: 0 auto;
}

.section-eyebrow {
    margin: 0;
    font-size: 1rem;
    font-weight: 600;
    line-height: 1.75rem;
    color: var(--blue-600);
}

.section-title {
    margin: 0.5rem 0 0;
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: var(--text-strong);
}

.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    column-gap: 2rem;
    row-gap: 4rem;
    max-width: 36rem;
    margin: 4rem auto 0;
}

.feature-card {
    display: flex;
    flex-direction: column;
}

.feature-title {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-weight: 600;
    line-height: 1.75rem;
    color: var(--text-strong);
}

.feature-icon {
    flex: none;
    color: var(--blue-600);
}

.feature-description {
    margin: 1rem 0 0;
    line-height: 1.75rem;
}

.feature-description p {
    margin: 0;
}

/* Call to action */

.cta {
    background: var(--blue-600);
}

.cta-content {
    max-width: 42rem;
    margin: 0 auto;
    text-align: center;
}

.cta-title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: #ffffff;
}

.cta-description {
    max-width: 36rem;
    margin: 1.5rem auto 0;
    font-size: 1.125rem;
    line-height: 2rem;
    color: var(--blue-100);
}

/* Footer */

.footer {
    background: var(--page-bg);
    border-top: 1px solid var(--border);
}

.footer-inner {
    padding-top: 3rem;
    padding-bottom: 3rem;
}

.footer-links {
    display: flex;
    justify-content: center;
    gap: 1.5rem;
}

.footer-link {
    color: var(--gray-400);
    text-decoration: none;
}

.footer-link:hover {
    color: var(--gray-500);
}

.footer-copyright {
    margin: 2rem 0 0;
    text-align: center;
    font-size: 0.75rem;
    line-height: 1.25rem;
    color: var(--gray-500);
}

@media (min-width: 640px) {
    .container {
        padding-top: 8rem;
        padding-bottom: 8rem;
    }

    .hero-title {
        font-size: 3.75rem;
        line-height: 1;
    }

    .section-title,
    .cta-title {
        font-size: 2.25rem;
    }

    .features-grid {
        grid-template-columns: repeat(2, 1fr);
        max-width: none;
    }
}

@media (min-width: 768px) {
    .footer-inner {
        display: flex;
        flex-direction: row-reverse;
        align-items: center;
        justify-content: space-between;
    }

    .footer-copyright {
        margin-top: 0;
    }
}

@media (min-width: 1024px) {
    .container {
        padding-left: 2rem;
        padding-right: 2rem;
    }

    .section-header {
        text-align: center;
    }

    .features-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}
"#;

/// Content Security Policy for the rendered page.
///
/// No scripts run on the landing page; inline styles and inline SVG only.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none'; font-src 'self' data:;";
