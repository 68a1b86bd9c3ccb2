pub const PAGE_CSS: &str = r#"
:root {
    --brand-orange: #ff7a1a;
    --brand-dark: #0d0d12;
    --brand-dark-light: #14141b;
    --brand-dark-lighter: #1b1b24;
}

body {
    margin: 0;
    background: var(--brand-dark);
    color: #ffffff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    cursor: none;
}

a, button {
    cursor: none;
}

.page {
    min-height: 100vh;
    position: relative;
}

main {
    position: relative;
    z-index: 1;
}

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1rem 2rem;
    backdrop-filter: blur(8px);
}

.header-content,
.section-inner {
    max-width: 80rem;
    margin: 0 auto;
}

.header-content {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.brand,
.footer-brand {
    display: flex;
    align-items: center;
    font-weight: 700;
    font-size: 1.25rem;
}

.brand-logo {
    height: 2rem;
    margin-right: 0.5rem;
}

.header-nav {
    display: flex;
    gap: 2rem;
}

.nav-link,
.footer-link,
.social-link,
.login-button {
    color: #d1d5db;
    text-decoration: none;
    background: none;
    border: none;
    font-size: 1rem;
    transition: color 0.2s ease;
}

.nav-link:hover,
.footer-link:hover,
.social-link:hover,
.login-button:hover {
    color: var(--brand-orange);
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.neon-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    font-size: 1.125rem;
    font-weight: 500;
    transition: all 0.3s ease;
}

.neon-button--filled {
    background: var(--brand-orange);
    color: #ffffff;
    border: 1px solid var(--brand-orange);
    box-shadow: 0 0 18px rgba(255, 122, 26, 0.45);
}

.neon-button--filled:hover {
    box-shadow: 0 0 28px rgba(255, 122, 26, 0.7);
}

.neon-button--outline {
    background: transparent;
    color: var(--brand-orange);
    border: 1px solid var(--brand-orange);
}

.neon-button--outline:hover {
    background: rgba(255, 122, 26, 0.1);
}

.neon-button--small {
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
}

.button-icon {
    width: 1.25rem;
    height: 1.25rem;
}

.button-row {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}

.page-section {
    padding: 5rem 2rem;
}

.page-section--alt {
    background: var(--brand-dark-light);
}

.page-section--layered {
    position: relative;
    overflow: hidden;
}

.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}

.section-heading h2,
.cta-content h2 {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.section-heading p,
.cta-content p,
.hero-blurb {
    font-size: 1.25rem;
    color: #d1d5db;
    max-width: 42rem;
    margin: 0 auto 2rem;
}

.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    position: relative;
    padding: 6rem 2rem 2rem;
}

.hero-content,
.cta-content {
    text-align: center;
    max-width: 56rem;
    margin: 0 auto;
    position: relative;
    z-index: 10;
}

.hero h1 {
    font-size: 3.75rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    margin-bottom: 1.5rem;
}

.hero-subheadline {
    display: block;
    margin-top: 0.5rem;
    color: var(--brand-orange);
}

.improved-typing {
    display: inline-block;
    overflow: hidden;
    white-space: nowrap;
    border-right: 3px solid var(--brand-orange);
    animation: typing 1.6s steps(4, end), caret 0.8s step-end infinite;
}

@keyframes typing {
    from { width: 0; }
    to { width: 100%; }
}

@keyframes caret {
    50% { border-color: transparent; }
}

.parallax-frame {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}

.glow {
    position: absolute;
    left: 50%;
    top: 50%;
    margin-left: -400px;
    margin-top: -400px;
    width: 800px;
    height: 800px;
    border-radius: 50%;
    opacity: 0.7;
    will-change: transform;
}

.glow--hero {
    margin-left: -250px;
    margin-top: -250px;
    width: 500px;
    height: 500px;
    background: radial-gradient(circle, rgba(255, 122, 26, 0.2), transparent 70%);
}

.glow--story {
    background: radial-gradient(circle, rgba(255, 122, 26, 0.05), transparent 70%);
}

.glow--cta {
    background: radial-gradient(circle, rgba(255, 122, 26, 0.1), transparent 70%);
}

.fade-in-element {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.7s ease-out var(--reveal-delay, 0ms),
        transform 0.7s ease-out var(--reveal-delay, 0ms);
}

.fade-in-element.fade-in-visible {
    opacity: 1;
    transform: translateY(0);
}

.glass-card {
    background: rgba(255, 255, 255, 0.04);
    border: 1px solid rgba(255, 255, 255, 0.08);
    backdrop-filter: blur(12px);
    border-radius: 0.75rem;
    padding: 1.5rem;
}

.card-grid {
    display: grid;
    gap: 2rem;
    grid-template-columns: 1fr;
}

@media (min-width: 768px) {
    .card-grid--three { grid-template-columns: repeat(3, 1fr); }
}

.fade-in-element.feature-card {
    transition: opacity 0.7s ease-out var(--reveal-delay, 0ms),
        transform 0.7s ease-out var(--reveal-delay, 0ms),
        translate 0.3s ease;
}

.feature-card:hover {
    translate: 0 -5px;
}

.feature-icon-svg {
    width: 2.5rem;
    height: 2.5rem;
    color: var(--brand-orange);
    margin-bottom: 1rem;
}

.feature-card p,
.timeline-content p,
.team-bio,
.timeline-event-body p {
    color: #d1d5db;
}

.timeline {
    position: relative;
    max-width: 64rem;
    margin: 0 auto;
}

.timeline::after {
    content: "";
    position: absolute;
    width: 2px;
    background: var(--brand-orange);
    top: 0;
    bottom: 0;
    left: 50%;
}

.timeline-container {
    position: relative;
    width: 50%;
    padding: 1rem 2.5rem;
    box-sizing: border-box;
}

.timeline-container.left { left: 0; }
.timeline-container.right { left: 50%; }

.team-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.team-avatar {
    position: relative;
    margin-bottom: 1rem;
}

.team-avatar img {
    width: 8rem;
    height: 8rem;
    border-radius: 50%;
    object-fit: cover;
    border: 2px solid var(--brand-orange);
    position: relative;
}

.avatar-glow {
    position: absolute;
    inset: -6px;
    border-radius: 50%;
    background: radial-gradient(circle, rgba(255, 122, 26, 0.4), transparent 70%);
}

.team-role {
    color: var(--brand-orange);
}

.social-row {
    display: flex;
    gap: 1rem;
    margin-top: auto;
}

.social-icon {
    width: 1.25rem;
    height: 1.25rem;
}

.social-icon--large {
    width: 1.5rem;
    height: 1.5rem;
}

.story-grid {
    display: grid;
    gap: 3rem;
    grid-template-columns: 1fr;
    align-items: center;
}

@media (min-width: 1024px) {
    .story-grid { grid-template-columns: 1fr 1fr; }
}

.company-timeline {
    position: relative;
}

.timeline-event {
    display: flex;
    margin-bottom: 2rem;
}

.timeline-year {
    width: 6rem;
    flex-shrink: 0;
}

.year-bubble {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 4rem;
    height: 4rem;
    border-radius: 50%;
    background: var(--brand-dark);
    border: 2px solid var(--brand-orange);
    color: var(--brand-orange);
    font-weight: 700;
    position: relative;
    z-index: 1;
}

.timeline-line {
    position: absolute;
    left: 2rem;
    top: 0;
    bottom: 0;
    width: 2px;
    background: rgba(255, 122, 26, 0.3);
}

.company-story h3 {
    color: var(--brand-orange);
    font-size: 1.5rem;
}

.company-story p {
    color: #e5e7eb;
}

.testimonial-card {
    display: flex;
    flex-direction: column;
}

.testimonial-body {
    flex: 1;
}

.rating {
    display: flex;
    margin-bottom: 1rem;
}

.star-icon {
    width: 1.25rem;
    height: 1.25rem;
    color: var(--brand-orange);
}

.quote {
    color: #e5e7eb;
    font-style: italic;
    margin-bottom: 1.5rem;
}

.author {
    font-weight: 600;
}

.author-role {
    color: #9ca3af;
    font-size: 0.875rem;
}

.plan-card {
    display: flex;
    flex-direction: column;
    padding: 2rem;
    position: relative;
    overflow: hidden;
}

.plan-card--highlighted {
    border: 2px solid var(--brand-orange);
}

.plan-badge {
    position: absolute;
    top: 0;
    right: 0;
    background: var(--brand-orange);
    padding: 0.25rem 1rem;
    font-size: 0.875rem;
    font-weight: 500;
}

.price {
    font-size: 2.25rem;
    font-weight: 700;
}

.period {
    color: #9ca3af;
    margin-left: 0.5rem;
}

.plan-description {
    color: #d1d5db;
    margin-bottom: 1.5rem;
}

.plan-features {
    list-style: none;
    padding: 0;
    margin: 0 0 2rem;
    flex: 1;
}

.plan-features li {
    display: flex;
    align-items: flex-start;
    margin-bottom: 0.75rem;
}

.check-icon {
    width: 1.25rem;
    height: 1.25rem;
    color: var(--brand-orange);
    margin-right: 0.5rem;
    flex-shrink: 0;
}

.site-footer {
    background: var(--brand-dark-lighter);
    padding: 3rem 2rem;
    position: relative;
    z-index: 1;
}

.footer-grid {
    display: grid;
    gap: 2rem;
    grid-template-columns: 1fr;
}

@media (min-width: 768px) {
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
}

.footer-tagline {
    color: #9ca3af;
}

.footer-column ul {
    list-style: none;
    padding: 0;
}

.footer-column li {
    margin-bottom: 0.5rem;
}

.footer-bottom {
    border-top: 1px solid #1f2937;
    margin-top: 3rem;
    padding-top: 2rem;
    text-align: center;
    color: #9ca3af;
}

@media (max-width: 768px) {
    .header-nav,
    .login-button {
        display: none;
    }

    .hero h1 {
        font-size: 2.25rem;
    }

    .timeline::after {
        left: 1rem;
    }

    .timeline-container,
    .timeline-container.right {
        width: 100%;
        left: 0;
        padding-left: 3rem;
    }
}
"#;
