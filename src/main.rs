use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod components;
mod config;
mod content;
mod engine;
mod error;
mod sections;
mod styles;
mod web;

use components::{background::BackgroundEffects, cursor::CustomCursor};
use config::EngineConfig;
use content::SiteContent;
use engine::scroll::ScrollEngine;
use sections::{
    cta::Cta,
    features::Features,
    footer::Footer,
    header::Header,
    hero::Hero,
    how_it_works::HowItWorks,
    pricing::Pricing,
    story::CompanyStory,
    team::Team,
    testimonials::Testimonials,
};
use web::{PageRegistry, WebHost, WebScheduler, WindowViewport};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
    #[prop_or_default]
    pub config: EngineConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageSection {
    Header,
    Hero,
    Features,
    HowItWorks,
    Team,
    CompanyStory,
    Testimonials,
    Pricing,
    Cta,
    Footer,
}

/// Top to bottom. Everything but the header and footer is laid out inside `<main>`.
const PAGE_LAYOUT: [PageSection; 10] = [
    PageSection::Header,
    PageSection::Hero,
    PageSection::Features,
    PageSection::HowItWorks,
    PageSection::Team,
    PageSection::CompanyStory,
    PageSection::Testimonials,
    PageSection::Pricing,
    PageSection::Cta,
    PageSection::Footer,
];

impl PageSection {
    fn in_main(self) -> bool {
        !matches!(self, PageSection::Header | PageSection::Footer)
    }

    fn render(self, content: &SiteContent, config: &EngineConfig) -> Html {
        match self {
            PageSection::Header => html! { <Header brand={content.brand.clone()} nav={content.nav.clone()} /> },
            PageSection::Hero => html! {
                <Hero copy={content.hero.clone()} island={content.island.clone()} tilt={config.tilt} />
            },
            PageSection::Features => html! { <Features section={content.features.clone()} /> },
            PageSection::HowItWorks => html! { <HowItWorks section={content.steps.clone()} /> },
            PageSection::Team => html! { <Team section={content.team.clone()} /> },
            PageSection::CompanyStory => html! { <CompanyStory story={content.story.clone()} /> },
            PageSection::Testimonials => html! { <Testimonials section={content.testimonials.clone()} /> },
            PageSection::Pricing => html! { <Pricing section={content.pricing.clone()} /> },
            PageSection::Cta => html! { <Cta cta={content.cta.clone()} /> },
            PageSection::Footer => html! { <Footer brand={content.brand.clone()} footer={content.footer.clone()} /> },
        }
    }
}

#[function_component]
fn App(props: &AppProps) -> Html {
    // Built once; sections register their layers and blocks into it.
    let registry = use_state(PageRegistry::new);

    {
        let registry = (*registry).clone();
        let scroll = props.config.scroll;
        use_effect_with_deps(
            move |_| {
                let listeners = match WebHost::window().and_then(|host| {
                    ScrollEngine::new(scroll).mount(host, &WebScheduler, Rc::new(WindowViewport), registry)
                }) {
                    Ok(listeners) => Some(listeners),
                    Err(e) => {
                        error!("Scroll engine not mounted: {}", e);
                        None
                    }
                };

                move || {
                    if let Some(mut listeners) = listeners {
                        listeners.teardown();
                        info!("Scroll engine torn down");
                    }
                }
            },
            (),
        );
    }

    let content = &props.content;
    let config = &props.config;

    html! {
        <ContextProvider<PageRegistry> context={(*registry).clone()}>
            <div class="page">
                <style>{ styles::PAGE_CSS }</style>
                <CustomCursor config={config.cursor} />
                <BackgroundEffects />
                { PageSection::Header.render(content, config) }
                <main>
                    { for PAGE_LAYOUT.iter().filter(|s| s.in_main()).map(|s| s.render(content, config)) }
                </main>
                { PageSection::Footer.render(content, config) }
            </div>
        </ContextProvider<PageRegistry>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let content = SiteContent::load().unwrap_or_else(|e| {
        error!("Falling back to empty content: {}", e);
        SiteContent::default()
    });

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
        config: EngineConfig::default(),
    })
    .render();
}
