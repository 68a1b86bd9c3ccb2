use yew::prelude::*;

use crate::components::icons;
use crate::components::reveal::Reveal;
use crate::content::{Feature, ListSection};
use crate::sections::section_heading;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub section: ListSection<Feature>,
}

pub fn feature_cards(features: &[Feature]) -> Html {
    features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            html! {
                <Reveal key={index} class="glass-card feature-card" delay_ms={index as u32 * 100}>
                    <div class="feature-icon">{ icons::icon(feature.icon, "feature-icon-svg") }</div>
                    <h3>{ &feature.title }</h3>
                    <p>{ &feature.description }</p>
                </Reveal>
            }
        })
        .collect()
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    html! {
        <section id="features" class="page-section">
            <div class="section-inner">
                { section_heading(&props.section.heading) }
                <div class="card-grid card-grid--three">
                    { feature_cards(&props.section.items) }
                </div>
            </div>
        </section>
    }
}
