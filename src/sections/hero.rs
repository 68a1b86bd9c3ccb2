use yew::prelude::*;

use crate::components::icons;
use crate::components::island::DynamicIsland;
use crate::components::reveal::{ParallaxLayer, Reveal};
use crate::config::TiltConfig;
use crate::content::{Hero as HeroCopy, Island};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub copy: HeroCopy,
    pub island: Island,
    pub tilt: TiltConfig,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let copy = &props.copy;
    html! {
        <section class="hero">
            <ParallaxLayer class="glow glow--hero" speed={Some(0.05)} />
            <Reveal class="hero-content">
                <h1>
                    <span class="improved-typing">{ &copy.headline }</span>
                    <span class="hero-subheadline">{ &copy.subheadline }</span>
                </h1>
                <p class="hero-blurb">{ &copy.blurb }</p>
                <div class="button-row">
                    <button class="neon-button neon-button--filled">
                        { &copy.primary_cta }{ icons::chevron_right() }
                    </button>
                    <button class="neon-button neon-button--outline">{ &copy.secondary_cta }</button>
                </div>
            </Reveal>
            <DynamicIsland
                config={props.tilt}
                title={props.island.title.clone()}
                placeholder={props.island.placeholder.clone()}
            />
        </section>
    }
}
