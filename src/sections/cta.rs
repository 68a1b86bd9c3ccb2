use yew::prelude::*;

use crate::components::icons;
use crate::components::reveal::{ParallaxLayer, Reveal};
use crate::content::CallToAction;

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub cta: CallToAction,
}

#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    let cta = &props.cta;
    html! {
        <section class="page-section page-section--layered">
            <ParallaxLayer class="glow glow--cta" speed={Some(0.05)} />
            <Reveal class="cta-content">
                <h2>{ &cta.title }</h2>
                <p>{ &cta.body }</p>
                <div class="button-row">
                    <button class="neon-button neon-button--filled">
                        { &cta.primary }{ icons::chevron_right() }
                    </button>
                    <button class="neon-button neon-button--outline">
                        { &cta.secondary }{ icons::mail() }
                    </button>
                </div>
            </Reveal>
        </section>
    }
}
