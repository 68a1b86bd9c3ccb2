use yew::prelude::*;

use crate::components::icons;
use crate::components::reveal::Reveal;
use crate::content::{ListSection, Plan};
use crate::sections::section_heading;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub section: ListSection<Plan>,
}

pub fn plan_card_classes(plan: &Plan) -> Classes {
    classes!("glass-card", "plan-card", plan.highlighted.then_some("plan-card--highlighted"))
}

pub fn plan_button_classes(plan: &Plan) -> Classes {
    if plan.highlighted {
        classes!("neon-button", "neon-button--filled")
    } else {
        classes!("neon-button", "neon-button--outline")
    }
}

pub fn plan_cards(plans: &[Plan]) -> Html {
    plans
        .iter()
        .enumerate()
        .map(|(index, plan)| {
            html! {
                <Reveal key={index} class={plan_card_classes(plan)} delay_ms={index as u32 * 100}>
                    if plan.highlighted {
                        <div class="plan-badge">{"Most Popular"}</div>
                    }
                    <h3>{ &plan.name }</h3>
                    <div class="plan-price">
                        <span class="price">{ &plan.price }</span>
                        <span class="period">{ &plan.period }</span>
                    </div>
                    <p class="plan-description">{ &plan.description }</p>
                    <ul class="plan-features">
                        { for plan.features.iter().map(|feature| html! {
                            <li>{ icons::check() }<span>{ feature }</span></li>
                        }) }
                    </ul>
                    <button class={plan_button_classes(plan)}>{ &plan.cta }</button>
                </Reveal>
            }
        })
        .collect()
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    html! {
        <section id="pricing" class="page-section page-section--alt">
            <div class="section-inner">
                { section_heading(&props.section.heading) }
                <div class="card-grid card-grid--three">
                    { plan_cards(&props.section.items) }
                </div>
            </div>
        </section>
    }
}
