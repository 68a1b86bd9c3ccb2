use yew::prelude::*;

use crate::components::icons;
use crate::components::reveal::Reveal;
use crate::content::{ListSection, Testimonial};
use crate::sections::section_heading;

const RATING_STARS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub section: ListSection<Testimonial>,
}

pub fn rating() -> Html {
    (0..RATING_STARS).map(|_| icons::star()).collect()
}

pub fn testimonial_cards(testimonials: &[Testimonial]) -> Html {
    testimonials
        .iter()
        .enumerate()
        .map(|(index, t)| {
            html! {
                <Reveal key={index} class="glass-card testimonial-card" delay_ms={index as u32 * 100}>
                    <div class="testimonial-body">
                        <div class="rating">{ rating() }</div>
                        <p class="quote">{ format!("\"{}\"", t.quote) }</p>
                    </div>
                    <div>
                        <p class="author">{ &t.author }</p>
                        <p class="author-role">{ &t.role }</p>
                    </div>
                </Reveal>
            }
        })
        .collect()
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section id="testimonials" class="page-section">
            <div class="section-inner">
                { section_heading(&props.section.heading) }
                <div class="card-grid card-grid--three">
                    { testimonial_cards(&props.section.items) }
                </div>
            </div>
        </section>
    }
}
