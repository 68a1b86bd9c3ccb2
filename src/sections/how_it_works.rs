use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{ListSection, Step};
use crate::sections::section_heading;

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub section: ListSection<Step>,
}

/// Steps alternate sides of the timeline, starting on the left.
pub fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "left"
    } else {
        "right"
    }
}

pub fn timeline_steps(steps: &[Step]) -> Html {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            html! {
                <Reveal
                    key={index}
                    class={classes!("timeline-container", timeline_side(index))}
                    delay_ms={index as u32 * 150}
                >
                    <div class="timeline-content glass-card">
                        <h3>{ &step.title }</h3>
                        <p>{ &step.description }</p>
                    </div>
                </Reveal>
            }
        })
        .collect()
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    html! {
        <section id="how-it-works" class="page-section page-section--alt">
            <div class="section-inner">
                { section_heading(&props.section.heading) }
                <div class="timeline">{ timeline_steps(&props.section.items) }</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use crate::sections::block_count;

    #[test]
    fn sides_alternate_from_the_left() {
        let sides: Vec<_> = (0..5).map(timeline_side).collect();
        assert_eq!(sides, ["left", "right", "left", "right", "left"]);
    }

    #[test]
    fn every_step_gets_a_container() {
        let content = SiteContent::load().unwrap();
        assert_eq!(block_count(&timeline_steps(&content.steps.items)), 5);
    }
}
