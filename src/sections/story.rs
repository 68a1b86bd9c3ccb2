use yew::prelude::*;

use crate::components::reveal::{ParallaxLayer, Reveal};
use crate::content::{Story, TimelineEvent};
use crate::sections::section_heading;

#[derive(Properties, PartialEq)]
pub struct CompanyStoryProps {
    pub story: Story,
}

pub fn timeline_events(events: &[TimelineEvent]) -> Html {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            html! {
                <div key={index} class="timeline-event">
                    <div class="timeline-year">
                        <div class="year-bubble">{ &event.year }</div>
                    </div>
                    <div class="timeline-event-body">
                        <h3>{ &event.title }</h3>
                        <p>{ &event.description }</p>
                    </div>
                </div>
            }
        })
        .collect()
}

#[function_component(CompanyStory)]
pub fn company_story(props: &CompanyStoryProps) -> Html {
    let story = &props.story;
    html! {
        <section id="our-story" class="page-section page-section--alt page-section--layered">
            <ParallaxLayer class="glow glow--story" speed={Some(0.03)} />
            <div class="section-inner">
                { section_heading(&story.heading) }
                <div class="story-grid">
                    <Reveal class="company-timeline">
                        { timeline_events(&story.events) }
                        <div class="timeline-line"></div>
                    </Reveal>
                    <Reveal class="glass-card company-story">
                        <h3>{ &story.vision_title }</h3>
                        { for story.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
