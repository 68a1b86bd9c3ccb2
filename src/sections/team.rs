use yew::prelude::*;

use crate::components::icons;
use crate::components::reveal::Reveal;
use crate::content::{Icon, ListSection, TeamMember};
use crate::sections::section_heading;

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub section: ListSection<TeamMember>,
}

pub fn member_cards(members: &[TeamMember]) -> Html {
    members
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let socials = [
                (Icon::Twitter, &member.socials.twitter),
                (Icon::Linkedin, &member.socials.linkedin),
                (Icon::Github, &member.socials.github),
            ];
            html! {
                <Reveal key={index} class="glass-card team-card" delay_ms={index as u32 * 150}>
                    <div class="team-avatar">
                        <div class="avatar-glow"></div>
                        <img src={member.image.clone()} alt={member.name.clone()} />
                    </div>
                    <h3>{ &member.name }</h3>
                    <p class="team-role">{ &member.role }</p>
                    <p class="team-bio">{ &member.bio }</p>
                    <div class="social-row">
                        { for socials.iter().map(|(icon, href)| html! {
                            <a href={(*href).clone()} class="social-link">{ icons::icon(*icon, "social-icon") }</a>
                        }) }
                    </div>
                </Reveal>
            }
        })
        .collect()
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    html! {
        <section id="team" class="page-section">
            <div class="section-inner">
                { section_heading(&props.section.heading) }
                <div class="card-grid card-grid--three">
                    { member_cards(&props.section.items) }
                </div>
            </div>
        </section>
    }
}
