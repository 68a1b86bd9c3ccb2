use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Heading;

pub mod cta;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod pricing;
pub mod story;
pub mod team;
pub mod testimonials;

pub fn section_heading(heading: &Heading) -> Html {
    html! {
        <Reveal class="section-heading">
            <h2>{ &heading.title }</h2>
            <p>{ &heading.subtitle }</p>
        </Reveal>
    }
}

/// Top-level blocks a list renderer produced.
#[cfg(test)]
pub fn block_count(html: &Html) -> usize {
    match html {
        Html::VList(list) => list.len(),
        _ => 1,
    }
}

#[cfg(test)]
pub fn block_keys(html: &Html) -> Vec<String> {
    match html {
        Html::VList(list) => list
            .iter()
            .filter_map(|node| node.key())
            .map(|key| key.to_string())
            .collect(),
        _ => Vec::new(),
    }
}
