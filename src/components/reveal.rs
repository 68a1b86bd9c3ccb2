use yew::prelude::*;

use crate::web::{NodeBlock, NodeLayer, PageRegistry};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Stagger applied to the fade-in transition.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Sets `--reveal-delay`, which only the fade-in transition reads, so hover
/// effects on the same element stay immediate.
pub fn stagger_style(delay_ms: u32) -> Option<String> {
    (delay_ms > 0).then(|| format!("--reveal-delay: {}ms;", delay_ms))
}

/// Wraps its children in a block that fades in once scrolled near view.
/// Registers itself with the page registry for as long as it is mounted.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let registry = use_context::<PageRegistry>();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let entry = registry.map(|registry| {
                    let id = registry.add_block(NodeBlock::new(node));
                    (registry, id)
                });
                move || {
                    if let Some((registry, id)) = entry {
                        registry.remove_block(id);
                    }
                }
            },
            (),
        );
    }

    let style = stagger_style(props.delay_ms);

    html! {
        <div ref={node} class={classes!("fade-in-element", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxLayerProps {
    #[prop_or_default]
    pub class: Classes,
    /// Written to `data-speed`; layers without one use the configured default.
    #[prop_or_default]
    pub speed: Option<f64>,
}

#[function_component(ParallaxLayer)]
pub fn parallax_layer(props: &ParallaxLayerProps) -> Html {
    let node = use_node_ref();
    let registry = use_context::<PageRegistry>();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let entry = registry.map(|registry| {
                    let id = registry.add_layer(NodeLayer::new(node));
                    (registry, id)
                });
                move || {
                    if let Some((registry, id)) = entry {
                        registry.remove_layer(id);
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="parallax-frame">
            <div
                ref={node}
                class={classes!("parallax-element", props.class.clone())}
                data-speed={props.speed.map(|s| s.to_string())}
            />
        </div>
    }
}
