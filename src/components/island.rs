use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

use crate::config::TiltConfig;
use crate::engine::tilt::TiltPanel;
use crate::web::{self, NodePanel, WebHost};

#[derive(Properties, PartialEq)]
pub struct DynamicIslandProps {
    pub config: TiltConfig,
    pub title: String,
    pub placeholder: String,
}

/// Preview panel that tilts toward the pointer.
#[function_component(DynamicIsland)]
pub fn dynamic_island(props: &DynamicIslandProps) -> Html {
    let panel_ref = use_node_ref();

    {
        let panel_ref = panel_ref.clone();
        let config = props.config;
        use_effect_with_deps(
            move |_| {
                let panel = Rc::new(TiltPanel::new(config, NodePanel::new(panel_ref.clone())));
                panel
                    .tilt()
                    .subscribe(move |tilt| web::set_style(&panel_ref, "transform", &tilt.to_css(&config)));

                let listeners = match WebHost::document().and_then(|host| panel.mount(host)) {
                    Ok(listeners) => Some(listeners),
                    Err(e) => {
                        error!("Tilt panel not mounted: {}", e);
                        None
                    }
                };

                move || {
                    if let Some(mut listeners) = listeners {
                        listeners.teardown();
                        info!("Tilt panel torn down");
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={panel_ref} class="dynamic-island">
            <div class="island-content">
                <div class="island-inner">
                    <div class="island-title">{ &props.title }</div>
                    <div class="island-placeholder">
                        <span>{ &props.placeholder }</span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .dynamic-island {
                    margin: 3rem auto 2rem;
                    width: 100%;
                    max-width: 48rem;
                    height: 20rem;
                    border-radius: 1.5rem;
                    background: linear-gradient(145deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0.02));
                    border: 1px solid rgba(255, 122, 26, 0.25);
                    box-shadow: 0 20px 60px rgba(255, 122, 26, 0.12);
                    transition: transform 0.3s ease-out;
                    will-change: transform;
                    z-index: 10;
                    position: relative;
                }

                .island-content {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 1.5rem;
                    box-sizing: border-box;
                }

                .island-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                }

                .island-title {
                    color: #ff7a1a;
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }

                .island-placeholder {
                    width: 100%;
                    height: 12rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.35);
                    color: #9ca3af;
                }

                @media (max-width: 640px) {
                    .dynamic-island { height: 16rem; }
                    .island-placeholder { height: 8rem; }
                }
                "#}
            </style>
        </div>
    }
}
