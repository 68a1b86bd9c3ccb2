use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

use crate::config::CursorConfig;
use crate::engine::pointer::PointerTracker;
use crate::web::{self, WebHost, WebScheduler};

const HIDDEN_CLASS: &str = "cursor-hidden";

#[derive(Properties, PartialEq)]
pub struct CustomCursorProps {
    pub config: CursorConfig,
}

fn bind_markers(tracker: &PointerTracker, dot: NodeRef, outline: NodeRef) {
    {
        let dot = dot.clone();
        tracker.dot().subscribe(move |sample| web::place_marker(&dot, *sample));
    }
    {
        let outline = outline.clone();
        tracker
            .outline()
            .subscribe(move |sample| web::place_marker(&outline, *sample));
    }
    tracker.visible().subscribe(move |visible| {
        web::toggle_class(&dot, HIDDEN_CLASS, !*visible);
        web::toggle_class(&outline, HIDDEN_CLASS, !*visible);
    });
}

#[function_component(CustomCursor)]
pub fn custom_cursor(props: &CustomCursorProps) -> Html {
    let dot_ref = use_node_ref();
    let outline_ref = use_node_ref();

    {
        let dot_ref = dot_ref.clone();
        let outline_ref = outline_ref.clone();
        let config = props.config;
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(PointerTracker::new(config));
                bind_markers(&tracker, dot_ref, outline_ref);

                let listeners = match WebHost::document()
                    .and_then(|host| tracker.mount(host, Rc::new(WebScheduler)))
                {
                    Ok(listeners) => Some(listeners),
                    Err(e) => {
                        error!("Custom cursor not mounted: {}", e);
                        None
                    }
                };

                move || {
                    if let Some(mut listeners) = listeners {
                        listeners.teardown();
                        info!("Custom cursor torn down");
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <div ref={dot_ref} class="cursor-dot" />
            <div ref={outline_ref} class="cursor-outline" />
            <style>
                {r#"
                .cursor-dot,
                .cursor-outline {
                    position: fixed;
                    top: 0;
                    left: 0;
                    pointer-events: none;
                    border-radius: 50%;
                    transform: translate(-50%, -50%);
                    z-index: 9999;
                    transition: opacity 0.3s ease;
                }

                .cursor-dot {
                    width: 8px;
                    height: 8px;
                    background: #ff7a1a;
                }

                .cursor-outline {
                    width: 36px;
                    height: 36px;
                    border: 2px solid rgba(255, 122, 26, 0.5);
                    transition: left 0.1s ease-out, top 0.1s ease-out, opacity 0.3s ease;
                }

                .cursor-hidden {
                    opacity: 0;
                }

                @media (hover: none) {
                    .cursor-dot,
                    .cursor-outline {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
