//! Binds the engine to the live document: event targets, timers, the
//! viewport, and the elements sections register through `NodeRef`s.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, HtmlElement, MouseEvent};
use yew::NodeRef;

use crate::engine::host::{EventHost, EventKind, Handler, HostEvent, ListenerId, Scheduler};
use crate::engine::pointer::PointerSample;
use crate::engine::registry::Registry;
use crate::engine::scroll::{parse_speed, LayerSurface, RevealSurface, ScrollFrame, Viewport};
use crate::engine::tilt::{PanelBounds, PanelRect};
use crate::error::HostError;

pub const REVEALED_CLASS: &str = "fade-in-visible";

pub type PageRegistry = Registry<NodeLayer, NodeBlock>;

pub struct WebHost {
    target: EventTarget,
    listeners: RefCell<Vec<(ListenerId, &'static str, Closure<dyn FnMut(Event)>)>>,
    next_id: Cell<u64>,
}

impl WebHost {
    fn on(target: EventTarget) -> Rc<Self> {
        Rc::new(Self {
            target,
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    pub fn window() -> Result<Rc<Self>, HostError> {
        let window = web_sys::window().ok_or(HostError::Unavailable("window"))?;
        Ok(Self::on(window.into()))
    }

    pub fn document() -> Result<Rc<Self>, HostError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(HostError::Unavailable("document"))?;
        Ok(Self::on(document.into()))
    }
}

fn translate(kind: EventKind, event: &Event) -> Option<HostEvent> {
    match kind {
        EventKind::PointerMove => event.dyn_ref::<MouseEvent>().map(|e| {
            HostEvent::PointerMove(PointerSample::new(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
            ))
        }),
        EventKind::PointerEnter => Some(HostEvent::PointerEnter),
        EventKind::PointerLeave => Some(HostEvent::PointerLeave),
        EventKind::Scroll => Some(HostEvent::Scroll),
    }
}

impl EventHost for WebHost {
    fn add_listener(&self, kind: EventKind, handler: Handler) -> Result<ListenerId, HostError> {
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Some(event) = translate(kind, &event) {
                handler(&event);
            }
        }) as Box<dyn FnMut(Event)>);

        self.target
            .add_event_listener_with_callback(kind.dom_name(), callback.as_ref().unchecked_ref())?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .push((id, kind.dom_name(), callback));
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) -> Result<(), HostError> {
        let mut listeners = self.listeners.borrow_mut();
        let pos = listeners
            .iter()
            .position(|(lid, _, _)| *lid == id)
            .ok_or_else(|| HostError::Js(format!("unknown listener {:?}", id)))?;
        {
            let (_, name, callback) = &listeners[pos];
            self.target
                .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
        }
        // Only drop the closure once the browser no longer references it.
        listeners.remove(pos);
        Ok(())
    }
}

pub struct WebScheduler;

impl Scheduler for WebScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // The spawned future owns the task and is freed once it has run.
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}

pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn frame(&self) -> Option<ScrollFrame> {
        let window = web_sys::window()?;
        Some(ScrollFrame {
            scroll_y: window.scroll_y().ok()?,
            viewport_height: window.inner_height().ok()?.as_f64()?,
        })
    }
}

pub struct NodeLayer {
    node: NodeRef,
}

impl NodeLayer {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl LayerSurface for NodeLayer {
    fn speed(&self) -> Option<f64> {
        parse_speed(&self.node.cast::<Element>()?.get_attribute("data-speed")?)
    }

    fn set_offset(&self, offset_px: f64) {
        set_style(&self.node, "transform", &format!("translateY({}px)", offset_px));
    }
}

pub struct NodeBlock {
    node: NodeRef,
}

impl NodeBlock {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl RevealSurface for NodeBlock {
    fn top(&self) -> Option<f64> {
        Some(self.node.cast::<Element>()?.get_bounding_client_rect().top())
    }

    fn reveal(&self) {
        toggle_class(&self.node, REVEALED_CLASS, true);
    }
}

pub struct NodePanel {
    node: NodeRef,
}

impl NodePanel {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl PanelBounds for NodePanel {
    fn bounds(&self) -> Option<PanelRect> {
        let rect = self.node.cast::<Element>()?.get_bounding_client_rect();
        Some(PanelRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        })
    }
}

pub fn set_style(node: &NodeRef, property: &str, value: &str) {
    if let Some(element) = node.cast::<HtmlElement>() {
        if let Err(e) = element.style().set_property(property, value) {
            warn!("Failed to set {}: {}", property, HostError::from(e));
        }
    }
}

pub fn place_marker(node: &NodeRef, sample: PointerSample) {
    set_style(node, "left", &format!("{}px", sample.x));
    set_style(node, "top", &format!("{}px", sample.y));
}

pub fn toggle_class(node: &NodeRef, class: &str, on: bool) {
    if let Some(element) = node.cast::<Element>() {
        let list = element.class_list();
        let result = if on { list.add_1(class) } else { list.remove_1(class) };
        if let Err(e) = result {
            warn!("Failed to toggle {}: {}", class, HostError::from(e));
        }
    }
}
