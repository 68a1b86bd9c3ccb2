use std::cell::Cell;
use std::rc::Rc;

use log::warn;

use crate::engine::pointer::PointerSample;
use crate::error::HostError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    PointerEnter,
    PointerLeave,
    Scroll,
}

impl EventKind {
    /// DOM event name the web host listens for.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::PointerMove => "mousemove",
            EventKind::PointerEnter => "mouseenter",
            EventKind::PointerLeave => "mouseleave",
            EventKind::Scroll => "scroll",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    PointerMove(PointerSample),
    PointerEnter,
    PointerLeave,
    Scroll,
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerMove(_) => EventKind::PointerMove,
            HostEvent::PointerEnter => EventKind::PointerEnter,
            HostEvent::PointerLeave => EventKind::PointerLeave,
            HostEvent::Scroll => EventKind::Scroll,
        }
    }
}

pub type Handler = Rc<dyn Fn(&HostEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(pub u64);

/// Something events can be listened on: the document, the window, or a fake.
pub trait EventHost {
    fn add_listener(&self, kind: EventKind, handler: Handler) -> Result<ListenerId, HostError>;
    fn remove_listener(&self, id: ListenerId) -> Result<(), HostError>;
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Cleared when the owning `ListenerSet` is torn down. Deferred work checks it
/// before touching anything.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

/// The listeners one engine attached. Attach during init, tear down once.
pub struct ListenerSet {
    owner: &'static str,
    host: Rc<dyn EventHost>,
    ids: Vec<ListenerId>,
    live: Rc<Cell<bool>>,
}

impl ListenerSet {
    pub fn new(owner: &'static str, host: Rc<dyn EventHost>) -> Self {
        Self {
            owner,
            host,
            ids: Vec::new(),
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn attach(
        &mut self,
        kind: EventKind,
        handler: impl Fn(&HostEvent) + 'static,
    ) -> Result<(), HostError> {
        if !self.live.get() {
            return Err(HostError::TornDown);
        }
        let id = self.host.add_listener(kind, Rc::new(handler))?;
        self.ids.push(id);
        Ok(())
    }

    pub fn liveness(&self) -> Liveness {
        Liveness(self.live.clone())
    }

    pub fn attached(&self) -> usize {
        self.ids.len()
    }

    /// Detaches every listener. Later calls do nothing.
    pub fn teardown(&mut self) {
        if !self.live.replace(false) {
            return;
        }
        for id in self.ids.drain(..) {
            if let Err(e) = self.host.remove_listener(id) {
                warn!("{}: failed to detach listener {:?}: {}", self.owner, id, e);
            }
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.teardown();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeHost;
    use super::*;

    #[test]
    fn teardown_detaches_every_listener_once() {
        let host = FakeHost::new();
        let hits = Rc::new(Cell::new(0));
        let mut set = ListenerSet::new("test", host.clone());
        for kind in [EventKind::PointerMove, EventKind::PointerEnter, EventKind::PointerLeave] {
            let hits = hits.clone();
            set.attach(kind, move |_| hits.set(hits.get() + 1)).unwrap();
        }
        assert_eq!(set.attached(), 3);
        assert_eq!(host.dispatch(HostEvent::PointerEnter), 1);

        set.teardown();
        set.teardown();
        assert_eq!(host.listener_count(), 0);
        assert_eq!(host.removed_count(), 3);
        assert_eq!(host.dispatch(HostEvent::PointerLeave), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn attach_after_teardown_is_rejected() {
        let host = FakeHost::new();
        let mut set = ListenerSet::new("test", host.clone());
        set.teardown();
        assert_eq!(set.attach(EventKind::Scroll, |_| {}), Err(HostError::TornDown));
        assert_eq!(host.listener_count(), 0);
        assert!(!set.liveness().is_live());
    }

    #[test]
    fn dropping_the_set_detaches() {
        let host = FakeHost::new();
        {
            let mut set = ListenerSet::new("test", host.clone());
            set.attach(EventKind::Scroll, |_| {}).unwrap();
            assert_eq!(host.listener_count(), 1);
        }
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn dom_names_match_mouse_and_scroll_events() {
        assert_eq!(EventKind::PointerMove.dom_name(), "mousemove");
        assert_eq!(EventKind::PointerLeave.dom_name(), "mouseleave");
        assert_eq!(HostEvent::Scroll.kind().dom_name(), "scroll");
    }
}
