use std::cell::Cell;
use std::rc::Rc;

use log::info;

use crate::config::{CursorConfig, OutlineOrdering};
use crate::engine::cell::VisualCell;
use crate::engine::host::{EventHost, EventKind, HostEvent, ListenerSet, Scheduler};
use crate::error::HostError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An outline update waiting for its delay to elapse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingOutline {
    seq: u64,
    sample: PointerSample,
}

/// Drives the cursor dot, the lagging outline, and their shared visibility.
pub struct PointerTracker {
    config: CursorConfig,
    dot: VisualCell<PointerSample>,
    outline: VisualCell<PointerSample>,
    visible: VisualCell<bool>,
    next_seq: Cell<u64>,
    // Sequence number of the last outline update that landed; 0 means none.
    applied_seq: Cell<u64>,
}

impl PointerTracker {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            config,
            dot: VisualCell::new("cursor-dot", PointerSample::default()),
            outline: VisualCell::new("cursor-outline", PointerSample::default()),
            visible: VisualCell::new("cursor-visible", true),
            next_seq: Cell::new(1),
            applied_seq: Cell::new(0),
        }
    }

    pub fn dot(&self) -> &VisualCell<PointerSample> {
        &self.dot
    }

    pub fn outline(&self) -> &VisualCell<PointerSample> {
        &self.outline
    }

    pub fn visible(&self) -> &VisualCell<bool> {
        &self.visible
    }

    pub fn on_move(&self, sample: PointerSample) -> PendingOutline {
        self.dot.set(sample);
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        PendingOutline { seq, sample }
    }

    /// Applies a delayed outline update. Returns false when the ordering policy
    /// discards it.
    pub fn settle(&self, pending: PendingOutline) -> bool {
        if self.config.ordering == OutlineOrdering::Monotonic
            && pending.seq < self.applied_seq.get()
        {
            return false;
        }
        self.applied_seq.set(pending.seq.max(self.applied_seq.get()));
        self.outline.set(pending.sample);
        true
    }

    pub fn on_leave(&self) {
        self.visible.set(false);
    }

    pub fn on_enter(&self) {
        self.visible.set(true);
    }

    /// Attaches move/enter/leave on `host`. Outline updates go through
    /// `scheduler` and are dropped once the returned set is torn down.
    pub fn mount(
        self: &Rc<Self>,
        host: Rc<dyn EventHost>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<ListenerSet, HostError> {
        let mut listeners = ListenerSet::new("pointer-tracker", host);
        let liveness = listeners.liveness();

        {
            let tracker = self.clone();
            listeners.attach(EventKind::PointerMove, move |event| {
                if let HostEvent::PointerMove(sample) = event {
                    let pending = tracker.on_move(*sample);
                    let tracker = tracker.clone();
                    let liveness = liveness.clone();
                    scheduler.after(
                        tracker.config.outline_delay_ms,
                        Box::new(move || {
                            if liveness.is_live() {
                                tracker.settle(pending);
                            }
                        }),
                    );
                }
            })?;
        }
        {
            let tracker = self.clone();
            listeners.attach(EventKind::PointerLeave, move |_| tracker.on_leave())?;
        }
        {
            let tracker = self.clone();
            listeners.attach(EventKind::PointerEnter, move |_| tracker.on_enter())?;
        }

        info!("Pointer tracker mounted with {} listeners", listeners.attached());
        Ok(listeners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::host::testing::{FakeHost, ManualScheduler};

    fn mounted(
        ordering: OutlineOrdering,
    ) -> (Rc<PointerTracker>, Rc<FakeHost>, Rc<ManualScheduler>, ListenerSet) {
        let tracker = Rc::new(PointerTracker::new(CursorConfig {
            ordering,
            ..CursorConfig::default()
        }));
        let host = FakeHost::new();
        let scheduler = ManualScheduler::new();
        let listeners = tracker.mount(host.clone(), scheduler.clone()).unwrap();
        (tracker, host, scheduler, listeners)
    }

    fn move_to(host: &FakeHost, x: f64, y: f64) {
        host.dispatch(HostEvent::PointerMove(PointerSample::new(x, y)));
    }

    #[test]
    fn dot_follows_the_latest_sample_immediately() {
        let (tracker, host, _scheduler, _listeners) = mounted(OutlineOrdering::Monotonic);
        move_to(&host, 10.0, 20.0);
        move_to(&host, 30.0, 40.0);
        assert_eq!(tracker.dot().get(), PointerSample::new(30.0, 40.0));
    }

    #[test]
    fn outline_lags_one_delay_behind() {
        let (tracker, host, scheduler, _listeners) = mounted(OutlineOrdering::Monotonic);
        move_to(&host, 10.0, 10.0);
        scheduler.advance(20);
        move_to(&host, 50.0, 50.0);

        scheduler.advance(29);
        assert_eq!(tracker.outline().get(), PointerSample::default());

        scheduler.advance(1); // 50ms after the first move
        assert_eq!(tracker.outline().get(), PointerSample::new(10.0, 10.0));

        scheduler.advance(20);
        assert_eq!(tracker.outline().get(), PointerSample::new(50.0, 50.0));
    }

    #[test]
    fn monotonic_ordering_drops_stale_timers() {
        let (tracker, host, scheduler, _listeners) = mounted(OutlineOrdering::Monotonic);
        move_to(&host, 1.0, 1.0);
        move_to(&host, 2.0, 2.0);
        move_to(&host, 3.0, 3.0);

        scheduler.fire_newest_first();
        assert_eq!(tracker.outline().get(), PointerSample::new(3.0, 3.0));
    }

    #[test]
    fn fire_order_keeps_the_out_of_order_jump() {
        let (tracker, host, scheduler, _listeners) = mounted(OutlineOrdering::FireOrder);
        move_to(&host, 1.0, 1.0);
        move_to(&host, 2.0, 2.0);
        move_to(&host, 3.0, 3.0);

        scheduler.fire_newest_first();
        assert_eq!(tracker.outline().get(), PointerSample::new(1.0, 1.0));
    }

    #[test]
    fn leave_and_enter_toggle_visibility_only() {
        let (tracker, host, _scheduler, _listeners) = mounted(OutlineOrdering::Monotonic);
        host.dispatch(HostEvent::PointerLeave);
        assert!(!tracker.visible().get());

        move_to(&host, 5.0, 6.0);
        assert_eq!(tracker.dot().get(), PointerSample::new(5.0, 6.0));
        assert!(!tracker.visible().get());

        host.dispatch(HostEvent::PointerEnter);
        assert!(tracker.visible().get());
    }

    #[test]
    fn nothing_fires_after_teardown() {
        let (tracker, host, scheduler, mut listeners) = mounted(OutlineOrdering::Monotonic);
        move_to(&host, 8.0, 8.0);
        listeners.teardown();

        scheduler.advance(100);
        assert_eq!(tracker.outline().get(), PointerSample::default());

        move_to(&host, 9.0, 9.0);
        host.dispatch(HostEvent::PointerLeave);
        assert_eq!(tracker.dot().get(), PointerSample::new(8.0, 8.0));
        assert!(tracker.visible().get());
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn subscribers_see_marker_writes() {
        let tracker = PointerTracker::new(CursorConfig::default());
        let writes = Rc::new(std::cell::RefCell::new(Vec::new()));
        {
            let writes = writes.clone();
            tracker.dot().subscribe(move |s| writes.borrow_mut().push(*s));
        }
        let pending = tracker.on_move(PointerSample::new(4.0, 2.0));
        assert_eq!(pending.sample, PointerSample::new(4.0, 2.0));
        assert_eq!(*writes.borrow(), vec![PointerSample::new(4.0, 2.0)]);
    }
}
