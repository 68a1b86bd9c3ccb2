use std::rc::Rc;

use log::{debug, info};

use crate::config::ScrollConfig;
use crate::engine::host::{EventHost, EventKind, ListenerSet, Scheduler};
use crate::engine::registry::Registry;
use crate::error::HostError;

/// A background element that moves at a fraction of the scroll distance.
pub trait LayerSurface {
    /// Declared speed, if the element carries a readable one.
    fn speed(&self) -> Option<f64>;
    fn set_offset(&self, offset_px: f64);
}

/// A content block that fades in once it nears the viewport.
pub trait RevealSurface {
    /// Top edge relative to the viewport; `None` while not mounted.
    fn top(&self) -> Option<f64>;
    fn reveal(&self);
}

pub trait Viewport {
    fn frame(&self) -> Option<ScrollFrame>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    pub layers_moved: usize,
    pub newly_revealed: usize,
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Reads a `data-speed` value. Anything that isn't a finite number is rejected
/// so the caller falls back to the configured default.
pub fn parse_speed(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|speed| speed.is_finite())
}

pub fn should_reveal(top: f64, viewport_height: f64, threshold: f64) -> bool {
    top < viewport_height - threshold
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollEngine {
    config: ScrollConfig,
}

impl ScrollEngine {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    /// Parallax pass followed by reveal pass over everything registered.
    pub fn run_pass<L: LayerSurface, B: RevealSurface>(
        &self,
        frame: ScrollFrame,
        registry: &Registry<L, B>,
    ) -> PassReport {
        let mut report = PassReport::default();

        registry.for_each_layer(|layer| {
            let speed = layer.speed().unwrap_or(self.config.default_speed);
            layer.set_offset(parallax_offset(frame.scroll_y, speed));
            report.layers_moved += 1;
        });

        registry.for_each_block(|entry| {
            if entry.flag.is_revealed() {
                return;
            }
            let Some(top) = entry.surface.top() else {
                return;
            };
            if should_reveal(top, frame.viewport_height, self.config.reveal_threshold)
                && entry.flag.reveal()
            {
                entry.surface.reveal();
                report.newly_revealed += 1;
            }
        });

        report
    }

    /// Runs a pass on every scroll event, plus one seeded pass after
    /// `seed_delay_ms` so blocks already in view reveal without scrolling.
    pub fn mount<L, B>(
        self,
        host: Rc<dyn EventHost>,
        scheduler: &dyn Scheduler,
        viewport: Rc<dyn Viewport>,
        registry: Registry<L, B>,
    ) -> Result<ListenerSet, HostError>
    where
        L: LayerSurface + 'static,
        B: RevealSurface + 'static,
    {
        let mut listeners = ListenerSet::new("scroll-engine", host);
        let registry_layers = registry.layer_count();

        {
            let viewport = viewport.clone();
            let registry = registry.clone();
            listeners.attach(EventKind::Scroll, move |_| {
                if let Some(frame) = viewport.frame() {
                    self.run_pass(frame, &registry);
                }
            })?;
        }

        let liveness = listeners.liveness();
        scheduler.after(
            self.config.seed_delay_ms,
            Box::new(move || {
                if !liveness.is_live() {
                    return;
                }
                if let Some(frame) = viewport.frame() {
                    let report = self.run_pass(frame, &registry);
                    debug!(
                        "Seed pass moved {} layers, revealed {} of {} blocks",
                        report.layers_moved,
                        report.newly_revealed,
                        registry.block_count()
                    );
                }
            }),
        );

        info!("Scroll engine mounted with {} layers registered", registry_layers);
        Ok(listeners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::host::testing::{FakeHost, ManualScheduler};
    use crate::engine::host::HostEvent;
    use std::cell::{Cell, RefCell};

    #[derive(Clone)]
    struct FakeLayer {
        speed: Option<f64>,
        offset: Rc<Cell<Option<f64>>>,
    }

    impl FakeLayer {
        fn new(speed: Option<f64>) -> Self {
            Self {
                speed,
                offset: Rc::new(Cell::new(None)),
            }
        }
    }

    impl LayerSurface for FakeLayer {
        fn speed(&self) -> Option<f64> {
            self.speed
        }

        fn set_offset(&self, offset_px: f64) {
            self.offset.set(Some(offset_px));
        }
    }

    #[derive(Clone)]
    struct FakeBlock {
        top: Rc<Cell<Option<f64>>>,
        reveals: Rc<Cell<usize>>,
    }

    impl FakeBlock {
        fn at(top: f64) -> Self {
            Self {
                top: Rc::new(Cell::new(Some(top))),
                reveals: Rc::new(Cell::new(0)),
            }
        }
    }

    impl RevealSurface for FakeBlock {
        fn top(&self) -> Option<f64> {
            self.top.get()
        }

        fn reveal(&self) {
            self.reveals.set(self.reveals.get() + 1);
        }
    }

    struct FakeViewport(RefCell<ScrollFrame>);

    impl FakeViewport {
        fn scrolled(scroll_y: f64) -> Rc<Self> {
            Rc::new(Self(RefCell::new(ScrollFrame {
                scroll_y,
                viewport_height: 800.0,
            })))
        }
    }

    impl Viewport for FakeViewport {
        fn frame(&self) -> Option<ScrollFrame> {
            Some(*self.0.borrow())
        }
    }

    fn frame(scroll_y: f64) -> ScrollFrame {
        ScrollFrame {
            scroll_y,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn offset_is_linear_in_scroll_position() {
        for speed in [0.01, 0.03, 0.05, 0.1, 0.5, 1.0] {
            for step in 0..200 {
                let s = f64::from(step) * 37.5;
                assert_eq!(parallax_offset(s, speed), s * speed);
            }
        }
    }

    #[test]
    fn parallax_pass_uses_declared_or_default_speed() {
        let registry = Registry::new();
        let declared = FakeLayer::new(Some(0.05));
        let undeclared = FakeLayer::new(None);
        registry.add_layer(declared.clone());
        registry.add_layer(undeclared.clone());
        registry.add_block(FakeBlock::at(2000.0));

        let engine = ScrollEngine::new(ScrollConfig::default());
        let report = engine.run_pass(frame(400.0), &registry);
        assert_eq!(report.layers_moved, 2);
        assert_eq!(declared.offset.get(), Some(400.0 * 0.05));
        assert_eq!(undeclared.offset.get(), Some(400.0 * 0.1));

        engine.run_pass(frame(400.0), &registry);
        assert_eq!(declared.offset.get(), Some(400.0 * 0.05));
    }

    #[test]
    fn unreadable_speeds_fall_back_to_the_default() {
        assert_eq!(parse_speed(" 0.05 "), Some(0.05));
        assert_eq!(parse_speed("abc"), None);
        assert_eq!(parse_speed(""), None);
        assert_eq!(parse_speed("NaN"), None);
        assert_eq!(parse_speed("inf"), None);

        let registry = Registry::new();
        let padded = FakeLayer::new(parse_speed(" 0.05 "));
        let garbled = FakeLayer::new(parse_speed("abc"));
        let missing = FakeLayer::new(None);
        for layer in [&padded, &garbled, &missing] {
            registry.add_layer(layer.clone());
        }
        registry.add_block(FakeBlock::at(2000.0));

        ScrollEngine::default_page().run_pass(frame(200.0), &registry);
        let fallback = 200.0 * ScrollConfig::default().default_speed;
        assert_eq!(padded.offset.get(), Some(200.0 * 0.05));
        assert_eq!(garbled.offset.get(), Some(fallback));
        assert_eq!(missing.offset.get(), Some(fallback));
    }

    #[test]
    fn reveal_threshold_is_strict() {
        let registry: Registry<FakeLayer, FakeBlock> = Registry::new();
        let edge = FakeBlock::at(650.0);
        let inside = FakeBlock::at(649.0);
        let edge_id = registry.add_block(edge.clone());
        let inside_id = registry.add_block(inside.clone());

        let report = ScrollEngine::default_page().run_pass(frame(0.0), &registry);
        assert_eq!(report.newly_revealed, 1);
        assert!(!registry.is_revealed(edge_id));
        assert!(registry.is_revealed(inside_id));
    }

    #[test]
    fn revealed_blocks_stay_revealed() {
        let registry: Registry<FakeLayer, FakeBlock> = Registry::new();
        let block = FakeBlock::at(100.0);
        let id = registry.add_block(block.clone());
        let engine = ScrollEngine::default_page();

        engine.run_pass(frame(0.0), &registry);
        block.top.set(Some(-5000.0));
        engine.run_pass(frame(6000.0), &registry);
        block.top.set(Some(9000.0));
        let report = engine.run_pass(frame(0.0), &registry);

        assert!(registry.is_revealed(id));
        assert_eq!(report.newly_revealed, 0);
        assert_eq!(block.reveals.get(), 1);
    }

    #[test]
    fn unmounted_blocks_are_skipped() {
        let registry: Registry<FakeLayer, FakeBlock> = Registry::new();
        let block = FakeBlock::at(0.0);
        block.top.set(None);
        let id = registry.add_block(block);
        ScrollEngine::default_page().run_pass(frame(0.0), &registry);
        assert!(!registry.is_revealed(id));
    }

    #[test]
    fn seed_pass_reveals_blocks_already_in_view() {
        let host = FakeHost::new();
        let scheduler = ManualScheduler::new();
        let registry: Registry<FakeLayer, FakeBlock> = Registry::new();
        let above_fold = FakeBlock::at(300.0);
        let below_fold = FakeBlock::at(1200.0);
        let above_id = registry.add_block(above_fold);
        let below_id = registry.add_block(below_fold);

        let _listeners = ScrollEngine::default_page()
            .mount(host.clone(), &*scheduler, FakeViewport::scrolled(0.0), registry.clone())
            .unwrap();

        scheduler.advance(99);
        assert!(!registry.is_revealed(above_id));
        scheduler.advance(1);
        assert!(registry.is_revealed(above_id));
        assert!(!registry.is_revealed(below_id));
    }

    #[test]
    fn scroll_events_drive_passes_until_teardown() {
        let host = FakeHost::new();
        let scheduler = ManualScheduler::new();
        let registry: Registry<FakeLayer, FakeBlock> = Registry::new();
        let layer = FakeLayer::new(Some(0.5));
        registry.add_layer(layer.clone());
        let viewport = FakeViewport::scrolled(200.0);

        let mut listeners = ScrollEngine::default_page()
            .mount(host.clone(), &*scheduler, viewport.clone(), registry.clone())
            .unwrap();

        assert_eq!(host.dispatch(HostEvent::Scroll), 1);
        assert_eq!(layer.offset.get(), Some(100.0));

        listeners.teardown();
        viewport.0.borrow_mut().scroll_y = 1000.0;
        assert_eq!(host.dispatch(HostEvent::Scroll), 0);
        scheduler.advance(100);
        assert_eq!(layer.offset.get(), Some(100.0));
    }

    impl ScrollEngine {
        fn default_page() -> Self {
            ScrollEngine::new(ScrollConfig::default())
        }
    }
}
