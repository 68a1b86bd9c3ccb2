use std::rc::Rc;

use log::info;

use crate::config::TiltConfig;
use crate::engine::cell::VisualCell;
use crate::engine::host::{EventHost, EventKind, HostEvent, ListenerSet};
use crate::engine::pointer::PointerSample;
use crate::error::HostError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelRect {
    pub fn center(&self) -> PointerSample {
        PointerSample::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Current bounding box of the panel, or `None` while it isn't mounted.
pub trait PanelBounds {
    fn bounds(&self) -> Option<PanelRect>;
}

/// Rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltVector {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltVector {
    pub fn toward(pointer: PointerSample, rect: PanelRect, config: &TiltConfig) -> Self {
        let center = rect.center();
        let clamp = |d: f64| d.clamp(-config.limit, config.limit);
        let dx = clamp((pointer.x - center.x) / config.divisor);
        let dy = clamp((pointer.y - center.y) / config.divisor);
        Self {
            rotate_x: -dy,
            rotate_y: dx,
        }
    }

    pub fn to_css(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            config.perspective_px, self.rotate_x, self.rotate_y, config.lift_px
        )
    }
}

pub struct TiltPanel<P> {
    config: TiltConfig,
    bounds: P,
    tilt: VisualCell<TiltVector>,
}

impl<P: PanelBounds> TiltPanel<P> {
    pub fn new(config: TiltConfig, bounds: P) -> Self {
        Self {
            config,
            bounds,
            tilt: VisualCell::new("island-tilt", TiltVector::default()),
        }
    }

    pub fn tilt(&self) -> &VisualCell<TiltVector> {
        &self.tilt
    }

    /// Recomputes from the panel's current bounds. No-op while unmounted.
    pub fn on_move(&self, pointer: PointerSample) -> Option<TiltVector> {
        let rect = self.bounds.bounds()?;
        let vector = TiltVector::toward(pointer, rect, &self.config);
        self.tilt.set(vector);
        Some(vector)
    }
}

impl<P: PanelBounds + 'static> TiltPanel<P> {
    pub fn mount(self: &Rc<Self>, host: Rc<dyn EventHost>) -> Result<ListenerSet, HostError> {
        let mut listeners = ListenerSet::new("tilt-panel", host);
        let panel = self.clone();
        listeners.attach(EventKind::PointerMove, move |event| {
            if let HostEvent::PointerMove(sample) = event {
                panel.on_move(*sample);
            }
        })?;
        info!("Tilt panel mounted");
        Ok(listeners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::host::testing::FakeHost;
    use std::cell::Cell;

    struct FixedBounds(Cell<Option<PanelRect>>);

    impl PanelBounds for FixedBounds {
        fn bounds(&self) -> Option<PanelRect> {
            self.0.get()
        }
    }

    fn rect() -> PanelRect {
        // Center at (500, 300)
        PanelRect {
            left: 100.0,
            top: 200.0,
            width: 800.0,
            height: 200.0,
        }
    }

    fn panel(bounds: Option<PanelRect>) -> TiltPanel<FixedBounds> {
        TiltPanel::new(TiltConfig::default(), FixedBounds(Cell::new(bounds)))
    }

    #[test]
    fn far_pointer_is_clamped_to_the_limit() {
        let panel = panel(Some(rect()));
        let v = panel.on_move(PointerSample::new(900.0, 300.0)).unwrap();
        assert_eq!(v.rotate_y, 10.0);
        assert_eq!(v.rotate_x, 0.0);

        let v = panel.on_move(PointerSample::new(-2000.0, 5000.0)).unwrap();
        assert_eq!(v.rotate_y, -10.0);
        assert_eq!(v.rotate_x, -10.0);
    }

    #[test]
    fn small_offsets_scale_by_the_divisor() {
        let panel = panel(Some(rect()));
        let v = panel.on_move(PointerSample::new(560.0, 200.0)).unwrap();
        assert_eq!(v.rotate_y, 3.0);
        assert_eq!(v.rotate_x, 5.0);
    }

    #[test]
    fn unmounted_panel_is_a_silent_no_op() {
        let panel = panel(None);
        assert_eq!(panel.on_move(PointerSample::new(900.0, 300.0)), None);
        assert_eq!(panel.tilt().get(), TiltVector::default());
    }

    #[test]
    fn follows_the_panel_when_it_moves() {
        let panel = panel(Some(rect()));
        panel.on_move(PointerSample::new(600.0, 300.0));
        assert_eq!(panel.tilt().get().rotate_y, 5.0);

        panel.bounds.0.set(Some(PanelRect { left: 200.0, ..rect() }));
        panel.on_move(PointerSample::new(600.0, 300.0));
        assert_eq!(panel.tilt().get().rotate_y, 0.0);
    }

    #[test]
    fn css_applies_perspective_and_lift() {
        let v = TiltVector {
            rotate_x: -2.5,
            rotate_y: 4.0,
        };
        assert_eq!(
            v.to_css(&TiltConfig::default()),
            "perspective(1000px) rotateX(-2.5deg) rotateY(4deg) translateZ(10px)"
        );
    }

    #[test]
    fn listens_on_pointer_move_until_teardown() {
        let host = FakeHost::new();
        let panel = Rc::new(panel(Some(rect())));
        let mut listeners = panel.mount(host.clone()).unwrap();

        host.dispatch(HostEvent::PointerMove(PointerSample::new(700.0, 300.0)));
        assert_eq!(panel.tilt().get().rotate_y, 10.0);

        listeners.teardown();
        host.dispatch(HostEvent::PointerMove(PointerSample::new(500.0, 300.0)));
        assert_eq!(panel.tilt().get().rotate_y, 10.0);
    }
}
