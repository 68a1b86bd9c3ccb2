use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose pass reports while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How out-of-order outline timers are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutlineOrdering {
    /// Drop a delayed update if a newer one already landed.
    Monotonic,
    /// Apply every delayed update in the order its timer fires.
    FireOrder,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    /// Lag between the dot and the outline marker.
    pub outline_delay_ms: u32,
    pub ordering: OutlineOrdering,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            outline_delay_ms: 50,
            ordering: OutlineOrdering::Monotonic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// A block reveals once its top is this many px above the viewport bottom.
    pub reveal_threshold: f64,
    /// Delay before the first pass that runs without a scroll event.
    pub seed_delay_ms: u32,
    /// Speed used by layers without a readable `data-speed` attribute.
    pub default_speed: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 150.0,
            seed_delay_ms: 100,
            default_speed: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Pointer offset (px) is divided by this before clamping.
    pub divisor: f64,
    /// Rotation is clamped to `[-limit, limit]` degrees.
    pub limit: f64,
    pub perspective_px: f64,
    pub lift_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            divisor: 20.0,
            limit: 10.0,
            perspective_px: 1000.0,
            lift_px: 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub cursor: CursorConfig,
    pub scroll: ScrollConfig,
    pub tilt: TiltConfig,
}
