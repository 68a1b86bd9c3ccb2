//! Browser-independent logic behind the page's interactive effects: the
//! cursor, the parallax/reveal pass and the tilting preview panel. Nothing in
//! here touches `web-sys`; `crate::web` adapts it to the real document.

pub mod cell;
pub mod host;
pub mod pointer;
pub mod registry;
pub mod scroll;
pub mod tilt;
