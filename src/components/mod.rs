pub mod background;
pub mod cursor;
pub mod icons;
pub mod island;
pub mod reveal;
