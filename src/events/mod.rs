pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_escape_closes_overlays;
pub use pointer::{wire_marquee_input, wire_resize};
