pub mod config;
pub mod constants;
pub mod debounce;
pub mod marquee;
pub mod nav;
pub mod overlay;
pub mod registry;
pub mod reveal;
pub mod scheduler;

pub use config::*;
pub use debounce::*;
pub use marquee::*;
pub use nav::*;
pub use overlay::*;
pub use registry::*;
pub use reveal::*;
pub use scheduler::*;
