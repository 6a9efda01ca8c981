pub mod cli;
pub mod clock;
pub mod config;
pub mod input;
pub mod math;
pub mod replay;
pub mod trackball;
pub mod types;
pub mod viewport;

pub use config::TrackballConfig;
pub use trackball::{DragState, Trackball};
pub use viewport::Viewport;
