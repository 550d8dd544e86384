pub mod components;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod input;
pub mod map;
pub mod params;
pub mod present;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use engine::*;
pub use error::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use present::*;
pub use resources::*;
