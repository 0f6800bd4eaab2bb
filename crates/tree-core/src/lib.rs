pub mod config;
pub mod constants;
pub mod controller;
pub mod focus;
pub mod frame;
pub mod gallery;
pub mod spiral;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use focus::*;
pub use frame::*;
pub use gallery::*;
pub use spiral::*;
pub use state::*;
