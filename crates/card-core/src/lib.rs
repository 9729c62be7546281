pub mod card;
pub mod channels;
pub mod constants;
pub mod engine;
pub mod idle;
pub mod input;
pub mod presets;
pub mod scheduler;
pub mod settings;
pub mod sink;
pub mod smoothing;
pub mod stripes;

pub use card::*;
pub use channels::*;
pub use engine::*;
pub use idle::*;
pub use input::*;
pub use presets::*;
pub use scheduler::*;
pub use settings::*;
pub use sink::*;
pub use stripes::*;

pub use glam::Vec2;
