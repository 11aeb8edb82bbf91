//! Value types for light control parameters.

mod brightness;
mod color;
mod kelvin;
mod scene;
mod speed;

pub use brightness::Brightness;
pub use color::{Color, ColorSpec};
pub use kelvin::Kelvin;
pub use scene::SceneMode;
pub use speed::Speed;
