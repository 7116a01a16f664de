pub mod canvas;
#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod diagrams;
pub mod draw;
pub mod error;
pub mod font;
pub mod theme;

pub use canvas::Canvas;
#[cfg(feature = "cli")]
pub use cli::run;
pub use color::Color;
pub use error::RenderError;
pub use theme::{Palette, Theme};
