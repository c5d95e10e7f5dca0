//! Rendering of screenplay tokens into markup

mod html;
mod renderer;

pub use html::Html;
pub use renderer::*;
