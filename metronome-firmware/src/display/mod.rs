//! Display rendering
//!
//! The controller edits a [`Screen`] model; the display task turns it into
//! pixels with [`draw_face`] and pushes them to the panel.

mod renderer;
mod screen;

pub use renderer::draw_face;
pub use screen::Screen;
