//! PDF renderer using lopdf.
//!
//! Builds the whole document object graph in memory with the standard Helvetica faces and
//! writes it out in one go when the renderer is finished.

mod helpers;
mod renderer;

pub use helpers::render_page_content;
pub use renderer::LopdfRenderer;
