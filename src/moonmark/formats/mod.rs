//! Output formats for formatted blocks
//!
//! - [`html`]: the markup fragment handed to the renderer (the engine's main output)
//! - [`json`]: the typed block sequence, for inspection and tooling

pub mod html;
pub mod json;

pub use html::{HtmlRenderer, RenderOptions};
