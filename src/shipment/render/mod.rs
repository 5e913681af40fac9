//! Text rendering for projector views.

mod renderer;
mod templates;

pub use renderer::{RenderError, RenderResult, ViewRenderer};
