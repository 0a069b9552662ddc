//! # Presentation Layer
//!
//! Turns decoded stream events into text fragments.
//!
//! ```text
//! [ StreamEvent ] --> [ TextRenderer ] --> [ formatters ] --> fragment (String)
//!                      (per-kind dispatch)   (color, text, number, tool)
//! ```
//!
//! Renderers never write to a sink; the streaming driver owns all I/O.

pub mod formatters;
pub mod renderers;

pub use renderers::{TextRenderer, render_line};
