//! A small function plotter.
//!
//! Text typed by the user is normalized into an expression of `x` ([`normalizer`]), sampled over a
//! fixed domain and drawn with its axes onto any [`plot::DrawingSurface`] ([`plot`]). The
//! [`session::Session`] ties the two together the way a front-end uses them: only a successfully
//! normalized expression ever replaces the one on screen.

pub mod error;
pub mod expr_engine;
pub mod normalizer;
pub mod plot;
pub mod session;

pub use error::ExpressionError;
pub use normalizer::{normalize, NormalizedExpression};
pub use session::Session;
