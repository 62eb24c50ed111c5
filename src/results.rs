//! Results pane module for ding
//!
//! Holds and renders the outcome of the last fetch-notifications request.

pub mod results_render;
pub mod results_state;

pub use results_render::render_pane;
pub use results_state::{FetchOutcome, ResultsState};
