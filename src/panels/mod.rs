//! Drawing code for the tracker window. Each panel only reads the render
//! model in [`crate::data::frames`]; the control strip is the one place that
//! writes back into [`crate::tracker::TrackerState`].

pub mod controls_ui;
pub mod history_ui;
pub mod position_ui;

pub use controls_ui::ControlsResponse;
