//! Native application for the tracker.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`tracker_app`] | [`TrackerApp`] (eframe) wrapper: scheduling, hotkeys, panel layout |
//! | [`run`]         | [`run_tracker()`] entry point and icon loading |

mod run;
mod tracker_app;

pub use run::run_tracker;
pub use tracker_app::TrackerApp;
