pub mod axis;
pub mod frames;
pub mod history;
pub mod ring;
pub mod view_window;
