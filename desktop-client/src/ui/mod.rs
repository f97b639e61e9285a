mod app;
mod board;
mod controls;

pub use app::SnakeApp;
