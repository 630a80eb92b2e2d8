mod app;
mod bridge;
mod config;
mod dom;
mod editor;
mod geometry;
mod net;
mod notify;
mod render;
mod state;

pub use app::run;
