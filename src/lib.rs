pub mod assets;
pub mod canvas;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
