pub mod config;
pub mod dictionary;
pub mod drill;
pub mod error;
pub mod layouts;
pub mod matcher;
pub mod render;
pub mod session;
pub mod stroke;
pub mod system;
pub mod wordmap;
// cmd and reports are binary modules (see main.rs).
