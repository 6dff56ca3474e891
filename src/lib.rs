pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod scorer;
pub mod session;
// cmd and reports belong to the binary crate (main.rs).
