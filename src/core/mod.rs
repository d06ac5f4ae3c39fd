pub mod app;
pub mod console;
pub mod engine;
pub mod terminal; // Plain-mode output wrapper
