pub mod engine;
pub mod format;
pub mod history;
pub mod models;
pub mod ring_buffer;
