//! Data models for Estante

pub mod book;

pub use book::{Book, CreateBook};
