//! Grid Snake - the classic Snake game on a bounded grid
//!
//! This library provides:
//! - Core game logic (game module), free of any I/O
//! - Terminal front end pieces: key mapping (input), ratatui drawing (render),
//!   session clock (metrics) and the event loop (modes)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
