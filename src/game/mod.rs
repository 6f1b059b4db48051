//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A [`Game`] owns its [`Board`], [`Snake`] and apples and is advanced one tick at a
//! time with [`Game::update`].

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod snake;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use board::{Board, Cell, Position};
pub use config::GameConfig;
pub use engine::{EndReason, Game, StepInfo, StepResult};
pub use error::GameError;
pub use snake::{Orientation, Snake};
