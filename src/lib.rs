//! # Connect Four TUI
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Pieces fall under gravity into one of the board's columns until a
//! player lines up four horizontally, vertically, or diagonally, or the
//! board fills for a tie.
//!
//! All rules live in the [`game`] engine; the UI layer only relays
//! column choices and reflects results.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`ui`] — Terminal UI: app loop and board view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
