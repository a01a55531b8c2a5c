//! Simulation engine for a single-player snake game on a walled square grid.
//!
//! The snake eats pickups that change its score, speed, and length, and dies
//! when it runs into a wall, itself, or a lethal pickup.  In chaos mode,
//! pickups also appear and vanish on their own.  Results are ranked in a
//! small high score table that can be saved to disk.
//!
//! Drawing the board and reading the keyboard are left to the front end,
//! which drives a [`Game`][game::Game] with [`Command`][command::Command]s
//! and elapsed time.
pub mod autopilot;
pub mod command;
pub mod config;
pub mod consts;
pub mod game;
pub mod highscores;
pub mod options;
