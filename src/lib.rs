//! The classic grid Snake game: a wrap-around board, one fruit at a time, and a
//! fixed-period game loop, with a terminal front end.

pub mod config;
pub mod fruit;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
