pub mod app;
pub mod camera;
pub mod cell;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod map;
pub mod render;
pub mod rule_set;
pub mod world;

pub type ScreenSize = u16;
pub type GridOffset = isize;
