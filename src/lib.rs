pub mod arena;
pub mod compute;
pub mod config;
pub mod display;
pub mod driver;
pub mod entities;
pub mod games;
pub mod input;
pub mod phase;
pub mod scenery;
