#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;
extern crate time;

#[macro_use]
mod utils;

pub mod config;
pub mod error;
pub mod input;
pub mod interactor;
pub mod models;
pub mod render;
pub mod simulation;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::simulation::World;
