#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
mod ui;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use ui::*;
