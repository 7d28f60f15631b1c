#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod coord;
mod game;
mod grid;
mod player;
mod ship;
mod snapshot;
#[cfg(feature = "std")]
pub mod api;
#[cfg(feature = "std")]
pub mod autoplay;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod matchmaker;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
mod view;

pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use grid::*;
pub use player::*;
pub use ship::*;
pub use snapshot::*;
#[cfg(feature = "std")]
pub use api::GameApi;
#[cfg(feature = "std")]
pub use autoplay::{Autoplayer, GameReport};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use matchmaker::{MatchTicket, Matchmaker};
#[cfg(feature = "std")]
pub use session::{Session, WaitOutcome};
#[cfg(feature = "std")]
pub use view::PlayerView;
