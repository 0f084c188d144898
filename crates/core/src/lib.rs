//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod effects;
pub mod events;
pub mod hand;
pub mod inventory;
pub mod rng;
pub mod round;
pub mod rules;
pub mod run;
pub mod scoring;
pub mod state;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use effects::*;
pub use events::*;
pub use hand::*;
pub use inventory::*;
pub use rng::*;
pub use round::*;
pub use rules::*;
pub use run::*;
pub use scoring::*;
pub use state::*;
