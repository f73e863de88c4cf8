//! Model module containing WGAN architecture components
//!
//! This module provides:
//! - Generator network for creating synthetic feature rows
//! - Critic network scoring rows with an unbounded value
//! - WGAN wrapper combining both networks

mod critic;
mod generator;
mod wgan;

pub use critic::{Critic, CriticConfig, LEAKY_SLOPE};
pub use generator::{Generator, GeneratorConfig};
pub use wgan::{AdamSettings, Wgan};
