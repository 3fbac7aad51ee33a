/*! Core types for auxio. */

#![allow(missing_docs)]

mod config;
mod error;
mod event;
mod ids;

pub use config::{OptionsMap, SpawnConfig};
pub use error::{AuxioError, AuxioResult, DecodeError};
pub use event::WindowEvent;
pub use ids::WindowId;
