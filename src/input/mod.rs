//! Input adapters.
//!
//! This module contains adapters that receive input from the windowing
//! system and translate it into controller callbacks.

#[cfg(feature = "gui")]
pub mod gui;
