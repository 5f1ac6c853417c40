//! Thermal models.
//!
//! This module contains models for conductive heat transfer in the crust.

pub mod intrusion;
