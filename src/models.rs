//! Public models.
//!
//! # Organization
//!
//! Models are grouped into domain submodules. The only domain so far is
//! [`thermal`].
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule
//! that holds the computation. The model module re-exports the parts of
//! `core` that callers need, and its [`twine_core::Model`] implementation
//! is a thin adapter that delegates to them.

pub mod thermal;
