//! Client-side core for the Limpiar cleaning-services marketplace.
//!
//! The portal front-ends (property manager, admin, cleaning business) all
//! share the same moving parts: a store of per-workflow state slices, remote
//! operations against the Limpiar backend, and supervised polling that keeps
//! server-owned state fresh. This crate owns those parts; rendering is left
//! to whatever shell consumes it.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod ops;
pub mod poll;
pub mod session;
pub mod store;
pub mod validation;
