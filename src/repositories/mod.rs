//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for the provider tables, providing a clean API for data access.
//! The repositories are the only writers to storage; they accept validated
//! values and own the uniqueness and cascade rules.

pub mod profile;
pub mod service;

pub use profile::ProviderProfileRepository;
pub use service::ProviderServiceRepository;
