//! Outbound adapters behind the domain's driven ports.

pub mod persistence;
