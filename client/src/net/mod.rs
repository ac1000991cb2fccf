//! Networking modules for the catalog proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP calls the board makes against the server's
//! `/api/movies` routes; the wire schema itself lives in the `catalog` crate.

pub mod api;
