//! Core library components.
//!
//! Loading and validation of definition and vault files, nickname
//! resolution, and secret binding. Resolution and binding never do I/O.

pub mod bind;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod definition;
pub mod domain;
pub mod inventory;
pub mod password;
pub mod resolve;
pub mod schema;
pub mod secrets;
pub mod types;
pub mod validation;
