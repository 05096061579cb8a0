#![forbid(unsafe_code)]

//! Maintenance tooling for Django translation catalogs.
//!
//! This crate drives the routine chores of keeping the framework's
//! translations in shape: regenerating the English source catalogs,
//! reporting per-language completion statistics, and pulling translated
//! catalogs from Transifex. It orchestrates external tools
//! (`django-admin`, `git`, `msgfmt`, `msgcat`, `tx`) and the Transifex
//! REST API; it holds no state between runs and is meant to be invoked
//! from the root of a Django git checkout.

pub mod catalogs;
pub mod cli;
pub mod commands;
pub mod credentials;
pub mod error;
pub mod transifex;

pub use error::Error;
