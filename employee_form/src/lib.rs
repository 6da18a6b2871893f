#![deny(unreachable_patterns)]
#![deny(unused_variables)]
#![deny(unused_imports)]
// Unused results is more often than not an error
#![deny(unused_must_use)]

pub mod config;
pub mod errors;
pub mod form;

pub use crate::form::*;
