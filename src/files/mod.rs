//! Static file resolution
//!
//! This module maps requested URL paths onto the document root, deciding for
//! each one whether it names a file, a directory, nothing at all, or a
//! directory that first needs a trailing-slash redirect.

pub mod resolver;

pub use resolver::{DocumentRoot, Resolution};
