//! Shared type definitions for mapgen
//!
//! This crate provides the type tags used across the mapgen crates:
//!
//! - [`JdbcType`] - JDBC type tag reported by table introspection
//! - [`JavaType`] - fully qualified Java type used in signatures and models
//! - [`primitive`] - the boxed to primitive narrowing table
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::{
        borrow::ToOwned,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    #[cfg(not(feature = "std"))]
    pub use alloc::{
        borrow::ToOwned,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

mod java;
mod jdbc;
pub mod primitive;

pub use java::JavaType;
pub use jdbc::{JdbcType, JdbcTypeParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::primitive::narrow;
    pub use crate::{JavaType, JdbcType};
}
