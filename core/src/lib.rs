//! mapgen core
//!
//! Building blocks shared by the generation stages:
//!
//! - [`schema`] - read-only table metadata adapted from introspection output
//! - [`naming`] - method names derived from index and key names
//! - [`xml`] - the per-table mapper document, its positioning rules and rendering
//! - [`error`] - the error type of every fallible generation step
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Deserialize metadata definitions
//! - `tracing` - Emit `tracing` events from the adapter

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

pub mod error;
pub mod naming;
pub mod schema;
mod tracing;
pub mod xml;

pub use error::{MapgenError, Result};
pub use schema::{Column, Index, IntrospectedTable, TableBuilder, Warning};
pub use xml::{Document, ElementId, XmlElement, XmlNode};
