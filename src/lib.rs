//! Decoder for NITF image band descriptors.
//!
//! An image subheader carries one band descriptor per band: representation,
//! subcategory, filter fields and an optional set of lookup tables. This
//! crate decodes those descriptors from a positioned [`base::FieldReader`].

pub mod base;
pub mod error;
pub mod model;

pub use error::{Error, Result};
