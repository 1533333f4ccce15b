//! Imagery models

pub mod nitf;
