//! Page rendering modules
//!
//! Each page module holds its metadata literals, builds a `PageMetadata`
//! from them, and hands a content closure to the layout wrapper.

pub mod contact;
pub mod index;
