//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the site's
//! pages. The layout wrapper owns the document skeleton; the header is the
//! band rendered at the top of every page.

pub mod header;
pub mod layout;
