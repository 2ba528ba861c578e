//! Static site generator for the Smart賃貸 marketing site.

mod assets;
pub mod components;
mod config;
mod generators;
mod metadata;
pub mod pages;

pub use assets::write_assets;
pub use components::header::{SITE_NAME, site_header};
pub use components::layout::page_wrapper;
pub use config::Config;
pub use generators::{generate_site, write_page};
pub use metadata::{PageMetadata, head_meta};
