//! Shared site header component

use maud::{Markup, html};

/// Site name shown in the header band on every page.
pub const SITE_NAME: &str = "Smart賃貸";

/// Renders the fixed site header
///
/// Displays the site name as a link back to the index page inside a
/// full-width colored band. Identical on every page.
///
/// # Returns
///
/// Site header markup
pub fn site_header() -> Markup {
    html! {
        header class="site-header" {
            div class="site-header-inner" {
                h1 class="site-title" {
                    a href="index.html" { (SITE_NAME) }
                }
            }
        }
    }
}
