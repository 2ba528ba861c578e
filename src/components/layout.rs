//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::header::site_header;
use crate::metadata::{PageMetadata, head_meta};

/// Wraps page content with the standard document structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all pages. The head is built from the page's metadata plus stylesheet
/// links; the body is the shared site header followed by the fixed-width
/// content container. The container holds exactly what the content closure
/// returns, unmodified.
///
/// # Arguments
///
/// * `meta`: Head metadata for this page
/// * `lang`: Document language attribute
/// * `stylesheets`: Array of CSS file paths to include
/// * `content`: Zero-argument closure producing the page's inner markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    meta: &PageMetadata<'_>,
    lang: &str,
    stylesheets: &[&str],
    content: impl FnOnce() -> Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                (head_meta(meta))
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                (site_header())
                div class="container" {
                    (content())
                }
            }
        }
    }
}
