//! Page metadata and document head injection.

use maud::{Markup, html};

/// Fallback charset when a page does not set one explicitly.
const DEFAULT_CHARSET: &str = "utf-8";

/// Head metadata for a single page.
///
/// Each page module constructs this from its own literal constants right
/// before rendering. Optional fields that are `None` produce no markup.
#[derive(Debug, Clone, Copy)]
pub struct PageMetadata<'a> {
    /// Full page title, including any site suffix.
    pub title: &'a str,
    /// Content of the description meta tag.
    pub description: Option<&'a str>,
    /// Content of the keywords meta tag.
    pub keywords: Option<&'a str>,
    /// Document charset; defaults to utf-8 when unset.
    pub charset: Option<&'a str>,
    /// Href of the favicon link, relative to the page.
    pub favicon_path: Option<&'a str>,
}

impl<'a> PageMetadata<'a> {
    /// Creates metadata with only a title set.
    pub fn titled(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            keywords: None,
            charset: None,
            favicon_path: None,
        }
    }
}

/// Renders the head tags for a page's metadata.
///
/// Emits charset and viewport meta tags, the title element, then description
/// meta, keywords meta, and favicon link for whichever optional fields are
/// present. Stylesheet links are the wrapper's concern, not this function's.
///
/// # Arguments
///
/// * `meta`: Metadata for the page being rendered
///
/// # Returns
///
/// Markup to place inside the document head
pub fn head_meta(meta: &PageMetadata<'_>) -> Markup {
    html! {
        meta charset=(meta.charset.unwrap_or(DEFAULT_CHARSET));
        meta name="viewport" content="width=device-width, initial-scale=1.0";
        title { (meta.title) }
        @if let Some(description) = meta.description {
            meta name="description" content=(description);
        }
        @if let Some(keywords) = meta.keywords {
            meta name="keywords" content=(keywords);
        }
        @if let Some(favicon) = meta.favicon_path {
            link rel="icon" type="image/svg+xml" href=(favicon);
        }
    }
}
