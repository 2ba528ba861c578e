//! Contact page rendering

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::metadata::PageMetadata;

/// Title shown in the browser tab.
const TITLE: &str = "お問い合わせ | Smart賃貸";

/// Charset declared explicitly on this page variant.
const CHARSET: &str = "utf-8";

/// Favicon href relative to the page.
const FAVICON_PATH: &str = "assets/favicon.svg";

/// Renders the contact page
///
/// Uses the charset/favicon metadata variant: no description or keywords
/// meta, an explicit charset, and a favicon link.
///
/// # Arguments
///
/// * `lang`: Document language attribute
///
/// # Returns
///
/// Complete HTML markup for the contact page
pub fn render(lang: &str) -> Markup {
    let meta = PageMetadata {
        title: TITLE,
        description: None,
        keywords: None,
        charset: Some(CHARSET),
        favicon_path: Some(FAVICON_PATH),
    };

    page_wrapper(&meta, lang, &["assets/contact.css"], || {
        html! {
            section class="contact" {
                h2 class="section-title" { "お問い合わせ" }
                p {
                    "賃貸管理のご相談・お見積りは、お電話またはメールにてお気軽にご連絡ください。"
                }
                dl class="contact-list" {
                    dt { "電話" }
                    dd { a href="tel:0312345678" { "03-1234-5678" } " （平日 9:00〜18:00）" }
                    dt { "メール" }
                    dd { a href="mailto:info@smart-chintai.example" { "info@smart-chintai.example" } }
                    dt { "所在地" }
                    dd { "東京都千代田区神田1-2-3 スマートビル4F" }
                }
            }
        }
    })
}
