//! Landing page rendering

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::metadata::PageMetadata;

/// Title shown in the browser tab and search results.
const TITLE: &str = "賃貸管理 | Smart賃貸";

/// Description meta content for search engine snippets.
const DESCRIPTION: &str =
    "Smart賃貸はスマートな賃貸管理によって家賃収入の最大化を目指す管理会社です。";

/// Keywords meta content.
const KEYWORDS: &str = "賃貸, 管理";

/// Renders the landing page
///
/// Builds the index page metadata from this module's literal constants and
/// wraps the hero and service sections in the standard layout.
///
/// # Arguments
///
/// * `lang`: Document language attribute
///
/// # Returns
///
/// Complete HTML markup for the landing page
pub fn render(lang: &str) -> Markup {
    let meta = PageMetadata {
        title: TITLE,
        description: Some(DESCRIPTION),
        keywords: Some(KEYWORDS),
        charset: None,
        favicon_path: None,
    };

    page_wrapper(&meta, lang, &["assets/index.css"], || {
        html! {
            section class="hero" {
                h2 class="hero-title" { "家賃収入を、最大化する賃貸管理。" }
                p class="hero-lead" {
                    "Smart賃貸は入居者募集から集金・更新・退去立会いまで、"
                    "オーナー様の賃貸経営をスマートに支えます。"
                }
            }

            section class="services" {
                h3 class="section-title" { "サービス" }
                ul class="service-list" {
                    li class="service-item" {
                        h4 { "入居者募集" }
                        p { "主要ポータルサイトへの一括掲載と内見対応で空室期間を短縮します。" }
                    }
                    li class="service-item" {
                        h4 { "集金管理" }
                        p { "家賃の集金・送金・滞納督促を毎月の収支報告とあわせて代行します。" }
                    }
                    li class="service-item" {
                        h4 { "建物管理" }
                        p { "定期巡回と修繕手配で物件の資産価値を維持します。" }
                    }
                }
            }

            section class="cta" {
                p { "管理のご相談は " a href="contact.html" { "お問い合わせ" } " から。" }
            }
        }
    })
}
