use clap::crate_version;
use maud::{html, Markup, DOCTYPE};

pub const SITE_TITLE: &str = "2級建築施工管理技士 第一次検定 過去問題集";

/// Renders the full page around the body.
pub fn document(title: Option<&str>, body: Markup, script: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                (headers())
                title {
                    @if let Some(title) = title { (title) " – " }
                    (SITE_TITLE)
                }
            }
            body {
                (navbar())
                (body)
                (footer())
                script src="/static/js/common.js" {}
                @if let Some(script) = script {
                    script src={ "/static/js/" (script) } {}
                }
            }
        }
    }
}

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="/static/css/style.css";
    }
}

fn navbar() -> Markup {
    html! {
        nav.navbar.is-info role="navigation" aria-label="main navigation" {
            div.container {
                div.navbar-brand {
                    a.navbar-item href="/" {
                        span.icon { i.fas.fa-hard-hat {} }
                        span { strong { "過去問題集" } }
                    }
                }
                div.navbar-menu {
                    div.navbar-start {
                        a.navbar-item href="/questions" { "問題一覧" }
                        a.navbar-item href="/quiz" { "問題を解く" }
                        a.navbar-item href="/stats" { "学習統計" }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.footer {
            div.container.has-text-centered {
                p {
                    span.icon-text.is-flex-wrap-nowrap {
                        span.icon { i.fas.fa-book.has-text-info {} }
                        span { (SITE_TITLE) " " (crate_version!()) }
                    }
                }
                p."is-size-7".has-text-grey {
                    "解答状況はこのブラウザにのみ保存されます。"
                }
            }
        }
    }
}

/// Bulma level item with a heading and a value filled in by the page script.
pub fn stat_item(heading: &str, id: &str, placeholder: &str) -> Markup {
    html! {
        div.level-item.has-text-centered {
            div {
                p.heading { (heading) }
                p.title id=(id) { (placeholder) }
            }
        }
    }
}
