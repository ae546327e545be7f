//! Page shells. The pages are filled in by the front-end scripts from `/api/questions`.

use maud::{html, Markup};
use poem::http::StatusCode;
use poem::{handler, Response};

use crate::web::partials::{document, stat_item, SITE_TITLE};
use crate::web::responses::html;

const YEARS: [(&str, &str); 5] = [
    ("r07", "令和7年度"),
    ("r06", "令和6年度"),
    ("r05", "令和5年度"),
    ("r04", "令和4年度"),
    ("r03", "令和3年度"),
];

const CATEGORIES: [(&str, &str); 5] = [
    ("architecture", "建築学"),
    ("structure", "構造"),
    ("construction", "施工"),
    ("management", "施工管理法"),
    ("law", "法規"),
];

#[handler]
pub async fn get_index() -> Response {
    render_index(StatusCode::OK)
}

/// Renders the home page, also used as the body of `404 Not Found`.
pub fn render_index(status: StatusCode) -> Response {
    let body = html! {
        section.hero.is-info {
            div.hero-body {
                div.container {
                    h1.title { (SITE_TITLE) }
                    p.subtitle { "過去に出題された問題を解いて、解説で理解を深めましょう。" }
                }
            }
        }
        section.section {
            div.container {
                div.box {
                    nav.level {
                        (stat_item("解答済み", "answeredCount", "0"))
                        (stat_item("正答率", "accuracy", "0"))
                        (stat_item("連続正解", "streak", "0"))
                    }
                }
                div.buttons.is-centered {
                    a.button.is-link.is-medium href="/questions" {
                        span.icon { i.fas.fa-list {} }
                        span { "問題一覧" }
                    }
                    a.button.is-success.is-medium href="/quiz" {
                        span.icon { i.fas.fa-pencil-alt {} }
                        span { "問題を解く" }
                    }
                    a.button.is-info.is-medium href="/stats" {
                        span.icon { i.fas.fa-chart-bar {} }
                        span { "学習統計" }
                    }
                }
            }
        }
    };
    html(status, document(None, body, Some("index.js")))
}

#[handler]
pub async fn get_questions() -> Response {
    let body = html! {
        section.section {
            div.container {
                h1.title { "問題一覧" }
                div.columns.is-multiline {
                    div.column."is-3" {
                        (select("年度", "yearFilter", &YEARS))
                    }
                    div.column."is-3" {
                        (select("分野", "categoryFilter", &CATEGORIES))
                    }
                    div.column."is-3" {
                        (select("学習状況", "statusFilter", &[
                            ("unanswered", "未解答"),
                            ("correct", "正解"),
                            ("incorrect", "不正解"),
                        ]))
                    }
                    div.column."is-3" {
                        div.field {
                            label.label for="searchInput" { "キーワード" }
                            div.control.has-icons-left {
                                input.input #searchInput type="search" placeholder="問題文を検索";
                                span.icon.is-left { i.fas.fa-search {} }
                            }
                        }
                    }
                }
                p."mb-4" {
                    span #displayCount { "0" } " / " span #totalCount { "0" } " 問"
                }
                div #questionsList {}
            }
        }
    };
    html(StatusCode::OK, document(Some("問題一覧"), body, Some("questions.js")))
}

#[handler]
pub async fn get_quiz() -> Response {
    let body = html! {
        section.section {
            div.container {
                (question_header())
                div #choicesContainer."mt-4" {}
                div.buttons.is-right."mt-4" {
                    button.button.is-success #submitAnswer disabled { "解答する" }
                }
            }
        }
    };
    html(StatusCode::OK, document(Some("問題を解く"), body, Some("quiz.js")))
}

#[handler]
pub async fn get_explanation() -> Response {
    let body = html! {
        section.section {
            div.container {
                div.notification #resultBanner {
                    span.icon #resultIcon {}
                    strong #resultText {}
                }
                (question_header())
                div.box {
                    p { "あなたの解答: " strong #userAnswer {} }
                    p { "正解: " strong #correctAnswer {} }
                }
                div.box {
                    h2.subtitle { "解説" }
                    div.content #explanationContent {}
                    div #choicesExplanation {}
                }
                div.box #referenceSection {
                    h2.subtitle { "参考図" }
                    div #referenceImages {}
                }
                div.box #lawSection {
                    h2.subtitle { "関連法規" }
                    div #lawContent {}
                }
                div.box #tipSection {
                    h2.subtitle { "覚え方のコツ" }
                    p #tipContent {}
                }
                div.buttons.is-right {
                    button.button #reviewAgain { "もう一度解く" }
                    button.button.is-link #nextQuestion { "次の問題へ" }
                }
            }
        }
    };
    html(StatusCode::OK, document(Some("解説"), body, Some("explanation.js")))
}

#[handler]
pub async fn get_stats() -> Response {
    let body = html! {
        section.section {
            div.container {
                h1.title { "学習統計" }
                div.box {
                    nav.level {
                        (stat_item("解答数", "totalAnswered", "0"))
                        (stat_item("正答率", "accuracyRate", "0%"))
                        (stat_item("連続正解", "currentStreak", "0"))
                        (stat_item("最大連続正解", "maxStreak", "0"))
                    }
                }
                div.columns {
                    div.column { div.box { h2.subtitle { "分野別" } div #categoryChart {} } }
                    div.column { div.box { h2.subtitle { "年度別" } div #yearChart {} } }
                }
                div.box {
                    h2.subtitle { "苦手な問題" }
                    div #weakPointsList {}
                }
                button.button.is-danger.is-outlined #resetProgress { "学習データをリセット" }
            }
        }
    };
    html(StatusCode::OK, document(Some("学習統計"), body, Some("stats.js")))
}

fn question_header() -> Markup {
    html! {
        div.tags {
            span.tag.is-dark #questionNumber {}
            span.tag.is-info #questionYear {}
            span.tag.is-primary #questionCategory {}
        }
        h1.title #questionTitle {}
        div.content #questionText {}
        div #questionImage {}
    }
}

fn select(label: &str, id: &str, options: &[(&str, &str)]) -> Markup {
    html! {
        div.field {
            label.label for=(id) { (label) }
            div.control {
                div.select.is-fullwidth {
                    select id=(id) {
                        option value="all" { "すべて" }
                        @for (value, text) in options {
                            option value=(value) { (text) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::store::tests::missing_path;
    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn pages_ok() -> Result {
        let client = create_test_client(missing_path("pages_ok"));
        for uri in ["/", "/questions", "/quiz", "/explanation", "/stats"] {
            let response = client.get(uri).send().await;
            response.assert_status_is_ok();
            response.assert_content_type("text/html; charset=utf-8");
        }
        Ok(())
    }

    #[tokio::test]
    async fn unknown_path_renders_index() -> Result {
        let client = create_test_client(missing_path("unknown_path_renders_index"));
        let response = client.get("/totally/unknown/path").send().await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.0.into_body().into_string().await?;
        assert!(body.contains(SITE_TITLE), "{}", body);
        assert!(body.contains(r#"id="answeredCount""#), "{}", body);
        Ok(())
    }

    #[tokio::test]
    async fn wrong_method_ok() {
        let client = create_test_client(missing_path("wrong_method_ok"));
        client
            .post("/api/health")
            .send()
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn select_ok() {
        let markup = select("分野", "categoryFilter", &CATEGORIES).into_string();
        assert!(markup.contains(r#"<select id="categoryFilter">"#), "{}", markup);
        assert!(markup.contains(r#"<option value="law">法規</option>"#), "{}", markup);
    }
}
