use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::view::pitchers::PAGE_TITLE;

/// Page shell; the dashboard fragment loads into `#dashboard` once the page is up.
///
/// `query` is passed through so a bookmarked url restores its selections.
#[must_use]
pub fn render_index_template(query: &str) -> Markup {
    let fragment_url = if query.is_empty() {
        "pitchers".to_string()
    } else {
        format!("pitchers?{query}")
    };

    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="static/pitchers.css";
            title { (PAGE_TITLE) }
            script src=(HTMX_PATH) defer integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" crossorigin="anonymous" {}
        }
        body {
            h1 { (PAGE_TITLE) }
            div id="dashboard" hx-get=(fragment_url) hx-trigger="load" hx-swap="innerHTML" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
        }
    }
}
