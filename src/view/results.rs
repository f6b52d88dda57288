use crate::controller::results::PlayerResult;
use maud::{Markup, html};

#[must_use]
pub fn render_results(results: &[PlayerResult], oob: bool) -> Markup {
    html! {
        div id="results" hx-swap-oob=[oob.then_some("true")] {
            h3 { "結果" }
            table id="results-table" class="styled-table" {
                thead {
                    tr {
                        th { "プレイヤー" }
                        th { "合計点" }
                        th { "トップとの差" }
                    }
                }
                tbody {
                    @for result in results {
                        tr {
                            td { (result.name) }
                            td { (result.total) }
                            td class=(result.diff_class.css_class()) { (result.diff_text) }
                        }
                    }
                }
            }
        }
    }
}
