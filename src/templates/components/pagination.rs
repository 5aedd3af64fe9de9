use crate::catalog::{CatalogState, QueryResult};
use maud::{html, Markup};

/// Page links for a catalog result. Renders nothing for a single page.
pub fn pagination(path: &str, state: &CatalogState, result: &QueryResult<'_>) -> Markup {
    let current = result.page.number;
    let total = result.total_pages;

    html! {
        @if total > 1 {
            nav class="pagination" aria-label="Pagination" {
                @if result.has_previous() {
                    a href=(state.with_page(current - 1).href(path)) rel="prev" { "Previous" }
                } @else {
                    span class="disabled" { "Previous" }
                }

                @for n in 1..=total {
                    @if n == current {
                        span class="current" aria-current="page" { (n) }
                    } @else {
                        a href=(state.with_page(n).href(path)) { (n) }
                    }
                }

                @if result.has_next() {
                    a href=(state.with_page(current + 1).href(path)) rel="next" { "Next" }
                } @else {
                    span class="disabled" { "Next" }
                }
            }
        }
    }
}
