use crate::catalog::{CatalogState, QueryResult, SortKey};
use crate::templates::components::{filter_panel, listing_card, notice, pagination, NoticeKind};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub struct CatalogVm<'a> {
    pub title: &'a str,
    pub intro: &'a str,
    pub path: &'a str,
    pub nav: Nav,
    pub state: &'a CatalogState,
    /// `None` when the listings could not be fetched.
    pub result: Option<QueryResult<'a>>,
    pub styles: Vec<String>,
}

pub fn catalog_page(vm: &CatalogVm<'_>) -> Markup {
    desktop_layout(
        vm.title,
        vm.nav,
        html! {
            main class="container catalog" {
                h1 { (vm.title) }
                p class="intro" { (vm.intro) }

                div class="catalog-layout" {
                    aside { (filter_panel(vm.path, vm.state, &vm.styles)) }

                    section class="catalog-results" {
                        @match &vm.result {
                            None => {
                                (notice(NoticeKind::Failure, "We couldn't load listings right now. Please try again shortly."))
                            }
                            Some(result) => {
                                p class="result-count" {
                                    "Showing " strong { (result.total_count) } " result"
                                    @if result.total_count != 1 { "s" }
                                    @if !vm.state.search.trim().is_empty() {
                                        " for \"" (vm.state.search.trim()) "\" "
                                        a href=(vm.state.with_search("").href(vm.path)) class="clear" { "Clear search" }
                                    }
                                }

                                nav class="sort-links" aria-label="Sort" {
                                    @for key in SortKey::ALL {
                                        @if key == vm.state.sort {
                                            span class="current" { (key.label()) }
                                        } @else {
                                            a href=(vm.state.with_sort(key).href(vm.path)) { (key.label()) }
                                        }
                                    }
                                }

                                @if result.items.is_empty() {
                                    @if result.total_count == 0 && vm.state.is_filtered() {
                                        (notice(NoticeKind::Info, "No listings match these filters."))
                                    } @else if result.total_count == 0 {
                                        (notice(NoticeKind::Info, "Nothing listed here yet. Check back soon."))
                                    } @else {
                                        (notice(NoticeKind::Info, "There is nothing on this page."))
                                        a href=(vm.state.with_page(1).href(vm.path)) { "Back to the first page" }
                                    }
                                } @else {
                                    div class="listing-grid" {
                                        @for listing in &result.items {
                                            (listing_card(listing))
                                        }
                                    }
                                }

                                (pagination(vm.path, vm.state, result))
                            }
                        }
                    }
                }
            }
        },
    )
}
