use crate::catalog::{CatalogState, FilterCriteria, SortKey, LEVELS_THREE_PLUS};
use maud::{html, Markup};

const BEDROOM_OPTIONS: &[u32] = &[1, 2, 3, 4, 5];
const BATHROOM_OPTIONS: &[u32] = &[1, 2, 3, 4];
const GARAGE_OPTIONS: &[u32] = &[1, 2, 3];
const LEVEL_OPTIONS: &[(u32, &str)] = &[(1, "1"), (2, "2"), (LEVELS_THREE_PLUS, "3+")];

/// Filter + sort form. It submits with GET and carries no page field, so
/// any change lands back on page 1.
pub fn filter_panel(path: &str, state: &CatalogState, styles: &[String]) -> Markup {
    let c = &state.criteria;

    html! {
        form class="filter-panel" action=(path) method="get" {
            div class="filter-group" {
                label for="q" { "Search" }
                input type="search" id="q" name="q" value=(state.search) placeholder="Plan name";
            }

            fieldset class="filter-group" {
                legend { "Price (R)" }
                (bound_input("price_min", "Min", c.price_min))
                (bound_input("price_max", "Max", c.price_max))
            }

            fieldset class="filter-group" {
                legend { "Floor area (m²)" }
                (bound_input("area_min", "Min", c.floor_area_min))
                (bound_input("area_max", "Max", c.floor_area_max))
            }

            (threshold_group("Bedrooms", "bedrooms", BEDROOM_OPTIONS, &c.bedrooms))
            (threshold_group("Bathrooms", "bathrooms", BATHROOM_OPTIONS, &c.bathrooms))
            (threshold_group("Garage", "garage", GARAGE_OPTIONS, &c.garage))

            fieldset class="filter-group" {
                legend { "Levels" }
                @for (value, label) in LEVEL_OPTIONS {
                    label class="check" {
                        input type="checkbox" name="levels" value=(value) checked[c.levels.contains(value)];
                        (label)
                    }
                }
            }

            @if !styles.is_empty() {
                fieldset class="filter-group" {
                    legend { "Style" }
                    @for style in styles {
                        label class="check" {
                            input type="checkbox" name="style" value=(style) checked[c.styles.contains(style)];
                            (style)
                        }
                    }
                }
            }

            div class="filter-group" {
                label for="sort" { "Sort by" }
                select id="sort" name="sort" {
                    @for key in SortKey::ALL {
                        option value=(key.as_str()) selected[key == state.sort] { (key.label()) }
                    }
                }
            }

            div class="filter-actions" {
                button type="submit" class="primary" { "Apply" }
                @if !c.is_empty() {
                    a href=(state.with_criteria(FilterCriteria::default()).href(path)) class="clear" { "Clear filters" }
                }
            }
        }
    }
}

fn bound_input(name: &str, placeholder: &str, value: Option<f64>) -> Markup {
    html! {
        input
            type="number"
            min="0"
            name=(name)
            placeholder=(placeholder)
            value=[value.map(|v| v.to_string())];
    }
}

fn threshold_group(legend: &str, name: &str, options: &[u32], selected: &[u32]) -> Markup {
    html! {
        fieldset class="filter-group" {
            legend { (legend) }
            @for value in options {
                label class="check" {
                    input type="checkbox" name=(name) value=(value) checked[selected.contains(value)];
                    (value) "+"
                }
            }
        }
    }
}
