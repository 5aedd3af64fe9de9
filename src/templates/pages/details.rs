use crate::domain::{Category, ListingRecord};
use crate::templates::components::purchase_panel;
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub fn details_page(listing: &ListingRecord) -> Markup {
    let (back_href, back_label) = match listing.category {
        Category::Plan => ("/house-plans", "House Plans"),
        Category::Built => ("/built-homes", "Built Homes"),
    };

    desktop_layout(
        &listing.title,
        Nav::None,
        html! {
            main class="container details" {
                p class="breadcrumb" {
                    a href="/" { "Home" } " / "
                    a href=(back_href) { (back_label) } " / "
                    (listing.title)
                }

                div class="details-header" {
                    h1 { (listing.title) }
                    span class="category" { (listing.category.label()) }
                    @if listing.is_new { span class="badge badge-new" { "New" } }
                    @if listing.is_popular { span class="badge badge-popular" { "Popular" } }
                }

                @if !listing.images.is_empty() {
                    div class="gallery" {
                        @for (i, src) in listing.images.iter().enumerate() {
                            img src=(src) alt=(format!("{} image {}", listing.title, i + 1)) loading=(if i == 0 { "eager" } else { "lazy" });
                        }
                    }
                }

                div class="details-layout" {
                    section class="details-main" {
                        table class="spec-table" {
                            tbody {
                                tr { th { "Bedrooms" } td { (listing.bedrooms) } }
                                tr { th { "Bathrooms" } td { (listing.bathrooms) } }
                                @if listing.en_suite > 0 { tr { th { "En-suite" } td { (listing.en_suite) } } }
                                tr { th { "Garage" } td { (listing.garage) } }
                                tr { th { "Levels" } td { (listing.levels) } }
                                tr { th { "Floor area" } td { (listing.floor_area) " m²" } }
                                @if listing.width > 0.0 && listing.depth > 0.0 {
                                    tr { th { "Footprint" } td { (listing.width) " m × " (listing.depth) " m" } }
                                }
                                @if listing.lounges > 0 { tr { th { "Lounges" } td { (listing.lounges) } } }
                                @if listing.dining_areas > 0 { tr { th { "Dining areas" } td { (listing.dining_areas) } } }
                                @if listing.garage_parking > 0 { tr { th { "Garage parking" } td { (listing.garage_parking) } } }
                                @if listing.covered_parking > 0 { tr { th { "Covered parking" } td { (listing.covered_parking) } } }
                                tr { th { "Pet friendly" } td { @if listing.pet_friendly { "Yes" } @else { "No" } } }
                                @if !listing.styles.is_empty() {
                                    tr { th { "Style" } td { (listing.styles.join(", ")) } }
                                }
                            }
                        }

                        @if !listing.description.is_empty() {
                            h2 { "About this plan" }
                            p { (listing.description) }
                        }

                        @if !listing.features.is_empty() {
                            h2 { "Features" }
                            ul { @for f in &listing.features { li { (f) } } }
                        }

                        @if !listing.amenities.is_empty() {
                            h2 { "Amenities" }
                            ul { @for a in &listing.amenities { li { (a) } } }
                        }

                        @if !listing.floors.is_empty() {
                            h2 { "Floor layout" }
                            @for floor in &listing.floors {
                                h3 { (floor.name) }
                                ul {
                                    @for room in &floor.rooms {
                                        li { (room.quantity) " × " (room.name) }
                                    }
                                }
                            }
                        }

                        @if let Some(video) = listing.video_link() {
                            p { a href=(video) rel="noopener" target="_blank" { "Watch the walkthrough video" } }
                        }
                    }

                    aside {
                        (purchase_panel(listing))
                        p { a href="/quote" { "Want changes? Request a custom quote." } }
                    }
                }
            }
        },
    )
}

/// Rendered for unknown listing ids.
pub fn listing_not_found_page() -> Markup {
    desktop_layout(
        "Not found",
        Nav::None,
        html! {
            main class="container" {
                h1 { "House Plan Not Found" }
                p { "This plan may have been removed or the link is incorrect." }
                a href="/house-plans" class="button" { "Browse all plans" }
            }
        },
    )
}
