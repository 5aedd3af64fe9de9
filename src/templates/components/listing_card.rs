use crate::domain::ListingRecord;
use maud::{html, Markup};

pub fn listing_card(listing: &ListingRecord) -> Markup {
    let href = format!("/listings/{}", listing.id);
    html! {
        article class="listing-card" {
            a href=(href) {
                div class="listing-cover" {
                    @if let Some(src) = listing.cover_image() {
                        img src=(src) alt=(listing.title) loading="lazy";
                    } @else {
                        div class="listing-cover-empty" { "No image yet" }
                    }
                    @if listing.is_new {
                        span class="badge badge-new" { "New" }
                    }
                    @if listing.is_popular {
                        span class="badge badge-popular" { "Popular" }
                    }
                }
                div class="listing-body" {
                    h3 { (listing.title) }
                    p class="listing-price" { (listing.display_price()) }
                    ul class="listing-specs" {
                        li { (listing.bedrooms) " Bed" }
                        li { (listing.bathrooms) " Bath" }
                        li { (listing.garage) " Garage" }
                        li { (listing.levels) " Level" @if listing.levels != 1 { "s" } }
                        li { (listing.floor_area) " m²" }
                    }
                    @if !listing.styles.is_empty() {
                        p class="listing-styles" { (listing.styles.join(" · ")) }
                    }
                }
            }
        }
    }
}
