use crate::domain::{Category, ListingRecord};
use maud::{html, Markup};

/// The one purchase flow, shared by every detail page.
///
/// Posts to `/checkout`, which hands the visitor over to the external
/// payment page. Card details are never collected here.
pub fn purchase_panel(listing: &ListingRecord) -> Markup {
    let (heading, button) = match listing.category {
        Category::Plan => ("Buy this plan", "Continue to payment"),
        Category::Built => ("Buy the plans for this home", "Continue to payment"),
    };

    html! {
        section class="card purchase-panel" id="purchase" {
            h3 { (heading) }
            p class="listing-price" { (listing.display_price()) }
            form action="/checkout" method="post" {
                input type="hidden" name="listing_id" value=(listing.id);
                label for="purchase-email" { "Email for your receipt (optional)" }
                input type="email" id="purchase-email" name="email" autocomplete="email" placeholder="you@domain.com";
                button type="submit" class="primary" { (button) }
            }
            p class="microcopy" { "You'll be redirected to our secure payment partner to complete the purchase." }
        }
    }
}
