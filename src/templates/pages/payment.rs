use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

/// Landing page after the payment provider sends the visitor back.
pub fn payment_success_page(order_id: Option<&str>) -> Markup {
    desktop_layout(
        "Payment Successful",
        Nav::None,
        html! {
            main class="container payment payment-success" {
                h1 { "Payment Successful!" }
                p {
                    "Thank you for your purchase. We have received your order and will process it shortly. "
                    "You will receive an email with your house plans soon."
                }
                @if let Some(id) = order_id {
                    p class="order-ref" { "Order reference: " strong { (id) } }
                    p { a href=(format!("/orders/{id}/receipt")) class="button" { "Download receipt (PDF)" } }
                }
                div class="actions" {
                    a href="/" class="button primary" { "Return Home" }
                    a href="/house-plans" class="button" { "Browse More Plans" }
                }
            }
        },
    )
}

pub fn payment_cancel_page(order_id: Option<&str>) -> Markup {
    desktop_layout(
        "Payment Cancelled",
        Nav::None,
        html! {
            main class="container payment payment-cancel" {
                h1 { "Payment Cancelled" }
                p { "Your payment was cancelled and you have not been charged." }
                @if let Some(id) = order_id {
                    p class="order-ref" { "Order reference: " strong { (id) } }
                }
                div class="actions" {
                    a href="/house-plans" class="button primary" { "Back to House Plans" }
                    a href="/contact" class="button" { "Contact us" }
                }
            }
        },
    )
}

/// Shown when checkout could not be started.
pub fn checkout_failed_page(message: &str, listing_id: Option<&str>) -> Markup {
    desktop_layout(
        "Checkout unavailable",
        Nav::None,
        html! {
            main class="container payment" {
                h1 { "We couldn't start your payment" }
                p { (message) }
                @if let Some(id) = listing_id {
                    p { a href=(format!("/listings/{id}")) class="button" { "Back to the plan" } }
                }
            }
        },
    )
}
