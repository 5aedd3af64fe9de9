use maud::{html, Markup};

pub mod filters;
pub mod listing_card;
pub mod pagination;
pub mod purchase;

pub use filters::filter_panel;
pub use listing_card::listing_card;
pub use pagination::pagination;
pub use purchase::purchase_panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Info,
}

pub fn notice(kind: NoticeKind, message: &str) -> Markup {
    let class = match kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Failure => "notice notice-failure",
        NoticeKind::Info => "notice notice-info",
    };
    html! {
        div class=(class) role=(if kind == NoticeKind::Failure { "alert" } else { "status" }) {
            p { (message) }
        }
    }
}

/// Inline message under a form field.
pub fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = message {
            p class="field-error" { (msg) }
        }
    }
}
