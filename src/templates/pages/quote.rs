use crate::domain::inquiry::{InquiryError, BUDGET_OPTIONS, STYLE_OPTIONS};
use crate::domain::QuoteForm;
use crate::templates::components::{field_error, notice, NoticeKind};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub struct QuoteVm<'a> {
    pub form: &'a QuoteForm,
    pub errors: Option<&'a InquiryError>,
    pub notice: Option<(NoticeKind, &'a str)>,
}

pub fn quote_page(vm: &QuoteVm<'_>) -> Markup {
    let err = |field: &str| vm.errors.and_then(|e| e.message_for(field));
    let f = vm.form;

    desktop_layout(
        "Get a Quote",
        Nav::Quote,
        html! {
            main class="container quote" {
                h1 { "Get your FREE custom quote" }
                p class="intro" { "Tell us about your dream home and we'll provide a personalized design quote." }

                @if let Some((kind, message)) = vm.notice {
                    (notice(kind, message))
                }

                form action="/quote" method="post" class="inquiry-form" novalidate {
                    fieldset {
                        legend { "About you" }
                        (text_field("full_name", "Full name *", &f.full_name, err("full_name")))
                        (text_field("email", "Email *", &f.email, err("email")))
                        (text_field("phone", "Phone *", &f.phone, err("phone")))
                        (text_field("city", "City *", &f.city, err("city")))
                    }

                    fieldset {
                        legend { "Your home" }
                        label for="preferred_style" { "Preferred style *" }
                        select id="preferred_style" name="preferred_style" required {
                            option value="" selected[f.preferred_style.is_empty()] { "Select a style" }
                            @for style in STYLE_OPTIONS {
                                option value=(style) selected[f.preferred_style == *style] { (style) }
                            }
                        }
                        (field_error(err("preferred_style")))

                        (text_field("custom_style", "Describe your style (if Other)", &f.custom_style, err("custom_style")))
                        (text_field("bedrooms", "Bedrooms *", &f.bedrooms, err("bedrooms")))
                        (text_field("bathrooms", "Bathrooms *", &f.bathrooms, err("bathrooms")))
                        (text_field("other_rooms", "Other rooms", &f.other_rooms, None))
                        (text_field("yard_length", "Yard length (m) *", &f.yard_length, err("yard_length")))
                        (text_field("yard_breadth", "Yard breadth (m) *", &f.yard_breadth, err("yard_breadth")))

                        label for="budget" { "Budget *" }
                        select id="budget" name="budget" required {
                            option value="" selected[f.budget.is_empty()] { "Select budget range" }
                            @for budget in BUDGET_OPTIONS {
                                option value=(budget) selected[f.budget == *budget] { (budget) }
                            }
                        }
                        (field_error(err("budget")))

                        label for="description" { "Describe your dream home *" }
                        textarea id="description" name="description" rows="6" required { (f.description) }
                        (field_error(err("description")))
                    }

                    button type="submit" class="primary" { "Request my quote" }
                }
            }
        },
    )
}

fn text_field(name: &str, label: &str, value: &str, error: Option<&str>) -> Markup {
    html! {
        label for=(name) { (label) }
        input type="text" id=(name) name=(name) value=(value);
        (field_error(error))
    }
}
