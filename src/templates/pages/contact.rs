use crate::domain::inquiry::InquiryError;
use crate::domain::{ContactForm, ContactInformation};
use crate::templates::components::{field_error, notice, NoticeKind};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub struct ContactVm<'a> {
    pub form: &'a ContactForm,
    pub errors: Option<&'a InquiryError>,
    pub notice: Option<(NoticeKind, &'a str)>,
    pub info: &'a ContactInformation,
}

pub fn contact_page(vm: &ContactVm<'_>) -> Markup {
    let err = |field: &str| vm.errors.and_then(|e| e.message_for(field));
    let f = vm.form;
    let info = vm.info;

    desktop_layout(
        "Contact",
        Nav::Contact,
        html! {
            main class="container contact" {
                h1 { "Contact us" }

                @if let Some((kind, message)) = vm.notice {
                    (notice(kind, message))
                }

                div class="contact-layout" {
                    form action="/contact" method="post" class="inquiry-form" novalidate {
                        label for="name" { "Name *" }
                        input type="text" id="name" name="name" value=(f.name) required;
                        (field_error(err("name")))

                        label for="email" { "Email *" }
                        input type="email" id="email" name="email" value=(f.email) autocomplete="email" required;
                        (field_error(err("email")))

                        label for="phone" { "Phone" }
                        input type="tel" id="phone" name="phone" value=(f.phone);

                        label for="subject" { "Subject *" }
                        input type="text" id="subject" name="subject" value=(f.subject) required;
                        (field_error(err("subject")))

                        label for="message" { "Message *" }
                        textarea id="message" name="message" rows="6" required { (f.message) }
                        (field_error(err("message")))

                        button type="submit" class="primary" { "Send message" }
                    }

                    aside class="contact-info" {
                        @if !info.phone_number.is_empty() { p { strong { "Phone: " } (info.phone_number) } }
                        @if !info.email.is_empty() {
                            p { strong { "Email: " } a href=(format!("mailto:{}", info.email)) { (info.email) } }
                        }
                        @if !info.address.is_empty() { p { strong { "Address: " } (info.address) } }
                        @if !info.monday_friday.is_empty() {
                            h3 { "Office hours" }
                            ul {
                                li { "Monday to Friday: " (info.monday_friday) }
                                @if !info.saturday.is_empty() { li { "Saturday: " (info.saturday) } }
                                @if !info.sunday.is_empty() { li { "Sunday: " (info.sunday) } }
                            }
                        }
                    }
                }
            }
        },
    )
}
