use crate::domain::{PlanModification, Service};
use crate::templates::components::{notice, NoticeKind};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

const PROCESS_STEPS: &[(&str, &str)] = &[
    ("Initial Consultation", "We understand your vision, budget, and requirements through detailed discussion."),
    ("Concept Design", "Our architects create preliminary sketches and layout options for your review."),
    ("Detailed Design", "We develop detailed architectural drawings with all technical specifications."),
    ("3D Visualization", "Photo-realistic 3D renders help you visualize the final result."),
    ("Revisions & Approval", "We incorporate your feedback and finalize all designs to your satisfaction."),
    ("Project Delivery", "Receive submission-ready plans with all documentation and certifications."),
];

pub struct ServicesVm {
    pub services: Vec<Service>,
    pub modifications: Vec<PlanModification>,
    pub services_failed: bool,
}

pub fn services_page(vm: &ServicesVm) -> Markup {
    desktop_layout(
        "Services",
        Nav::Services,
        html! {
            section class="hero" {
                h1 { "Our Architectural Services" }
                p { "High-quality house plans, custom designs, and professional building solutions tailored to your needs." }
            }

            main class="container services" {
                section class="service-range" {
                    h2 { "Our Complete Service Range" }
                    @if vm.services_failed {
                        (notice(NoticeKind::Failure, "We couldn't load our services right now. Please try again shortly."))
                    } @else if vm.services.is_empty() {
                        p { "Get in touch to hear what we can do for you." }
                    } @else {
                        div class="service-grid" {
                            @for service in &vm.services {
                                article class="card service" data-icon=(service.icon_name) {
                                    @if !service.badge.is_empty() {
                                        span class="badge" { (service.badge) }
                                    }
                                    h3 { (service.title) }
                                    p { (service.description) }
                                }
                            }
                        }
                    }
                }

                section class="process" {
                    h2 { "Our Design Process" }
                    ol class="process-steps" {
                        @for (i, (title, description)) in PROCESS_STEPS.iter().enumerate() {
                            li {
                                span class="step-number" { (format!("{:02}", i + 1)) }
                                h3 { (title) }
                                p { (description) }
                            }
                        }
                    }
                }

                @if !vm.modifications.is_empty() {
                    section class="modifications" {
                        h2 { "Professional Plan Modifications" }
                        ul {
                            @for m in &vm.modifications {
                                li { strong { (m.title) } " " (m.description) }
                            }
                        }
                        a href="/quote" class="button primary" { "Request a modification quote" }
                    }
                }
            }
        },
    )
}
