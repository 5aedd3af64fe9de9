// templates/pages/home.rs

use crate::domain::{ListingRecord, SiteSettings, TeamMember, Testimonial};
use crate::templates::components::{listing_card, notice, NoticeKind};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub settings: SiteSettings,
    pub popular: Vec<&'a ListingRecord>,
    pub testimonials: Vec<Testimonial>,
    pub team: Vec<TeamMember>,
    pub listings_failed: bool,
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    let s = &vm.settings;

    desktop_layout(
        "Home",
        Nav::Home,
        html! {
            section class="hero" {
                h1 { (s.hero_title) }
                p { (s.hero_description) }
                div class="hero-actions" {
                    a href="/house-plans" class="button primary" { "Browse house plans" }
                    a href="/quote" class="button" { "Get a free quote" }
                }
            }

            @if !s.years_experience.is_empty() || !s.projects_completed.is_empty() {
                section class="stats" {
                    @if !s.years_experience.is_empty() {
                        div { strong { (s.years_experience) } span { "Years experience" } }
                    }
                    @if !s.projects_completed.is_empty() {
                        div { strong { (s.projects_completed) } span { "Projects completed" } }
                    }
                    @if !s.client_satisfaction.is_empty() {
                        div { strong { (s.client_satisfaction) } span { "Client satisfaction" } }
                    }
                }
            }

            section class="featured" {
                h2 { "Popular plans" }
                @if vm.listings_failed {
                    (notice(NoticeKind::Failure, "We couldn't load our plans right now. Please try again shortly."))
                } @else if vm.popular.is_empty() {
                    p { "New plans are on the way." }
                } @else {
                    div class="listing-grid" {
                        @for listing in &vm.popular {
                            (listing_card(listing))
                        }
                    }
                    a href="/house-plans?sort=popular" { "See all plans" }
                }
            }

            @if !s.about_description.is_empty() {
                section class="about" {
                    h2 { (s.about_title) }
                    p { (s.about_description) }
                    @if !s.mission_statement.is_empty() {
                        blockquote { (s.mission_statement) }
                    }
                }
            }

            @if !vm.team.is_empty() {
                section class="team" {
                    h2 { "Meet the team" }
                    div class="team-grid" {
                        @for member in &vm.team {
                            div class="team-member" {
                                @if !member.image.is_empty() {
                                    img src=(member.image) alt=(member.name) loading="lazy";
                                }
                                h3 { (member.name) }
                                p class="role" { (member.role) }
                                @if !member.specialty.is_empty() {
                                    p { (member.specialty) }
                                }
                            }
                        }
                    }
                }
            }

            @if !vm.testimonials.is_empty() {
                section class="testimonials" {
                    h2 { "What our clients say" }
                    @for t in &vm.testimonials {
                        figure class="testimonial" {
                            blockquote { (t.content) }
                            figcaption {
                                span class="stars" aria-label=(format!("{} out of 5", t.rating.min(5))) { (t.stars()) }
                                " " strong { (t.name) }
                                @if !t.role.is_empty() { ", " (t.role) }
                                " · " (t.posted_on())
                            }
                        }
                    }
                }
            }
        },
    )
}
