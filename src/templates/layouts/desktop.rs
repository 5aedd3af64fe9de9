use maud::{html, Markup, DOCTYPE};

/// Top-level nav entry the current page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Plans,
    Built,
    Services,
    Quote,
    Contact,
    None,
}

const LINKS: &[(Nav, &str, &str)] = &[
    (Nav::Home, "/", "Home"),
    (Nav::Plans, "/house-plans", "House Plans"),
    (Nav::Built, "/built-homes", "Built Homes"),
    (Nav::Services, "/services", "Services"),
    (Nav::Quote, "/quote", "Get a Quote"),
    (Nav::Contact, "/contact", "Contact"),
];

pub fn desktop_layout(title: &str, active: Nav, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | House Plans" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#524ed2"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        span { "House Plans" }
                    }
                    nav {
                        ul {
                            @for (nav, href, label) in LINKS {
                                li {
                                    a href=(href) class=[(*nav == active).then_some("active")] { (label) }
                                }
                            }
                        }
                    }
                    form action="/search" method="get" class="header-search" role="search" {
                        label class="sr-only" for="site-search" { "Search plans" }
                        input type="search" id="site-search" name="q" placeholder="Search plans...";
                        button type="submit" { "Search" }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "Plans, built homes and custom designs." }
                    p { a href="/contact" { "Get in touch" } }
                }
            }
        }
    }
}
