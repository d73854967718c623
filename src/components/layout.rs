//! Base layout for the web UI: HTML skeleton, navigation, footer.

use maud::{html, Markup, DOCTYPE};

use crate::auth::Session;

/// Base page layout builder.
///
/// The session parameter is required so authentication state is always
/// explicitly handled: pass `None` for anonymous pages (the sign-in page)
/// and `Some(&session)` everywhere behind the gate.
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    session: Option<&'a Session>,
}

impl<'a> BaseLayout<'a> {
    #[must_use]
    pub fn new(title: &'a str, session: Option<&'a Session>) -> Self {
        Self { title, session }
    }

    /// Render the full page with `content` as the main body.
    #[must_use]
    pub fn render(&self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - Catalog Browser" }
                    link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
                    link rel="stylesheet" href="/assets/css/style.css";
                }
                body {
                    header class="container" {
                        nav {
                            ul {
                                li { a href="/" { strong { "Catalog Browser" } } }
                            }
                            ul {
                                @if let Some(session) = self.session {
                                    li { span { "Signed in as " (session.username) } }
                                    li {
                                        form method="post" action="/sign-out" {
                                            button type="submit" class="secondary" { "Sign out" }
                                        }
                                    }
                                } @else {
                                    li { a href="/sign-in" { "Sign in" } }
                                }
                            }
                        }
                    }
                    main class="container" {
                        (content)
                    }
                    footer class="container" {
                        small { "catalog-browser" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_anonymous_layout_offers_sign_in() {
        let page = BaseLayout::new("Browse", None)
            .render(html! { h1 { "Hi" } })
            .into_string();
        assert!(page.contains("Sign in"));
        assert!(!page.contains("Sign out"));
        assert!(page.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_signed_in_layout_shows_user() {
        let session = Session::issue("alice", Duration::from_secs(60));
        let page = BaseLayout::new("Browse", Some(&session))
            .render(html! {})
            .into_string();
        assert!(page.contains("Signed in as alice"));
        assert!(page.contains("Sign out"));
    }
}
