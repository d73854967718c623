//! Sign-in page.

use maud::{html, Markup};

use crate::components::BaseLayout;

/// Render the sign-in form, with an optional error banner from a failed
/// attempt.
#[must_use]
pub fn render_sign_in_page(error: Option<&str>) -> Markup {
    let content = html! {
        h1 { "Sign in" }

        @if let Some(message) = error {
            p class="error" { (message) }
        }

        form method="post" action="/sign-in" {
            label {
                "Username"
                input type="text" name="username" autocomplete="username" required;
            }
            label {
                "Password"
                input type="password" name="password" autocomplete="current-password" required;
            }
            button type="submit" { "Sign in" }
        }
    };

    BaseLayout::new("Sign in", None).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_page_has_form() {
        let html = render_sign_in_page(None).into_string();
        assert!(html.contains("action=\"/sign-in\""));
        assert!(html.contains("name=\"username\""));
        assert!(html.contains("name=\"password\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_sign_in_page_shows_error() {
        let html = render_sign_in_page(Some("Invalid credentials")).into_string();
        assert!(html.contains("Invalid credentials"));
    }
}
