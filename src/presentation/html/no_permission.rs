use super::layout;
use maud::{Markup, Render, html};

pub const PAGE_TITLE: &str = "Access denied";

/// Shown in place of a page the caller may not see.
#[derive(Debug, Clone)]
pub struct NoPermission<'a> {
    message: &'a str,
}

impl<'a> NoPermission<'a> {
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    pub fn page(&self) -> String {
        layout::document(PAGE_TITLE, self).into_string()
    }
}

impl Render for NoPermission<'_> {
    fn render(&self) -> Markup {
        html! {
            section role="alert" class="no-permission" {
                h1 { (PAGE_TITLE) }
                p { (self.message) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_message_verbatim_and_escaped() {
        let html = NoPermission::new("Insufficient role <admin>").page();
        assert!(html.contains(r#"<section role="alert" class="no-permission">"#));
        assert!(html.contains("<p>Insufficient role &lt;admin&gt;</p>"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn markup_in_message_is_never_interpreted() {
        let html = NoPermission::new(r#""><script>alert(1)</script>"#).page();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
