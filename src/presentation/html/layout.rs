use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

// Escaped titles can never contain this comment.
const SLOT: &str = "<!--content-->";

pub fn document(page_title: &str, content: &impl Render) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) }
            }
            body {
                div class="container mx-auto p-6" { (content) }
            }
        }
    }
}

/// The document split around its content slot, for bodies written in pieces.
pub fn shell(page_title: &str) -> (String, String) {
    let page = document(page_title, &PreEscaped(SLOT)).into_string();
    match page.split_once(SLOT) {
        Some((head, tail)) => (head.to_owned(), tail.to_owned()),
        None => (page, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_wraps_content_in_container() {
        let (head, tail) = shell("Tom & Jerry");
        assert!(head.starts_with("<!DOCTYPE html>"));
        assert!(head.contains("<title>Tom &amp; Jerry</title>"));
        assert!(head.ends_with(r#"<div class="container mx-auto p-6">"#));
        assert_eq!(tail, "</div></body></html>");
    }

    #[test]
    fn hostile_title_cannot_split_the_shell() {
        let (head, tail) = shell("<!--content-->");
        assert!(head.contains("&lt;!--content--&gt;"));
        assert_eq!(tail, "</div></body></html>");
    }
}
