use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html};

lazy_static! {
    static ref EXTRA_BLANKS: Regex = Regex::new(r"\n\s*\n\s*\n").unwrap();
    static ref IMAGE_SYNTAX: Regex = Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap();
    static ref LEFTOVER_TAGS: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Body fragments that are empty or the literal `\n` marker left behind
/// by the record store are dropped, the rest concatenated and cleaned.
pub fn clean_fragments(parts: &[&str]) -> String {
    let joined: String = parts
        .iter()
        .filter(|part| {
            let trimmed = part.trim();
            !trimmed.is_empty() && trimmed != "\\n"
        })
        .copied()
        .collect();
    clean(&joined)
}

/// Normalizes a raw HTML body to markdown: converts the markup, collapses
/// runs of blank lines down to one, re-normalizes image syntax, strips
/// any tags that survived conversion, and trims the ends.
pub fn clean(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }

    let markdown = html_to_markdown(body);
    let markdown = EXTRA_BLANKS.replace_all(&markdown, "\n\n");
    let markdown = IMAGE_SYNTAX.replace_all(&markdown, "![${1}](${2})");
    let markdown = LEFTOVER_TAGS.replace_all(&markdown, "");
    markdown.trim().to_string()
}

/// ATX-flavored markdown from an HTML fragment, by direct tree walk.
/// Elements without a markdown counterpart contribute their children.
pub fn html_to_markdown(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    walk_children(fragment.root_element(), &mut out);
    out
}

fn walk_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            walk_element(el, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

fn walk_element(el: ElementRef<'_>, out: &mut String) {
    let name = el.value().name();
    match name {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = name[1..].parse::<usize>().unwrap_or(1);
            out.push_str("\n\n");
            out.push_str(&"#".repeat(level));
            out.push(' ');
            out.push_str(el.text().collect::<String>().trim());
            out.push_str("\n\n");
        }
        "p" | "div" => {
            out.push_str("\n\n");
            walk_children(el, out);
            out.push_str("\n\n");
        }
        "br" => out.push('\n'),
        "strong" | "b" => {
            out.push_str("**");
            walk_children(el, out);
            out.push_str("**");
        }
        "em" | "i" => {
            out.push('*');
            walk_children(el, out);
            out.push('*');
        }
        "a" => {
            out.push('[');
            walk_children(el, out);
            out.push_str("](");
            out.push_str(el.value().attr("href").unwrap_or(""));
            out.push(')');
        }
        "img" => {
            let alt = el.value().attr("alt").unwrap_or("");
            let src = el.value().attr("src").unwrap_or("");
            out.push_str("![");
            out.push_str(alt);
            out.push_str("](");
            out.push_str(src);
            out.push(')');
        }
        "ul" | "ol" => {
            out.push_str("\n\n");
            let mut index = 1;
            for child in el.children() {
                let item = match ElementRef::wrap(child) {
                    Some(item) if item.value().name() == "li" => item,
                    _ => continue,
                };
                if name == "ul" {
                    out.push_str("- ");
                } else {
                    out.push_str(&format!("{}. ", index));
                    index += 1;
                }
                let mut inner = String::new();
                walk_children(item, &mut inner);
                out.push_str(inner.trim());
                out.push('\n');
            }
            out.push('\n');
        }
        "blockquote" => {
            let mut inner = String::new();
            walk_children(el, &mut inner);
            out.push_str("\n\n");
            for line in inner.trim().lines() {
                out.push_str("> ");
                out.push_str(line.trim());
                out.push('\n');
            }
            out.push('\n');
        }
        "code" => {
            out.push('`');
            walk_children(el, out);
            out.push('`');
        }
        // Non-content subtrees contribute nothing.
        "script" | "style" => {}
        _ => walk_children(el, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n "), "");
        assert_eq!(clean_fragments(&[]), "");
    }

    #[test]
    fn test_clean_fragments_drops_markers() {
        let parts = ["<p>Hi</p>", "", "\\n", "  ", "<p>Yo</p>"];
        assert_eq!(clean_fragments(&parts), "Hi\n\nYo");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(clean("Hello"), "Hello");
    }

    #[test]
    fn test_atx_headings() {
        assert_eq!(clean("<h1>Top</h1>"), "# Top");
        assert_eq!(clean("<h2>Sub</h2><p>body</p>"), "## Sub\n\nbody");
        assert_eq!(clean("<h6>Deep</h6>"), "###### Deep");
    }

    #[test]
    fn test_paragraphs_become_blocks() {
        assert_eq!(clean("<p>one</p><p>two</p>"), "one\n\ntwo");
    }

    #[test]
    fn test_no_blank_line_runs_survive() {
        let result = clean("a\n\n\n\n\nb");
        assert_eq!(result, "a\n\nb");

        let result = clean("<p>a</p>\n\n\n<p>b</p>\n\n\n\n<p>c</p>");
        assert!(!result.contains("\n\n\n"));
    }

    #[test]
    fn test_image_syntax() {
        assert_eq!(
            clean(r#"<img alt="a cat" src="cat.png"/>"#),
            "![a cat](cat.png)"
        );
        assert_eq!(clean(r#"<img src="dog.png"/>"#), "![](dog.png)");
    }

    #[test]
    fn test_links_and_emphasis() {
        assert_eq!(
            clean(r#"<p>see <a href="http://x.lv">here</a></p>"#),
            "see [here](http://x.lv)"
        );
        assert_eq!(clean("<p><strong>bold</strong> and <em>soft</em></p>"), "**bold** and *soft*");
    }

    #[test]
    fn test_lists() {
        assert_eq!(clean("<ul><li>one</li><li>two</li></ul>"), "- one\n- two");
        assert_eq!(clean("<ol><li>one</li><li>two</li></ol>"), "1. one\n2. two");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(clean("<blockquote>wise words</blockquote>"), "> wise words");
    }

    #[test]
    fn test_leftover_tags_are_stripped() {
        // An entity-escaped tag survives conversion as literal text and
        // is removed by the final pass.
        assert_eq!(clean("<p>keep &lt;small&gt;out</p>"), "keep out");
    }

    #[test]
    fn test_script_and_style_dropped() {
        assert_eq!(clean("<p>a</p><script>alert(1)</script>"), "a");
        assert_eq!(clean("<style>p{}</style><p>b</p>"), "b");
    }
}
