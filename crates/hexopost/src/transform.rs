//! Content transforms applied when a draft is finalized

use crate::codeblock::rewrite_prose;
use regex::{Captures, Regex};

/// Image subdirectory token stripped from insertion statements
pub const IMG_DIR: &str = "img/";

/// Canonical icon URL substituted for the `知乎` / `zhihu` aliases
pub const ZHIHU_ICON_URL: &str =
    "https://pic1.zhimg.com/v2-4cd83ae3d6ca76dabecf001244a62310.jpg?source=57bbeac9";

/// Canonical icon URL substituted for the `github` alias
pub const GITHUB_ICON_URL: &str =
    "https://github.githubassets.com/assets/apple-touch-icon-144x144-b882e354c005.png";

/// Resolve a known site alias to its canonical icon URL.
///
/// Unknown values pass through verbatim.
fn resolve_icon(icon: &str) -> &str {
    match icon.to_lowercase().as_str() {
        "知乎" | "zhihu" => ZHIHU_ICON_URL,
        "github" => GITHUB_ICON_URL,
        _ => icon,
    }
}

/// Strip the default image directory prefix outside code spans.
pub fn strip_image_dir(content: &str) -> String {
    strip_image_dir_in(content, IMG_DIR)
}

/// Strip `img_dir` from markdown links and HTML `<img>` tags outside
/// code spans (inline code included).
///
/// Markdown `[label](img_dir/rest)` becomes `[label](rest)`; links
/// without the exact prefix pass through unchanged. The HTML rewrite
/// always emits a double-quoted `src` regardless of the input quote
/// style.
pub fn strip_image_dir_in(content: &str, img_dir: &str) -> String {
    let markdown =
        Regex::new(&format!(r"\[([^\]]*)\]\(({})?([^)]+)\)", regex::escape(img_dir))).unwrap();
    let html =
        Regex::new(&format!(r#"<img\s+src=["']{}([^"']+)["']"#, regex::escape(img_dir))).unwrap();

    rewrite_prose(content, true, |text| {
        let text = markdown
            .replace_all(text, |caps: &Captures| format!("[{}]({})", &caps[1], &caps[3]));
        html.replace_all(&text, r#"<img src="$1""#).to_string()
    })
}

/// Remove first-level headings together with their bounding newlines.
///
/// Only fence blocks are protected; a heading quoted in single
/// backticks inside prose is still removed. A heading at the very start
/// or end of the document lacks a bounding newline on that side and is
/// kept as-is.
pub fn remove_h1_headings(content: &str) -> String {
    let heading = Regex::new(r"\n#\s+.+\n").unwrap();
    rewrite_prose(content, false, |text| heading.replace_all(text, "").to_string())
}

/// Replace icon-annotated links with `externalLinkCard` directives.
///
/// The construct is an HTML comment holding the icon, a newline, then a
/// markdown link. Applied to the whole document; code blocks are not
/// protected and the comment may span multiple lines.
pub fn replace_link_cards(content: &str) -> String {
    let pattern = Regex::new(r"(?s)<!--\s([^>]+?)\s-->\n\[(.*?)\]\((.*?)\)").unwrap();
    pattern
        .replace_all(content, |caps: &Captures| {
            let title = caps[2].trim();
            let url = caps[3].trim();
            let icon = resolve_icon(caps[1].trim());
            format!(r#"{{% externalLinkCard "{}" "{}" "{}" %}}"#, title, url, icon)
        })
        .to_string()
}

/// Apply the finalization transforms in fixed order: image-path strip,
/// heading removal, link-to-card conversion.
pub fn finalize_content(content: &str) -> String {
    let content = strip_image_dir(content);
    let content = remove_h1_headings(&content);
    replace_link_cards(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_image_prefix() {
        assert_eq!(strip_image_dir("[cat](img/cat.png)"), "[cat](cat.png)");
    }

    #[test]
    fn test_other_prefix_passes_through() {
        assert_eq!(strip_image_dir("[cat](other/cat.png)"), "[cat](other/cat.png)");
    }

    #[test]
    fn test_plain_link_unchanged() {
        assert_eq!(strip_image_dir("[site](https://example.com/a)"), "[site](https://example.com/a)");
    }

    #[test]
    fn test_strip_html_img_prefix() {
        assert_eq!(strip_image_dir(r#"<img src="img/a.png">"#), r#"<img src="a.png">"#);
    }

    #[test]
    fn test_html_img_rewrite_loses_quote_style() {
        // documented limitation: the rewrite always emits double quotes
        let input = "<img src='img/a.png' alt='cat'>";
        assert_eq!(strip_image_dir(input), r#"<img src="a.png" alt='cat'>"#);
    }

    #[test]
    fn test_image_statements_in_code_untouched() {
        let doc = "```\n[cat](img/cat.png)\n```\n[dog](img/dog.png)";
        let out = strip_image_dir(doc);
        assert!(out.contains("[cat](img/cat.png)"));
        assert!(out.contains("[dog](dog.png)"));
    }

    #[test]
    fn test_image_statement_in_inline_code_untouched() {
        let doc = "use `[cat](img/cat.png)` like this: [cat](img/cat.png)";
        let out = strip_image_dir(doc);
        assert_eq!(out, "use `[cat](img/cat.png)` like this: [cat](cat.png)");
    }

    #[test]
    fn test_custom_image_dir() {
        assert_eq!(strip_image_dir_in("[a](assets/a.png)", "assets/"), "[a](a.png)");
    }

    #[test]
    fn test_remove_heading_between_newlines() {
        // both bounding newlines are consumed with the heading
        assert_eq!(remove_h1_headings("intro\n# Title\nbody\n"), "introbody\n");
        assert_eq!(remove_h1_headings("intro\n\n# Title\n\nbody\n"), "intro\n\nbody\n");
    }

    #[test]
    fn test_heading_at_document_start_is_kept() {
        // documented limitation: no leading newline, no match
        let doc = "# Title\nbody\n";
        assert_eq!(remove_h1_headings(doc), doc);
    }

    #[test]
    fn test_second_level_heading_is_kept() {
        let doc = "a\n## Section\nb\n";
        assert_eq!(remove_h1_headings(doc), doc);
    }

    #[test]
    fn test_heading_inside_fence_is_kept() {
        let doc = "a\n```\n# In Code\n```\n\n# Outside\nb\n";
        let out = remove_h1_headings(doc);
        assert!(out.contains("# In Code"));
        assert!(!out.contains("# Outside"));
    }

    #[test]
    fn test_heading_in_inline_code_is_removed() {
        // inline protection is disabled for this transform
        let doc = "a\n# `quoted` heading\nb\n";
        assert_eq!(remove_h1_headings(doc), "ab\n");
    }

    #[test]
    fn test_all_headings_removed() {
        let doc = "x\n\n# One\n\nmid\n\n# Two\n\ny\n";
        assert_eq!(remove_h1_headings(doc), "x\n\nmid\n\ny\n");
    }

    #[test]
    fn test_card_with_github_alias() {
        let doc = "<!-- github -->\n[GitHub](https://github.com)";
        assert_eq!(
            replace_link_cards(doc),
            format!(r#"{{% externalLinkCard "GitHub" "https://github.com" "{}" %}}"#, GITHUB_ICON_URL)
        );
    }

    #[test]
    fn test_card_alias_is_case_insensitive() {
        let doc = "<!-- GitHub -->\n[g](https://github.com)";
        assert!(replace_link_cards(doc).contains(GITHUB_ICON_URL));
    }

    #[test]
    fn test_card_with_zhihu_alias() {
        let doc = "<!-- 知乎 -->\n[回答](https://zhihu.com/answer/1)";
        assert_eq!(
            replace_link_cards(doc),
            format!(r#"{{% externalLinkCard "回答" "https://zhihu.com/answer/1" "{}" %}}"#, ZHIHU_ICON_URL)
        );
    }

    #[test]
    fn test_card_with_verbatim_icon_url() {
        let doc = "<!-- https://example.com/icon.png -->\n[Site](https://example.com)";
        assert_eq!(
            replace_link_cards(doc),
            r#"{% externalLinkCard "Site" "https://example.com" "https://example.com/icon.png" %}"#
        );
    }

    #[test]
    fn test_multiple_cards_replaced() {
        let doc = "<!-- github -->\n[a](u1)\n\n<!-- x -->\n[b](u2)";
        let out = replace_link_cards(doc);
        assert_eq!(out.matches("externalLinkCard").count(), 2);
    }

    #[test]
    fn test_plain_comment_not_converted() {
        let doc = "<!-- just a note -->\ntext";
        assert_eq!(replace_link_cards(doc), doc);
    }

    #[test]
    fn test_finalize_content_order() {
        let doc = "intro\n# Title\n[cat](img/cat.png)\n<!-- github -->\n[g](https://github.com)\n";
        let out = finalize_content(doc);
        assert!(!out.contains("# Title"));
        assert!(out.contains("[cat](cat.png)"));
        assert!(out.contains("externalLinkCard"));
    }
}
