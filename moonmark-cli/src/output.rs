//! Output formats offered by the CLI
//!
//! `html` is the markup fragment the engine produces; `json` is the typed block sequence.
//! `--standalone` wraps the fragment in a preview page.

use moonmark::moonmark::formats::json::to_json;
use moonmark::{FormatError, NarrativeFormatter};

const PREVIEW_STYLE: &str = "\
body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; line-height: 1.6; }
.section-header { font-size: 1.3rem; font-weight: bold; margin: 1.5rem 0 0.5rem; }
.section-number { color: #6b4fa0; }
h4 .subsection-number { color: #6b4fa0; margin-right: 0.3rem; }
blockquote { font-style: italic; border-left: 3px solid #6b4fa0; padding-left: 1rem; }
.highlight { background: #f4ecff; border-radius: 3px; padding: 0 2px; }
li.important { font-weight: bold; }
li.warning { color: #b03a2e; }
li.success { color: #1e8449; }
li.love { color: #c2185b; }
li.career { color: #1f618d; }
li.money { color: #9a7d0a; }
li.health { color: #117a65; }
li.family { color: #a04000; }
li.travel { color: #2874a6; }
";

pub fn render(
    formatter: &NarrativeFormatter,
    source: &str,
    format: &str,
    standalone: bool,
) -> Result<String, FormatError> {
    match format {
        "json" => to_json(&formatter.blocks(source)?),
        _ => {
            let fragment = formatter.format(source)?;
            Ok(if standalone {
                preview_page(&fragment)
            } else {
                fragment
            })
        }
    }
}

fn preview_page(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>moonmark preview</title>\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        PREVIEW_STYLE, fragment
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use moonmark::moonmark::testing::reading_tables;

    fn formatter() -> NarrativeFormatter {
        NarrativeFormatter::new(&reading_tables()).unwrap()
    }

    #[test]
    fn html_is_the_bare_fragment() {
        let out = render(&formatter(), "Xin chào", "html", false).unwrap();
        assert_eq!(out, "<p>Xin chào</p>");
    }

    #[test]
    fn standalone_wraps_the_fragment() {
        let out = render(&formatter(), "Xin chào", "html", true).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<body>\n<p>Xin chào</p>\n</body>"));
        assert!(out.contains(".section-header"));
    }

    #[test]
    fn json_lists_blocks() {
        let out = render(&formatter(), "1. Tổng quan", "json", false).unwrap();
        assert!(out.contains("\"type\": \"section_header\""));
        assert!(out.contains("🔮"));
    }
}
