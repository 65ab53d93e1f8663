//! Blog entry reader.
//!
//! Entry files carry a markdown header block, a `---` separator, then
//! the markdown body:
//!
//! ```text
//! # Title
//!
//! - date: 2011-09-01
//! - category: life
//! - tags: tag1, tag2
//!
//! ---
//!
//! Your content here.
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use pulldown_cmark::{Options, Parser, html};

use crate::error::ReaderError;
use crate::model::Entry;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["md", "mkd", "markdown"];

pub fn read_entry(path: &Path) -> Result<Entry, ReaderError> {
    let text = fs::read_to_string(path)?;
    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    parse_entry(&slug, &text)
}

/// Split an entry source at the first `---` line, pull title and meta
/// items out of the header, render the body.
pub fn parse_entry(slug: &str, source: &str) -> Result<Entry, ReaderError> {
    let mut header = Vec::new();
    let mut body = String::new();
    let mut recording = true;
    for line in source.lines() {
        if recording && line.starts_with("---") {
            recording = false;
        } else if recording {
            header.push(line);
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }

    let mut title = None;
    let mut date_raw = None;
    let mut category = None;
    let mut tags = Vec::new();
    for line in header {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("# ") {
            title = Some(rest.trim().to_string());
            continue;
        }
        let Some(item) = line.strip_prefix("- ") else { continue };
        let Some((key, value)) = item.split_once(':') else { continue };
        let value = value.trim();
        match key.trim() {
            "date" => date_raw = Some(value.to_string()),
            "category" => category = Some(value.to_string()),
            "tags" => {
                tags = value
                    .split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect();
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| ReaderError::MissingTitle(slug.to_string()))?;
    let date_raw = date_raw.ok_or_else(|| ReaderError::MissingDate(slug.to_string()))?;
    let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
        .map_err(|e| ReaderError::BadDate(date_raw.clone(), e))?;

    Ok(Entry {
        slug: slug.to_string(),
        title,
        date,
        category,
        tags,
        html: render_markdown(&body),
    })
}

pub fn render_markdown(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(body, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Hello World

- date: 2011-09-01
- category: life
- tags: tag1, tag2

---

Some **bold** prose.

```rust
fn hello() {}
```
";

    #[test]
    fn parses_header_and_body() {
        let entry = parse_entry("hello-world", SAMPLE).unwrap();
        assert_eq!(entry.title, "Hello World");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2011, 9, 1).unwrap());
        assert_eq!(entry.category.as_deref(), Some("life"));
        assert_eq!(entry.tags, vec!["tag1", "tag2"]);
        assert!(entry.html.contains("<strong>bold</strong>"));
        assert!(entry.html.contains("<code"));
    }

    #[test]
    fn missing_title_is_an_error() {
        let src = "- date: 2020-01-01\n\n---\nbody\n";
        let err = parse_entry("x", src).unwrap_err();
        assert!(matches!(err, ReaderError::MissingTitle(_)));
    }

    #[test]
    fn missing_date_is_an_error() {
        let src = "# T\n\n---\nbody\n";
        let err = parse_entry("x", src).unwrap_err();
        assert!(matches!(err, ReaderError::MissingDate(_)));
    }

    #[test]
    fn bad_date_is_an_error() {
        let src = "# T\n\n- date: sometime\n\n---\nbody\n";
        let err = parse_entry("x", src).unwrap_err();
        assert!(matches!(err, ReaderError::BadDate(_, _)));
    }

    #[test]
    fn headings_after_separator_stay_in_body() {
        let src = "# T\n\n- date: 2020-01-01\n\n---\n\n# Body heading\n";
        let entry = parse_entry("x", src).unwrap();
        assert_eq!(entry.title, "T");
        assert!(entry.html.contains("<h1>Body heading</h1>"));
    }

    #[test]
    fn unknown_meta_keys_are_ignored() {
        let src = "# T\n\n- date: 2020-01-01\n- public: false\n\n---\nbody\n";
        let entry = parse_entry("x", src).unwrap();
        assert_eq!(entry.tags, Vec::<String>::new());
        assert!(entry.category.is_none());
    }
}
