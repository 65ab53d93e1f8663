use std::path::{Path, PathBuf};

use crate::config::App;
use crate::error::SiteError;
use crate::model::Entry;
use crate::reader::{self, SUPPORTED_EXTENSIONS};

/// Everything the handlers share: the site identity plus the loaded
/// entries, sorted ascending by date (slug as tiebreak). Rebuilt
/// wholesale by the background reload task.
#[derive(Debug, Clone)]
pub struct Site {
    pub title: String,
    pub tagline: String,
    pub readability: bool,
    pub about_html: Option<String>,
    entries: Vec<Entry>,
}

impl Site {
    pub fn load(cfg: &App) -> Result<Site, SiteError> {
        let content_dir = PathBuf::from(cfg.get_content_dir());
        if !content_dir.is_dir() {
            return Err(SiteError::ContentDirMissing(
                content_dir.to_string_lossy().to_string(),
            ));
        }

        let mut entries = Vec::new();
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&content_dir)
            .map_err(|e| SiteError::EntryError(cfg.get_content_dir().to_string(), e.into()))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| is_entry_file(p))
            .collect();
        paths.sort();

        for path in paths {
            let label = path.to_string_lossy().to_string();
            let entry = reader::read_entry(&path).map_err(|e| SiteError::EntryError(label, e))?;
            entries.push(entry);
        }
        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.slug.cmp(&b.slug)));

        // The about page is plain markdown, no header block.
        let about_html = cfg.get_about_path().and_then(|p| match std::fs::read_to_string(p) {
            Ok(text) => Some(reader::render_markdown(&text)),
            Err(e) => {
                tracing::warn!("failed to read about page {}: {}", p, e);
                None
            }
        });

        Ok(Site {
            title: cfg.get_title().to_string(),
            tagline: cfg.get_tagline().to_string(),
            readability: cfg.readability_enabled(),
            about_html,
            entries,
        })
    }

    /// Entries in ascending date order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Newest first, for the index and archive listings.
    pub fn entries_newest_first(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().rev()
    }

    pub fn entry(&self, slug: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Adjacent entries in date order: previous is older, next is
    /// newer. Either side is absent at the ends of the timeline.
    pub fn adjacent(&self, slug: &str) -> (Option<&Entry>, Option<&Entry>) {
        let Some(pos) = self.entries.iter().position(|e| e.slug == slug) else {
            return (None, None);
        };
        let prev = pos.checked_sub(1).and_then(|i| self.entries.get(i));
        let next = self.entries.get(pos + 1);
        (prev, next)
    }

    #[cfg(test)]
    pub fn with_entries(entries: Vec<Entry>) -> Site {
        let mut entries = entries;
        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.slug.cmp(&b.slug)));
        Site {
            title: "test site".to_string(),
            tagline: "".to_string(),
            readability: true,
            about_html: None,
            entries,
        }
    }
}

fn is_entry_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(slug: &str, date: (i32, u32, u32)) -> Entry {
        Entry {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category: None,
            tags: vec![],
            html: String::new(),
        }
    }

    fn site() -> Site {
        Site::with_entries(vec![
            entry("three", (2020, 3, 1)),
            entry("one", (2020, 1, 1)),
            entry("two", (2020, 2, 1)),
        ])
    }

    #[test]
    fn entries_sorted_ascending_by_date() {
        let site = site();
        let slugs: Vec<&str> = site.entries().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["one", "two", "three"]);
    }

    #[test]
    fn adjacency_walks_the_timeline() {
        let site = site();
        let (prev, next) = site.adjacent("two");
        assert_eq!(prev.unwrap().slug, "one");
        assert_eq!(next.unwrap().slug, "three");
    }

    #[test]
    fn adjacency_is_open_at_the_ends() {
        let site = site();
        let (prev, next) = site.adjacent("one");
        assert!(prev.is_none());
        assert_eq!(next.unwrap().slug, "two");

        let (prev, next) = site.adjacent("three");
        assert_eq!(prev.unwrap().slug, "two");
        assert!(next.is_none());
    }

    #[test]
    fn unknown_slug_has_no_neighbors() {
        let site = site();
        let (prev, next) = site.adjacent("nope");
        assert!(prev.is_none());
        assert!(next.is_none());
    }

    #[test]
    fn newest_first_reverses_order() {
        let site = site();
        let slugs: Vec<&str> =
            site.entries_newest_first().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["three", "two", "one"]);
    }
}
