//! Builds the element tree every page shares. The enhancement pass
//! runs after construction, so everything here is the page as authored
//! and everything device-dependent happens in `enhance`.

use crate::dom::{Element, PageDom, escape_text};
use crate::model::Entry;
use crate::site::Site;

pub const NAV_HOME: &str = "#nav-home";
pub const NAV_ARCHIVE: &str = "#nav-archive";
pub const NAV_ABOUT: &str = "#nav-about";

fn nav_item(id: &str, href: &str, label: &str) -> Element {
    Element::new("li")
        .id(id)
        .child(Element::new("a").attr("href", href).text(&escape_text(label)))
}

fn header(site: &Site) -> Element {
    Element::new("div")
        .id("header")
        .child(
            Element::new("h1").child(
                Element::new("a").attr("href", "/").text(&escape_text(&site.title)),
            ),
        )
        .child(
            Element::new("nav").id("nav").child(
                Element::new("ul")
                    .child(nav_item("nav-home", "/", "home"))
                    .child(nav_item("nav-archive", "/archive", "archive"))
                    .child(nav_item("nav-about", "/about", "about")),
            ),
        )
        .child(
            Element::new("form")
                .id("search-form")
                .attr("action", "/search")
                .attr("method", "get")
                .child(Element::new("input").attr("name", "q").attr("type", "search")),
        )
}

fn footer(site: &Site) -> Element {
    Element::new("div")
        .id("footer")
        .child(Element::new("p").text(&escape_text(&site.tagline)))
}

fn shell(site: &Site, page_title: &str, content: Element) -> PageDom {
    let title = if page_title.is_empty() {
        site.title.clone()
    } else {
        format!("{} - {}", page_title, site.title)
    };
    let body = Element::new("body")
        .child(header(site))
        .child(Element::new("section").id("content").child(content))
        .child(footer(site));
    PageDom::new(&title, body)
}

fn entry_list<'a>(entries: impl Iterator<Item = &'a Entry>) -> Element {
    let mut list = Element::new("ul").class("entry-list");
    for entry in entries {
        list = list.child(
            Element::new("li")
                .child(Element::new("span").class("date").text(&entry.date.to_string()))
                .child(
                    Element::new("a")
                        .attr("href", &entry.href())
                        .text(&escape_text(&entry.title)),
                ),
        );
    }
    list
}

/// Front page: the most recent entries.
pub fn index_page(site: &Site) -> (PageDom, &'static str) {
    let recent = entry_list(site.entries_newest_first().take(10));
    (shell(site, "", recent), NAV_HOME)
}

/// Every entry, newest first.
pub fn archive_page(site: &Site) -> (PageDom, &'static str) {
    let all = entry_list(site.entries_newest_first());
    (shell(site, "archive", all), NAV_ARCHIVE)
}

pub fn about_page(site: &Site) -> (PageDom, &'static str) {
    let mut content = Element::new("article");
    match &site.about_html {
        Some(html) => content = content.text(html),
        None => content = content.child(Element::new("p").text("Nothing here yet.")),
    }
    (shell(site, "about", content), NAV_ABOUT)
}

/// A single entry, with prev/next anchors only when the adjacent entry
/// exists and the readability wrapper only when the site enables it.
pub fn entry_page(site: &Site, entry: &Entry) -> (PageDom, &'static str) {
    let mut article = Element::new("article")
        .child(Element::new("h2").text(&escape_text(&entry.title)))
        .child(Element::new("span").class("date").text(&entry.date.to_string()));
    if let Some(category) = &entry.category {
        article = article.child(Element::new("span").class("category").text(&escape_text(category)));
    }
    for tag in &entry.tags {
        article = article.child(Element::new("span").class("tag").text(&escape_text(tag)));
    }
    article = article.child(Element::new("div").class("entry-body").text(&entry.html));

    let mut content = Element::new("div").child(article);
    if site.readability {
        content = content.child(Element::new("div").class("rdbWrapper"));
    }

    let (prev, next) = site.adjacent(&entry.slug);
    let mut pager = Element::new("div").class("pager");
    if let Some(prev) = prev {
        pager = pager.child(
            Element::new("a")
                .id("prev-entry")
                .attr("href", &prev.href())
                .text(&escape_text(&prev.title)),
        );
    }
    if let Some(next) = next {
        pager = pager.child(
            Element::new("a")
                .id("next-entry")
                .attr("href", &next.href())
                .text(&escape_text(&next.title)),
        );
    }
    content = content.child(pager);

    (shell(site, &entry.title, content), NAV_ARCHIVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Dom;
    use crate::site::Site;
    use chrono::NaiveDate;

    fn entry(slug: &str, day: u32) -> Entry {
        Entry {
            slug: slug.to_string(),
            title: format!("Entry {}", slug),
            date: NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
            category: None,
            tags: vec![],
            html: "<p>body</p>".to_string(),
        }
    }

    #[test]
    fn entry_page_exposes_enhancer_anchors() {
        let site = Site::with_entries(vec![entry("a", 1), entry("b", 2), entry("c", 3)]);
        let (dom, nav) = entry_page(&site, site.entry("b").unwrap());
        assert_eq!(nav, NAV_ARCHIVE);
        assert_eq!(dom.attr("#prev-entry", "href").as_deref(), Some("/entries/a"));
        assert_eq!(dom.attr("#next-entry", "href").as_deref(), Some("/entries/c"));
        assert!(dom.exists("div.rdbWrapper"));
        assert!(dom.exists("#footer"));
        assert!(dom.exists("#search-form"));
    }

    #[test]
    fn oldest_entry_has_no_prev_anchor() {
        let site = Site::with_entries(vec![entry("a", 1), entry("b", 2)]);
        let (dom, _) = entry_page(&site, site.entry("a").unwrap());
        assert!(!dom.exists("#prev-entry"));
        assert!(dom.exists("#next-entry"));
    }

    #[test]
    fn index_uses_home_nav() {
        let site = Site::with_entries(vec![entry("a", 1)]);
        let (dom, nav) = index_page(&site);
        assert_eq!(nav, NAV_HOME);
        assert!(dom.exists("#nav-home"));
        assert!(dom.render().contains("/entries/a"));
    }
}
