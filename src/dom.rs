//! Minimal page model: a selector language and element tree that cover
//! exactly what the theme and the enhancement pass need. Enhancement
//! logic is written against the [`Dom`] trait so it can run against a
//! fake in tests; [`PageDom`] is the implementation real pages use.

use std::fmt::Write;

/// Supported selector forms: `#id`, `tag`, `tag.class`, `#id tag`.
/// Anything else matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Tag(String),
    TagClass(String, String),
    Within { id: String, tag: String },
    Invalid,
}

impl Selector {
    pub fn parse(input: &str) -> Selector {
        let input = input.trim();
        if input.is_empty() {
            return Selector::Invalid;
        }
        if let Some((scope, rest)) = input.split_once(' ') {
            let rest = rest.trim();
            match scope.strip_prefix('#') {
                Some(id) if !id.is_empty() && is_name(rest) => {
                    return Selector::Within { id: id.to_string(), tag: rest.to_string() };
                }
                _ => return Selector::Invalid,
            }
        }
        if let Some(id) = input.strip_prefix('#') {
            if is_name(id) {
                return Selector::Id(id.to_string());
            }
            return Selector::Invalid;
        }
        if let Some((tag, class)) = input.split_once('.') {
            if is_name(tag) && is_name(class) {
                return Selector::TagClass(tag.to_string(), class.to_string());
            }
            return Selector::Invalid;
        }
        if is_name(input) {
            return Selector::Tag(input.to_string());
        }
        Selector::Invalid
    }

    fn matches(&self, el: &Element, inside_scope: bool) -> bool {
        match self {
            Selector::Id(id) => el.id.as_deref() == Some(id.as_str()),
            Selector::Tag(tag) => el.tag == *tag,
            Selector::TagClass(tag, class) => {
                el.tag == *tag && el.classes.iter().any(|c| c == class)
            }
            Selector::Within { tag, .. } => inside_scope && el.tag == *tag,
            Selector::Invalid => false,
        }
    }
}

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Element {
        Element { tag: tag.to_string(), ..Default::default() }
    }

    pub fn id(mut self, id: &str) -> Element {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Element {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Element {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: &str) -> Element {
        self.text = text.to_string();
        self
    }

    pub fn child(mut self, child: Element) -> Element {
        self.children.push(child);
        self
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        if let Some(slot) = self.styles.iter_mut().find(|(p, _)| p == property) {
            slot.1 = value.to_string();
            return;
        }
        self.styles.push((property.to_string(), value.to_string()));
    }

    fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape_attr(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {}", name);
            } else {
                let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
            }
        }
        if !self.styles.is_empty() {
            let css: Vec<String> =
                self.styles.iter().map(|(p, v)| format!("{}:{}", p, v)).collect();
            let _ = write!(out, " style=\"{}\"", escape_attr(&css.join(";")));
        }
        out.push('>');
        if is_void(&self.tag) {
            return;
        }
        // Raw text nodes carry pre-rendered HTML (markdown output); plain
        // text goes through escaping at construction time instead.
        out.push_str(&self.text);
        for child in &self.children {
            child.render_into(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "img" | "br" | "hr" | "meta" | "link")
}

pub fn escape_text(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// The capability surface the enhancement pass is written against.
/// Every operation degrades to a no-op when the selector matches
/// nothing; none of them report errors.
pub trait Dom {
    fn exists(&self, selector: &str) -> bool;
    /// Attribute of the first match.
    fn attr(&self, selector: &str, name: &str) -> Option<String>;
    fn set_attr(&mut self, selector: &str, name: &str, value: &str);
    fn add_class(&mut self, selector: &str, class: &str);
    fn set_style(&mut self, selector: &str, property: &str, value: &str);
    /// Insert `node` as a sibling immediately after the first match.
    /// Returns false when the anchor is absent.
    fn insert_after(&mut self, selector: &str, node: Element) -> bool;

    fn hide(&mut self, selector: &str) {
        self.set_style(selector, "display", "none");
    }
}

/// In-memory page: a `<body>` subtree plus the head fields the theme
/// fills in. Serializes to a full HTML document.
#[derive(Debug, Clone)]
pub struct PageDom {
    pub title: String,
    body: Element,
}

impl PageDom {
    pub fn new(title: &str, body: Element) -> PageDom {
        PageDom { title: title.to_string(), body }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = write!(out, "<title>{}</title>\n", escape_text(&self.title));
        out.push_str("<link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n");
        self.body.render_into(&mut out);
        out.push_str("\n</html>\n");
        out
    }

    fn first<'a>(el: &'a Element, sel: &Selector, inside: bool) -> Option<&'a Element> {
        if sel.matches(el, inside) {
            return Some(el);
        }
        let inside = inside || scope_matches(sel, el);
        el.children.iter().find_map(|c| Self::first(c, sel, inside))
    }

    fn for_each(el: &mut Element, sel: &Selector, inside: bool, f: &mut impl FnMut(&mut Element)) {
        if sel.matches(el, inside) {
            f(el);
        }
        let inside = inside || scope_matches(sel, el);
        for child in &mut el.children {
            Self::for_each(child, sel, inside, f);
        }
    }

    fn insert_after_in(el: &mut Element, sel: &Selector, node: &Element) -> bool {
        if let Some(pos) = el.children.iter().position(|c| sel.matches(c, false)) {
            el.children.insert(pos + 1, node.clone());
            return true;
        }
        el.children.iter_mut().any(|c| Self::insert_after_in(c, sel, node))
    }
}

fn scope_matches(sel: &Selector, el: &Element) -> bool {
    match sel {
        Selector::Within { id, .. } => el.id.as_deref() == Some(id.as_str()),
        _ => false,
    }
}

impl Dom for PageDom {
    fn exists(&self, selector: &str) -> bool {
        let sel = Selector::parse(selector);
        Self::first(&self.body, &sel, false).is_some()
    }

    fn attr(&self, selector: &str, name: &str) -> Option<String> {
        let sel = Selector::parse(selector);
        Self::first(&self.body, &sel, false)
            .and_then(|el| el.get_attr(name))
            .map(|v| v.to_string())
    }

    fn set_attr(&mut self, selector: &str, name: &str, value: &str) {
        let sel = Selector::parse(selector);
        Self::for_each(&mut self.body, &sel, false, &mut |el| {
            if let Some(slot) = el.attrs.iter_mut().find(|(n, _)| n == name) {
                slot.1 = value.to_string();
            } else {
                el.attrs.push((name.to_string(), value.to_string()));
            }
        });
    }

    fn add_class(&mut self, selector: &str, class: &str) {
        let sel = Selector::parse(selector);
        Self::for_each(&mut self.body, &sel, false, &mut |el| {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        });
    }

    fn set_style(&mut self, selector: &str, property: &str, value: &str) {
        let sel = Selector::parse(selector);
        Self::for_each(&mut self.body, &sel, false, &mut |el| {
            el.set_style(property, value);
        });
    }

    fn insert_after(&mut self, selector: &str, node: Element) -> bool {
        let sel = Selector::parse(selector);
        if sel.matches(&self.body, false) {
            return false;
        }
        Self::insert_after_in(&mut self.body, &sel, &node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PageDom {
        let body = Element::new("body")
            .child(
                Element::new("div").id("header").child(
                    Element::new("nav").id("nav").child(
                        Element::new("ul")
                            .child(
                                Element::new("li")
                                    .id("nav-home")
                                    .child(Element::new("a").attr("href", "/").text("home")),
                            )
                            .child(
                                Element::new("li").id("nav-about").child(
                                    Element::new("a").attr("href", "/about").text("about"),
                                ),
                            ),
                    ),
                ),
            )
            .child(Element::new("a").id("next-entry").attr("href", "/entries/two"))
            .child(Element::new("div").id("footer").text("fin"));
        PageDom::new("t", body)
    }

    #[test]
    fn selector_parsing() {
        assert_eq!(Selector::parse("#footer"), Selector::Id("footer".into()));
        assert_eq!(
            Selector::parse("div.rdbWrapper"),
            Selector::TagClass("div".into(), "rdbWrapper".into())
        );
        assert_eq!(
            Selector::parse("#nav li"),
            Selector::Within { id: "nav".into(), tag: "li".into() }
        );
        assert_eq!(Selector::parse("textarea"), Selector::Tag("textarea".into()));
        assert_eq!(Selector::parse(""), Selector::Invalid);
        assert_eq!(Selector::parse("div > p"), Selector::Invalid);
    }

    #[test]
    fn queries_and_mutations() {
        let mut dom = sample();
        assert!(dom.exists("#footer"));
        assert!(!dom.exists("#search-form"));
        assert_eq!(dom.attr("#next-entry", "href").as_deref(), Some("/entries/two"));
        assert_eq!(dom.attr("#prev-entry", "href"), None);

        dom.add_class("#nav-home", "current");
        assert!(dom.render().contains("<li id=\"nav-home\" class=\"current\">"));
    }

    #[test]
    fn descendant_selector_hits_all_matches() {
        let mut dom = sample();
        dom.set_style("#nav li", "height", "36px");
        let html = dom.render();
        assert_eq!(html.matches("style=\"height:36px\"").count(), 2);
    }

    #[test]
    fn insert_after_places_sibling_behind_anchor() {
        let mut dom = sample();
        let ok = dom.insert_after("#footer", Element::new("script").attr("src", "/x.js"));
        assert!(ok);
        let html = dom.render();
        let footer = html.find("id=\"footer\"").unwrap();
        let script = html.find("<script").unwrap();
        assert!(script > footer);
    }

    #[test]
    fn insert_after_without_anchor_is_refused() {
        let mut dom = sample();
        assert!(!dom.insert_after("#missing", Element::new("script")));
    }

    #[test]
    fn invalid_selector_is_a_no_op() {
        let mut dom = sample();
        let before = dom.render();
        dom.add_class("li > a", "current");
        dom.set_style("", "height", "36px");
        assert_eq!(dom.render(), before);
    }

    #[test]
    fn hide_sets_display_none() {
        let mut dom = sample();
        dom.hide("#footer");
        assert!(dom.render().contains("id=\"footer\" style=\"display:none\""));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let body =
            Element::new("body").child(Element::new("a").attr("href", "/?a=1&b=\"2\""));
        let dom = PageDom::new("x & y", body);
        let html = dom.render();
        assert!(html.contains("href=\"/?a=1&amp;b=&quot;2&quot;\""));
        assert!(html.contains("<title>x &amp; y</title>"));
    }
}
