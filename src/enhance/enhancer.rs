use crate::device::DeviceClass;
use crate::dom::{Dom, Element};
use crate::enhance::keys::KeyBindings;

pub const DEFAULT_NAV: &str = "#nav-home";
pub const ACTIVE_CLASS: &str = "current";
pub const READABILITY_EMBED_URL: &str = "http://www.readability.com/embed.js";

const PREV_ENTRY: &str = "#prev-entry";
const NEXT_ENTRY: &str = "#next-entry";
const READABILITY_WRAPPER: &str = "div.rdbWrapper";
const FOOTER: &str = "#footer";
const SEARCH_FORM: &str = "#search-form";

const NAV_BAR_HEIGHT: &str = "36px";
const NAV_FONT_SIZE: &str = "13px";

/// What a single enhancement pass did to the page.
#[derive(Debug, Clone)]
pub struct Enhanced {
    pub device: DeviceClass,
    /// Present only on desktop; mobile pages get no key handler.
    pub key_bindings: Option<KeyBindings>,
    pub embed_injected: bool,
}

/// Run the one-shot enhancement pass over a page. Operations apply in
/// fixed order; every missing-element condition is a silent no-op.
pub fn enhance<D: Dom>(dom: &mut D, descriptor: &str, current_nav: Option<&str>) -> Enhanced {
    let device = DeviceClass::classify(descriptor);

    mark_active_nav(dom, current_nav);

    let mut key_bindings = None;
    let mut embed_injected = false;
    if device.is_mobile() {
        apply_mobile_layout(dom);
    } else {
        key_bindings = Some(bind_keys(dom));
        embed_injected = inject_embed(dom);
    }

    Enhanced { device, key_bindings, embed_injected }
}

fn mark_active_nav<D: Dom>(dom: &mut D, current_nav: Option<&str>) {
    let target = current_nav.unwrap_or(DEFAULT_NAV);
    dom.add_class(target, ACTIVE_CLASS);
}

fn bind_keys<D: Dom>(dom: &D) -> KeyBindings {
    KeyBindings::new(dom.attr(PREV_ENTRY, "href"), dom.attr(NEXT_ENTRY, "href"))
}

fn inject_embed<D: Dom>(dom: &mut D) -> bool {
    if !dom.exists(READABILITY_WRAPPER) {
        return false;
    }
    let tag = Element::new("script")
        .attr("type", "text/javascript")
        .attr("src", READABILITY_EMBED_URL)
        .attr("async", "");
    if dom.insert_after(FOOTER, tag) {
        true
    } else {
        tracing::debug!("no footer element, skipping readability embed");
        false
    }
}

fn apply_mobile_layout<D: Dom>(dom: &mut D) {
    dom.hide(SEARCH_FORM);
    dom.set_style("#header nav", "height", NAV_BAR_HEIGHT);
    dom.set_style("#nav li", "height", NAV_BAR_HEIGHT);
    dom.set_style("#nav a", "font-size", NAV_FONT_SIZE);
    dom.set_style("#nav a", "line-height", NAV_BAR_HEIGHT);
}
