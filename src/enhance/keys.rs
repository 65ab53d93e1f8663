/// Key codes the navigation handler responds to: arrows plus the
/// vim-style h/l pair.
pub const KEY_LEFT: u32 = 37;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_H: u32 = 72;
pub const KEY_L: u32 = 76;

/// A key-down event as the page surface reports it: the key code and
/// the tag name of the element that had focus.
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub code: u32,
    pub target_tag: String,
}

impl KeyEvent {
    pub fn new(code: u32, target_tag: &str) -> KeyEvent {
        KeyEvent { code, target_tag: target_tag.to_string() }
    }

    /// Keystrokes inside text entry fields never navigate.
    fn is_text_entry(&self) -> bool {
        let tag = self.target_tag.to_ascii_lowercase();
        tag == "input" || tag == "textarea"
    }
}

/// Prev/next hrefs captured from the page at enhancement time. Absent
/// or empty links resolve to no binding, so a missing adjacent entry
/// silently does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBindings {
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl KeyBindings {
    pub fn new(prev: Option<String>, next: Option<String>) -> KeyBindings {
        KeyBindings {
            prev: prev.filter(|h| !h.is_empty()),
            next: next.filter(|h| !h.is_empty()),
        }
    }

    /// Map a key event to a navigation target, if any.
    pub fn resolve(&self, event: &KeyEvent) -> Option<&str> {
        if event.is_text_entry() {
            return None;
        }
        match event.code {
            KEY_LEFT | KEY_H => self.prev.as_deref(),
            KEY_RIGHT | KEY_L => self.next.as_deref(),
            _ => None,
        }
    }
}
