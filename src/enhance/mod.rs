//! Page Enhancer
//!
//! The one-shot pass that runs over every rendered page before it is
//! served: classifies the requesting device from its identity string,
//! marks the current navigation item, captures keyboard prev/next
//! navigation bindings on desktop, injects the readability embed tag
//! when the page offers reader mode, and compacts the layout on
//! mobile.
//!
//! The pass is written against the [`crate::dom::Dom`] capability
//! trait, so it runs the same against a real page model or a test
//! fake. It never fails: every missing-element condition degrades to a
//! no-op.
//!
//! # Usage
//!
//! ```rust,ignore
//! use broadsheet::enhance;
//!
//! let outcome = enhance::enhance(&mut dom, user_agent, Some("#nav-archive"));
//! if let Some(bindings) = &outcome.key_bindings {
//!     // resolve key events against the page
//! }
//! ```

mod enhancer;
mod keys;

pub use enhancer::{ACTIVE_CLASS, DEFAULT_NAV, Enhanced, READABILITY_EMBED_URL, enhance};
pub use keys::{KEY_H, KEY_L, KEY_LEFT, KEY_RIGHT, KeyBindings, KeyEvent};
