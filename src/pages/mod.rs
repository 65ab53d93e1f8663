//! Pages Module
//!
//! The HTTP surface of the blog: page handlers, the theme that builds
//! each page's element tree, and the route table. Every HTML handler
//! runs the enhancement pass against the request's User-Agent before
//! serializing, so a page renders differently for mobile and desktop
//! clients.

pub mod handler;
mod routes;
pub mod theme;

pub use handler::AppState;
pub use routes::routes;
