use std::error::Error;

pub mod api;
pub mod assets;
pub mod config;
pub mod device;
pub mod dom;
pub mod enhance;
pub mod error;
pub mod model;
pub mod pages;
pub mod reader;
pub mod site;

pub fn unpack_error(err: &(dyn Error)) -> String {
    let mut parts = Vec::new();
    parts.push(err.to_string());
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}
