//! Platform Module - Host environment bindings
//!
//! The controller is host-agnostic behind [`DomPort`]; this module holds the
//! concrete bindings. Today that is the browser (wasm-bindgen / web-sys).
//!
//! [`DomPort`]: crate::port::DomPort

pub mod browser;

pub use browser::{BootError, WebDom, boot};
