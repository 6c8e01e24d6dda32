//! Bindings between page forms and the product endpoint. Each form is described by a
//! `FormBinding`; `FormBridge` turns events on bound controls into independent submissions
//! whose raw JSON responses are rendered into the binding's output element.

mod binding;
mod bridge;
mod document;
pub mod render;

pub use binding::{default_bindings, EventKind, FormBinding, FormEvent};
pub use bridge::{FormBridge, Submission};
pub use document::{Document, Page};
