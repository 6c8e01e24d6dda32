use std::collections::HashMap;
use std::sync::RwLock;

use crud_protocol::errors::{ProtocolError, Result};

use super::binding::FormBinding;

/// The slice of a page the form bridge touches: input values and output markup.
/// Selectors are the same strings the host markup is queried with.
pub trait Document: Send + Sync {
    /// Current value of the input matching `selector`
    fn input_value(&self, selector: &str) -> Result<String>;
    /// Replace the inner markup of the element matching `selector`
    fn set_inner_html(&self, selector: &str, html: String) -> Result<()>;
}

/// In-memory page holding inputs and output elements by selector
#[derive(Debug, Default)]
pub struct Page {
    inputs: RwLock<HashMap<String, String>>,
    outputs: RwLock<HashMap<String, String>>,
}

fn poisoned<T>(_: T) -> ProtocolError {
    ProtocolError::new("Page lock poisoned")
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with an empty input for every field and an empty element for every output
    pub fn for_bindings(bindings: &[FormBinding]) -> Self {
        let page = Self::new();
        {
            let mut inputs = page.inputs.write().unwrap_or_else(|e| e.into_inner());
            let mut outputs = page.outputs.write().unwrap_or_else(|e| e.into_inner());
            for binding in bindings {
                for (_, selector) in binding.fields() {
                    inputs.insert(selector.to_string(), String::new());
                }
                outputs.insert(binding.output().to_string(), String::new());
            }
        }
        page
    }

    /// Type into an input, creating it if the page does not have it yet
    pub fn set_input(&self, selector: &str, value: &str) -> Result<()> {
        self.inputs
            .write()
            .map_err(poisoned)?
            .insert(selector.to_string(), value.to_string());
        Ok(())
    }

    pub fn add_output(&self, selector: &str) -> Result<()> {
        self.outputs
            .write()
            .map_err(poisoned)?
            .entry(selector.to_string())
            .or_insert_with(String::new);
        Ok(())
    }

    /// Current markup of an output element
    pub fn inner_html(&self, selector: &str) -> Option<String> {
        self.outputs.read().ok()?.get(selector).cloned()
    }
}

impl Document for Page {
    fn input_value(&self, selector: &str) -> Result<String> {
        self.inputs
            .read()
            .map_err(poisoned)?
            .get(selector)
            .cloned()
            .ok_or_else(|| ProtocolError::new(format!("No input matches {}", selector)))
    }

    fn set_inner_html(&self, selector: &str, html: String) -> Result<()> {
        let mut outputs = self.outputs.write().map_err(poisoned)?;
        match outputs.get_mut(selector) {
            Some(markup) => {
                *markup = html;
                Ok(())
            }
            None => Err(ProtocolError::new(format!("No element matches {}", selector))),
        }
    }
}
