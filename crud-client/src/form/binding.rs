use crud_protocol::errors::Result;
use crud_protocol::protocol::{GraphQLRequest, Operation, Variables};

use super::document::Document;

/// DOM event a control listens for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
}

/// An event delivered to a bound control
#[derive(Debug)]
pub struct FormEvent {
    kind: EventKind,
    default_prevented: bool,
}

impl FormEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            default_prevented: false,
        }
    }

    pub fn click() -> Self {
        Self::new(EventKind::Click)
    }

    pub fn submit() -> Self {
        Self::new(EventKind::Submit)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Stop the browser from navigating or posting the form itself
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Everything needed to turn an event on one control into a request and a render target
#[derive(Clone, Debug, PartialEq)]
pub struct FormBinding {
    control: String,
    event: EventKind,
    operation: Operation,
    // (variable name, input selector) in the order the values are read
    fields: Vec<(String, String)>,
    output: String,
}

impl FormBinding {
    /// Build a binding, rejecting variables the operation does not declare
    pub fn new(
        control: &str,
        event: EventKind,
        operation: Operation,
        fields: &[(&str, &str)],
        output: &str,
    ) -> Result<Self> {
        operation.check_variables(fields.iter().map(|(name, _)| *name))?;
        Ok(Self::unchecked(control, event, operation, fields, output))
    }

    fn unchecked(
        control: &str,
        event: EventKind,
        operation: Operation,
        fields: &[(&str, &str)],
        output: &str,
    ) -> Self {
        Self {
            control: control.to_string(),
            event,
            operation,
            fields: fields
                .iter()
                .map(|(name, selector)| (name.to_string(), selector.to_string()))
                .collect(),
            output: output.to_string(),
        }
    }

    pub fn control(&self) -> &str {
        &self.control
    }

    pub fn event(&self) -> EventKind {
        self.event
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, selector)| (name.as_str(), selector.as_str()))
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Read the current input values and build the request body. Values are sent as the
    /// strings the inputs hold; a binding without fields sends no `variables` at all.
    pub fn build_request<D: Document + ?Sized>(&self, document: &D) -> Result<GraphQLRequest> {
        let request = GraphQLRequest::new(self.operation.query());
        if self.fields.is_empty() {
            return Ok(request);
        }
        let mut variables = Variables::new();
        for (name, selector) in &self.fields {
            variables.insert(
                name.clone(),
                serde_json::Value::String(document.input_value(selector)?),
            );
        }
        Ok(request.with_variables(variables))
    }
}

/// The five product forms of the CRUD page
pub fn default_bindings() -> Vec<FormBinding> {
    vec![
        FormBinding::unchecked(
            "sendList",
            EventKind::Click,
            Operation::List,
            &[],
            "#productList",
        ),
        FormBinding::unchecked(
            "getProduct",
            EventKind::Submit,
            Operation::Get,
            &[("id", "input[name=get-product-id]")],
            "#productGet",
        ),
        FormBinding::unchecked(
            "createProduct",
            EventKind::Submit,
            Operation::Create,
            &[
                ("name", "input[name=create-product-name]"),
                ("info", "input[name=create-product-info]"),
                ("price", "input[name=create-product-price]"),
            ],
            "#productCreate",
        ),
        FormBinding::unchecked(
            "updateProduct",
            EventKind::Submit,
            Operation::Update,
            &[
                ("id", "input[name=update-product-id]"),
                ("name", "input[name=update-product-name]"),
                ("info", "input[name=update-product-info]"),
                ("price", "input[name=update-product-price]"),
            ],
            "#productUpdate",
        ),
        FormBinding::unchecked(
            "deleteProduct",
            EventKind::Submit,
            Operation::Delete,
            &[("id", "input[name=delete-product-id]")],
            "#productDelete",
        ),
    ]
}
