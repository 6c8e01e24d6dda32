use std::sync::Arc;

use rand::Rng;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, Instrument};

use crud_protocol::errors::{ProtocolError, Result};
use crud_protocol::protocol::GraphQLRequest;

use super::binding::{default_bindings, FormBinding, FormEvent};
use super::document::Document;
use super::render;
use crate::http_client::HttpClient;

/// Handle of one in-flight submission. Resolves to the submission's failure, if any;
/// dropping it leaves the submission running.
pub type Submission = JoinHandle<Result<()>>;

/// Routes events on bound controls to the product endpoint. Submissions share nothing but
/// the client and the document, and each one writes only to its binding's output element.
pub struct FormBridge<D> {
    client: Arc<HttpClient>,
    document: Arc<D>,
    bindings: Vec<FormBinding>,
}

impl<D: Document + 'static> FormBridge<D> {
    /// Bridge for the five product forms
    pub fn new(client: HttpClient, document: Arc<D>) -> Self {
        Self::with_bindings(client, document, default_bindings())
    }

    pub fn with_bindings(client: HttpClient, document: Arc<D>, bindings: Vec<FormBinding>) -> Self {
        Self {
            client: Arc::new(client),
            document,
            bindings,
        }
    }

    pub fn document(&self) -> &Arc<D> {
        &self.document
    }

    pub fn bindings(&self) -> &[FormBinding] {
        &self.bindings
    }

    /// Deliver an event to `control`. Returns `None` when no binding listens on that control
    /// for this kind of event.
    pub fn dispatch(&self, control: &str, event: &mut FormEvent) -> Result<Option<Submission>> {
        let binding = self
            .bindings
            .iter()
            .find(|binding| binding.control() == control && binding.event() == event.kind());
        match binding {
            Some(binding) => self.handle_submit(binding, event).map(Some),
            None => Ok(None),
        }
    }

    /// Prevent the default action, read the binding's inputs now, then send and render on a
    /// separate task of the current tokio runtime. Fails without sending anything when
    /// called outside a runtime.
    pub fn handle_submit(&self, binding: &FormBinding, event: &mut FormEvent) -> Result<Submission> {
        event.prevent_default();
        let id: u32 = rand::thread_rng().gen();
        let span = tracing::info_span!("SUBMIT", control = binding.control(), id = %id);
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                let e = ProtocolError::new(format!("No tokio runtime to submit on: {}", e));
                span.in_scope(|| error!(error = %e, "could not submit form"));
                return Err(e);
            }
        };
        let request = match binding.build_request(self.document.as_ref()) {
            Ok(request) => request,
            Err(e) => {
                span.in_scope(|| error!(error = %e, "could not read form"));
                return Err(e);
            }
        };
        let client = self.client.clone();
        let document = self.document.clone();
        let output = binding.output().to_string();
        let submission = async move {
            let rendered = fetch_and_render(&client, &request).await;
            let result = rendered.and_then(|html| document.set_inner_html(&output, html));
            if let Err(ref e) = result {
                error!(error = %e, "submission failed");
            }
            result
        };
        Ok(runtime.spawn(submission.instrument(span)))
    }
}

async fn fetch_and_render(client: &HttpClient, request: &GraphQLRequest) -> Result<String> {
    let response = client.send_request(request).await?;
    // non-2xx bodies are rendered like any other
    debug!(status = %response.status(), "response received");
    let json = client.read_json(response).await?;
    render::to_html(&json)
}
