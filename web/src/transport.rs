//! Browser transport: executes core requests through `fetch`.

use reqwest::Method;
use todo_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    client: reqwest::Client,
}

impl Transport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };
        let mut builder = self.client.request(method, request.path.as_str());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        // An unreadable body is treated like an empty one; the core decides
        // what a missing payload means.
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}
