//! Generic tenant scoped GET/POST helper.

use serde::Serialize;
use serde_json::Value;
use tick_core::urls::user_agent;
use tick_core::{ApiUrls, Authorization};

use crate::{ApiError, HttpRequest, HttpResponse, Transport};

/// Issues requests on behalf of one authorized user.
///
/// Every request carries the same token and tenant; typed resources borrow a
/// single client so they cannot mix sessions.
#[derive(Debug)]
pub struct ResourceClient<T> {
    transport: T,
    urls: ApiUrls,
    authorization: Authorization,
}

impl<T: Transport> ResourceClient<T> {
    pub const fn new(transport: T, urls: ApiUrls, authorization: Authorization) -> Self {
        Self {
            transport,
            urls,
            authorization,
        }
    }

    pub const fn authorization(&self) -> &Authorization {
        &self.authorization
    }

    /// GETs `path` and returns the parsed body, whatever its JSON shape.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.authorized(HttpRequest::get(self.url(path)));
        parse_body(self.transport.send(request).await?)
    }

    /// Same request as [`get`](Self::get), for collection endpoints.
    pub async fn list(&self, path: &str) -> Result<Value, ApiError> {
        self.get(path).await
    }

    /// POSTs `body` as JSON and returns the parsed response body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        let request = self.authorized(HttpRequest::post(self.url(path), body));
        parse_body(self.transport.send(request).await?)
    }

    fn url(&self, path: &str) -> String {
        self.urls.tenant_resource(&self.authorization.tenant_id, path)
    }

    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        request
            .with_header("User-Agent", user_agent(&self.authorization.username))
            .with_header(
                "Authorization",
                format!("Token token={}", self.authorization.api_token),
            )
    }
}

/// Parses a body as JSON without looking at the status code.
fn parse_body(response: HttpResponse) -> Result<Value, ApiError> {
    if response.status >= 400 {
        tracing::debug!(status = response.status, "server reported an error status");
    }
    serde_json::from_str(&response.body).map_err(|_| ApiError::Response {
        body: response.body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::Method;
    use crate::testing::StubTransport;

    const TENANT_ROOT: &str = "https://www.tickspot.com/456/api/v2/";

    fn client(transport: StubTransport) -> ResourceClient<StubTransport> {
        ResourceClient::new(
            transport,
            ApiUrls::default(),
            Authorization {
                api_token: "123".to_string(),
                tenant_id: "456".to_string(),
                username: "ada".to_string(),
            },
        )
    }

    fn assert_authorized(request: &HttpRequest) {
        assert_eq!(request.header("Authorization"), Some("Token token=123"));
        assert_eq!(request.header("User-Agent"), Some("Ticker (ada)"));
        assert!(request.basic_auth.is_none());
    }

    #[tokio::test]
    async fn get_returns_object_unchanged() {
        let body = json!({"id": 1, "name": "Website", "nested": {"a": [1, 2]}});
        let transport = StubTransport::new()
            .respond(format!("{TENANT_ROOT}projects/1.json"), body.to_string());
        let client = client(transport.clone());

        assert_eq!(client.get("projects/1.json").await.unwrap(), body);

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, format!("{TENANT_ROOT}projects/1.json"));
        assert_authorized(&requests[0]);
    }

    #[tokio::test]
    async fn list_returns_array_unchanged() {
        let body = json!([{"id": 1}, {"id": 2}]);
        let transport = StubTransport::new()
            .respond(format!("{TENANT_ROOT}tasks.json"), body.to_string());
        let client = client(transport.clone());

        assert_eq!(client.list("tasks.json").await.unwrap(), body);
        assert_authorized(&transport.requests()[0]);
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let transport = StubTransport::new()
            .respond(format!("{TENANT_ROOT}entries.json"), r#"{"id": 99}"#);
        let client = client(transport.clone());

        let response = client
            .post("entries.json", &json!({"hours": 1.5}))
            .await
            .unwrap();
        assert_eq!(response, json!({"id": 99}));

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body, Some(json!({"hours": 1.5})));
        assert_authorized(&requests[0]);
    }

    #[tokio::test]
    async fn error_status_with_json_body_is_returned() {
        let transport = StubTransport::new().respond_with_status(
            format!("{TENANT_ROOT}entries.json"),
            422,
            r#"{"errors": {"hours": ["can't be blank"]}}"#,
        );
        let client = client(transport);

        let response = client.post("entries.json", &json!({})).await.unwrap();
        assert_eq!(response, json!({"errors": {"hours": ["can't be blank"]}}));
    }

    #[tokio::test]
    async fn non_json_body_is_response_error_with_body() {
        let transport = StubTransport::new().respond_with_status(
            format!("{TENANT_ROOT}projects.json"),
            500,
            "<html>Internal Server Error</html>",
        );
        let client = client(transport);

        match client.get("projects.json").await {
            Err(ApiError::Response { body }) => {
                assert_eq!(body, "<html>Internal Server Error</html>");
            }
            other => panic!("expected response error, got {other:?}"),
        }
    }
}
