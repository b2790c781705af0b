//! Credential exchange against the roles endpoint.

use serde_json::Value;
use tick_core::urls::user_agent;
use tick_core::{ApiUrls, Authorization, Credentials};

use crate::{ApiError, HttpRequest, Transport};

/// Trades a username and password for an API token and tenant id.
#[derive(Debug)]
pub struct Authorizer<'a, T> {
    transport: &'a T,
    urls: &'a ApiUrls,
}

impl<'a, T: Transport> Authorizer<'a, T> {
    pub const fn new(transport: &'a T, urls: &'a ApiUrls) -> Self {
        Self { transport, urls }
    }

    /// Looks up the user's roles and takes the first one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] with the raw body if it is not a JSON array
    /// whose first element has `api_token` and `subscription_id`. Transport
    /// failures propagate as [`ApiError::Request`].
    pub async fn authorize(&self, credentials: &Credentials) -> Result<Authorization, ApiError> {
        let request = HttpRequest::get(self.urls.roles())
            .with_header("User-Agent", user_agent(&credentials.username))
            .with_basic_auth(&credentials.username, &credentials.password);

        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "roles lookup responded");

        parse_roles(&response.body, &credentials.username)
    }
}

fn parse_roles(body: &str, username: &str) -> Result<Authorization, ApiError> {
    let rejected = || ApiError::Auth {
        body: body.to_string(),
    };

    let roles: Vec<Value> = serde_json::from_str(body).map_err(|_| rejected())?;
    let role = roles.first().ok_or_else(rejected)?;

    Ok(Authorization {
        api_token: field_text(role, "api_token").ok_or_else(rejected)?,
        tenant_id: field_text(role, "subscription_id").ok_or_else(rejected)?,
        username: username.to_string(),
    })
}

/// Reads a string or numeric field as text.
fn field_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
