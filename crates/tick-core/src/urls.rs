//! Endpoint layout of the Tick v2 API.

/// Product name sent in every `User-Agent` header.
pub const APP_NAME: &str = "Ticker";

/// Host used when no `base_url` is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.tickspot.com";

/// Fixed URL templates for one API host.
///
/// Built once at startup and never mutated. The non-tenant form is only used
/// for the roles lookup; everything after authorization is tenant scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    base: String,
}

impl Default for ApiUrls {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `https://<host>/api/v2/`
    pub fn api_root(&self) -> String {
        format!("{}/api/v2/", self.base)
    }

    /// `https://<host>/<tenant_id>/api/v2/`
    pub fn tenant_root(&self, tenant_id: &str) -> String {
        format!("{}/{tenant_id}/api/v2/", self.base)
    }

    pub fn roles(&self) -> String {
        format!("{}roles.json", self.api_root())
    }

    /// Joins a resource path onto the tenant root. Leading slashes on `path`
    /// are ignored so `"/tasks.json"` and `"tasks.json"` resolve the same.
    pub fn tenant_resource(&self, tenant_id: &str, path: &str) -> String {
        format!(
            "{}{}",
            self.tenant_root(tenant_id),
            path.trim_start_matches('/')
        )
    }
}

/// `User-Agent` value identifying the acting user.
pub fn user_agent(username: &str) -> String {
    format!("{APP_NAME} ({username})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_point_at_tickspot() {
        let urls = ApiUrls::default();
        assert_eq!(urls.roles(), "https://www.tickspot.com/api/v2/roles.json");
        assert_eq!(
            urls.tenant_root("456"),
            "https://www.tickspot.com/456/api/v2/"
        );
    }

    #[test]
    fn tenant_resource_ignores_leading_slash() {
        let urls = ApiUrls::new("http://localhost:3000/");
        assert_eq!(
            urls.tenant_resource("1", "/tasks/9.json"),
            "http://localhost:3000/1/api/v2/tasks/9.json"
        );
        assert_eq!(
            urls.tenant_resource("1", "tasks.json"),
            "http://localhost:3000/1/api/v2/tasks.json"
        );
    }

    #[test]
    fn user_agent_names_the_user() {
        assert_eq!(user_agent("ada"), "Ticker (ada)");
    }
}
