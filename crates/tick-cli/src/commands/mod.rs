//! CLI subcommand implementations.

pub mod create;
pub mod list;
pub mod start;

#[cfg(test)]
pub(crate) mod testing {
    use tick_api::testing::StubTransport;

    use crate::{Config, Context};

    pub const ROLES_URL: &str = "https://www.tickspot.com/api/v2/roles.json";

    /// Tenant scoped URL for the stub session (tenant `456`).
    pub fn url(path: &str) -> String {
        format!("https://www.tickspot.com/456/api/v2/{path}")
    }

    /// A stub that accepts the roles lookup for user `ada`.
    pub fn authorized_stub() -> StubTransport {
        StubTransport::new().respond(
            ROLES_URL,
            r#"[{"api_token": "123", "subscription_id": 456}]"#,
        )
    }

    pub fn context(transport: &StubTransport) -> Context<StubTransport> {
        let config = Config {
            username: Some("ada".to_string()),
            password: Some("secret".to_string()),
            ..Config::default()
        };
        Context::new(transport.clone(), &config)
    }
}
