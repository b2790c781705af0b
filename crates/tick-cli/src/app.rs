//! Wiring between parsed commands, configuration and the API session.

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context as _, Result};
use tick_api::{Authorizer, Session, Transport};
use tick_core::{ApiUrls, Credentials};

use crate::commands::{create, list, start};
use crate::{Commands, Config};

/// Everything needed to open a session, before any request is made.
#[derive(Debug)]
pub struct Context<T> {
    transport: T,
    urls: ApiUrls,
    credentials: Credentials,
}

impl<T: Transport> Context<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            urls: config.urls(),
            credentials: config.credentials(),
        }
    }

    /// Authorizes, then builds the session around the returned token.
    pub async fn connect(self) -> Result<Session<T>> {
        let authorization = Authorizer::new(&self.transport, &self.urls)
            .authorize(&self.credentials)
            .await
            .context("failed to authorize with Tick")?;
        tracing::debug!(tenant_id = %authorization.tenant_id, "authorized");

        Ok(Session::new(self.transport, self.urls, authorization))
    }
}

/// Runs one command to completion.
///
/// `started` marks the invocation start, used by `start` to time the work.
/// `current_branch` is only called by `start` when no message is given.
pub async fn execute<T, R, W, B>(
    command: &Commands,
    started: Instant,
    context: Context<T>,
    input: &mut R,
    output: &mut W,
    current_branch: B,
) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
    B: FnOnce() -> Option<String>,
{
    match command {
        Commands::List(args) => list::run(output, args, context, tick_core::date::today()).await,
        Commands::Create(args) => create::run(output, args, context).await,
        Commands::Start(args) => {
            start::run(output, input, args, started, context, current_branch).await
        }
    }
}
