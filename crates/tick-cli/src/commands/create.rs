//! `create` command: log an entry with explicit hours.

use std::io::Write;

use anyhow::{Context as _, Result};
use tick_api::Transport;
use tick_core::NewEntry;

use crate::{Context, CreateArgs};

/// Posts the entry as given. Missing values are sent as `null` and left for
/// the server to reject.
pub async fn run<T: Transport, W: Write>(
    writer: &mut W,
    args: &CreateArgs,
    context: Context<T>,
) -> Result<()> {
    let entry = NewEntry {
        project_id: args.project,
        hours: args.hours,
        date: args.date.clone(),
        task_id: args.task,
        notes: args.message.clone(),
    };

    let session = context.connect().await?;
    let response = session
        .create_entry(&entry)
        .await
        .context("failed to create entry")?;
    writeln!(writer, "{}", serde_json::to_string_pretty(&response)?)?;
    Ok(())
}
