//! `start` command: time a piece of work and log it on confirmation.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use tick_api::Transport;
use tick_core::NewEntry;
use tick_core::date::{format_date, today};

use crate::{Context, StartArgs, UsageError, prompt};

const CONFIRM_LABEL: &str = "     Press Enter to Submit Time: ";
const NOTE_LABEL: &str = "     Enter Note to Submit Time: ";

/// Waits for the user, then logs the time since `started` as today's entry.
///
/// The note is the message flag, else the current branch (both confirmed
/// with Enter), else whatever the user types.
pub async fn run<T, R, W, B>(
    writer: &mut W,
    input: &mut R,
    args: &StartArgs,
    started: Instant,
    context: Context<T>,
    current_branch: B,
) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
    B: FnOnce() -> Option<String>,
{
    let project_id = args.project.ok_or(UsageError::MissingProject)?;
    let task_id = args.task.ok_or(UsageError::MissingTask)?;

    let note = resolve_note(writer, input, args.message.as_deref(), current_branch)
        .context("failed to read note")?;
    let hours = elapsed_hours(started.elapsed());
    tracing::debug!(hours, %note, "work finished");

    let entry = NewEntry {
        project_id: Some(project_id),
        hours: Some(hours),
        date: Some(format_date(today())),
        task_id: Some(task_id),
        notes: Some(note),
    };

    let session = context.connect().await?;
    let response = session
        .create_entry(&entry)
        .await
        .context("failed to create entry")?;
    writeln!(writer, "{}", serde_json::to_string_pretty(&response)?)?;
    Ok(())
}

fn resolve_note<R, W, B>(
    writer: &mut W,
    input: &mut R,
    message: Option<&str>,
    current_branch: B,
) -> io::Result<String>
where
    R: BufRead,
    W: Write,
    B: FnOnce() -> Option<String>,
{
    if let Some(note) = message.map(str::to_string).or_else(current_branch) {
        writeln!(writer, "Working on: {note}")?;
        prompt::confirm(input, writer, CONFIRM_LABEL)?;
        return Ok(note);
    }
    prompt::ask(input, writer, NOTE_LABEL)
}

fn elapsed_hours(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() / 3600.0
}
