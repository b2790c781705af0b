//! `list` command: projects, tasks, or time logged.

use std::io::Write;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use serde_json::Value;
use tick_api::Transport;
use tick_core::{Project, Task, TodaySummary};

use crate::{Category, Context, ListArgs, UsageError};

const SEPARATOR: &str = "---------------------------------------------";

pub async fn run<T: Transport, W: Write>(
    writer: &mut W,
    args: &ListArgs,
    context: Context<T>,
    today: NaiveDate,
) -> Result<()> {
    match args.category {
        Category::Project => {
            let session = context.connect().await?;
            let projects = session
                .list_projects()
                .await
                .context("failed to list projects")?;
            write_projects(writer, &projects)?;
        }
        Category::Task => {
            let session = context.connect().await?;
            let tasks = session
                .list_tasks(args.project)
                .await
                .context("failed to list tasks")?;
            write_tasks(writer, &tasks)?;
        }
        Category::Time => {
            if let Some(start_date) = args.start_date {
                let project_id = args.project.ok_or(UsageError::MissingProject)?;
                let end_date = args.end_date.unwrap_or(today);
                let session = context.connect().await?;
                let entries = session
                    .list_entries(project_id, start_date, end_date)
                    .await
                    .context("failed to list entries")?;
                write_entries(writer, &entries)?;
            } else {
                let session = context.connect().await?;
                let summary = session
                    .list_entries_today(args.project, today)
                    .await
                    .context("failed to list today's entries")?;
                write_today(writer, &summary)?;
            }
        }
    }
    Ok(())
}

pub fn write_projects<W: Write>(writer: &mut W, projects: &[Project]) -> Result<()> {
    for project in projects {
        writeln!(writer, "Project Name: {}", project.name)?;
        writeln!(writer, "          Id: {}", project.id)?;
    }
    Ok(())
}

pub fn write_tasks<W: Write>(writer: &mut W, tasks: &[Task]) -> Result<()> {
    for task in tasks {
        writeln!(writer, "Task Name: {}", task.name)?;
        writeln!(writer, "       Id: {}", task.id)?;
    }
    Ok(())
}

/// Raw entry objects as pretty JSON.
pub fn write_entries<W: Write>(writer: &mut W, entries: &[Value]) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(entries)?)?;
    Ok(())
}

pub fn write_today<W: Write>(writer: &mut W, summary: &TodaySummary) -> Result<()> {
    writeln!(writer, "{SEPARATOR}")?;
    for entry in &summary.entries {
        writeln!(writer, "Hours: {}", entry.hours)?;
        writeln!(writer, "       {}", entry.notes.as_deref().unwrap_or_default())?;
        writeln!(writer, "{SEPARATOR}")?;
    }
    writeln!(writer, "Hours Remaining: {}", summary.hours_remaining())?;
    Ok(())
}
