//! Headless driver for the Taskdeck board.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! add <title> | <description> | <people>
//! move <id> <active|finished>
//! list
//! json
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskdeck_core::ui::{
    app_document, DataTransfer, DragEvent, DragTarget, ProjectInput, ProjectList, PLAIN_TEXT,
};
use taskdeck_core::{ProjectId, ProjectState, ProjectStatus, TaskdeckConfig};

#[derive(Debug, Parser)]
#[command(name = "taskdeck", about = "Drive the Taskdeck board from the terminal")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

struct Board {
    form: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl Board {
    fn list_for(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    fn print(&self, out: &mut impl Write) -> io::Result<()> {
        for list in [&self.active, &self.finished] {
            writeln!(out, "== {}", list.status())?;
            for project in list.assigned_projects() {
                writeln!(
                    out,
                    "  {}  {} ({}) - {}",
                    project.id,
                    project.title,
                    project.persons_label(),
                    project.description
                )?;
            }
        }
        Ok(())
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Simulates dragover + drop of `id` onto the list for `status`
fn drop_onto(board: &Board, id: &ProjectId, status: ProjectStatus) {
    let mut data = DataTransfer::new();
    data.set_data(PLAIN_TEXT, &id.to_string());
    let mut event = DragEvent::new(data);

    let target = board.list_for(status);
    target.drag_over_handler(&mut event);
    target.drop_handler(&mut event);
}

fn run_command(board: &Board, state: &ProjectState, line: &str) -> Result<()> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let mut out = io::stdout().lock();

    match command {
        "add" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            let &[title, description, people] = fields.as_slice() else {
                bail!("usage: add <title> | <description> | <people>");
            };
            board.form.fill(title, description, people);
            match board.form.submit_handler() {
                Ok(id) => writeln!(out, "added {}", id)?,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        "move" => {
            let mut args = rest.split_whitespace();
            let (Some(id), Some(status)) = (args.next(), args.next()) else {
                bail!("usage: move <id> <active|finished>");
            };
            let id = ProjectId::from_str(id)?;
            let status = ProjectStatus::from_str(status)?;
            drop_onto(board, &id, status);
        }
        "list" => board.print(&mut out)?,
        "json" => writeln!(out, "{}", state.snapshot_json()?)?,
        other => bail!("unknown command '{}'", other),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = match &cli.config {
        Some(path) => TaskdeckConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TaskdeckConfig::default(),
    };

    let document = app_document();
    let state = ProjectState::instance();
    let board = Board {
        form: ProjectInput::new(&document, Rc::clone(&state), config.form.clone())?,
        active: ProjectList::new(
            &document,
            Rc::clone(&state),
            ProjectStatus::Active,
            config.lists.heading_for(ProjectStatus::Active),
        )?,
        finished: ProjectList::new(
            &document,
            Rc::clone(&state),
            ProjectStatus::Finished,
            config.lists.heading_for(ProjectStatus::Finished),
        )?,
    };

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Err(e) = run_command(&board, &state, line) {
            eprintln!("error: {:#}", e);
        }
    }

    Ok(())
}
