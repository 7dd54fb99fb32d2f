//! Command layer: argument parsing and output around the task service.
//!
//! Each subcommand runs exactly one service operation. Failures are printed
//! and the process still exits normally; malformed arguments never reach the
//! service because clap rejects them with a usage message first.

pub mod add;
pub mod delete;
pub mod list;
pub mod mark;
pub mod reset;
pub mod update;

use crate::libs::config::{Config, DEFAULT_SAVE_PATH, SAVE_PATH_ENV};
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::task::Status;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Update a task")]
    Update(update::UpdateArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a task as in progress")]
    MarkInProgress(mark::MarkArgs),
    #[command(about = "Mark a task as done")]
    MarkDone(mark::MarkArgs),
    #[command(about = "List tasks (all or by status)")]
    List(list::ListArgs),
    #[command(about = "Remove the task file")]
    Reset,
}

#[derive(Debug, Parser)]
#[command(name = "task-cli", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Path of the JSON file that holds the tasks
    #[arg(long, global = true, env = SAVE_PATH_ENV, default_value = DEFAULT_SAVE_PATH)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the process arguments and runs one command.
    pub fn menu() {
        Self::parse().run();
    }

    /// Runs the parsed command, printing any failure with its cause chain.
    pub fn run(self) {
        if let Err(err) = self.dispatch() {
            msg_error!(Message::CommandFailed(format!("{:#}", err)));
        }
    }

    fn dispatch(self) -> Result<()> {
        let save_path = self.file;
        msg_debug!(Message::UsingTaskFile(save_path.clone()));
        let service = TaskService::new(Config::default().with_save_path(save_path.clone()));

        match self.command {
            Commands::Add(args) => add::cmd(args, &service),
            Commands::Update(args) => update::cmd(args, &service),
            Commands::Delete(args) => delete::cmd(args, &service),
            Commands::MarkInProgress(args) => mark::cmd(args, Status::InProgress, &service),
            Commands::MarkDone(args) => mark::cmd(args, Status::Done, &service),
            Commands::List(args) => list::cmd(args, &service),
            Commands::Reset => reset::cmd(&save_path),
        }
    }
}
