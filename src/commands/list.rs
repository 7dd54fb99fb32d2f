use crate::{
    libs::{service::Tasker, task::Status, view::View},
    msg_raw,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status
    #[arg(value_name = "todo|in-progress|done", value_parser = parse_status)]
    status: Option<Status>,
}

fn parse_status(value: &str) -> Result<Status, String> {
    value.parse()
}

pub fn cmd(args: ListArgs, service: &impl Tasker) -> Result<()> {
    let tasks = service.list(args.status)?;
    if !tasks.is_empty() {
        msg_raw!(View::tasks(&tasks));
    }

    Ok(())
}
