//! `mark-in-progress` and `mark-done`.
//!
//! Both subcommands share [`MarkArgs`]; the target status comes from which
//! subcommand was used.

use crate::{
    libs::{
        messages::Message,
        service::Tasker,
        task::{Status, TaskId},
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MarkArgs {
    /// ID of the task to mark
    id: TaskId,
}

pub fn cmd(args: MarkArgs, status: Status, service: &impl Tasker) -> Result<()> {
    service.mark(args.id, status)?;
    msg_print!(Message::TaskMarked(status, args.id));

    Ok(())
}
