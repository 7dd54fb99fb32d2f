use crate::{
    libs::{
        messages::Message,
        service::Tasker,
        task::{TaskId, TaskPatch},
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the task to edit
    id: TaskId,
    /// Replacement text
    description: String,
}

pub fn cmd(args: UpdateArgs, service: &impl Tasker) -> Result<()> {
    service.update(args.id, TaskPatch::description(&args.description))?;
    msg_print!(Message::TaskUpdated(args.id));

    Ok(())
}
