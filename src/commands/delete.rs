use crate::{
    libs::{messages::Message, service::Tasker, task::TaskId},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to remove
    id: TaskId,
}

pub fn cmd(args: DeleteArgs, service: &impl Tasker) -> Result<()> {
    service.delete(args.id)?;
    msg_print!(Message::TaskDeleted(args.id));

    Ok(())
}
