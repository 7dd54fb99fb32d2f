use crate::{
    libs::{messages::Message, service::Tasker, task::NewTask},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Text of the new task
    #[arg(required = true)]
    description: String,
}

pub fn cmd(args: AddArgs, service: &impl Tasker) -> Result<()> {
    let id = service.add(NewTask::new(&args.description))?;
    msg_print!(Message::TaskAdded(id));

    Ok(())
}
