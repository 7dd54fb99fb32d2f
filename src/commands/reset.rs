use crate::{
    libs::{messages::Message, storage},
    msg_print,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Removes the task file. Succeeds when there is nothing to remove.
pub fn cmd(save_path: &Path) -> Result<()> {
    storage::delete_file(save_path).context("failed to reset tasks")?;
    msg_print!(Message::TaskFileRemoved(save_path.to_path_buf()));

    Ok(())
}
