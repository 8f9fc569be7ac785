//! Name lookups against the player directory.

use super::common::CommandContext;
use crate::{cli::types::PlayerId, scoring::PlayerDirectory, Result};

pub fn lookup_names<'a>(
    directory: &'a PlayerDirectory,
    names: &'a [String],
) -> Vec<(&'a str, Option<&'a PlayerId>)> {
    names
        .iter()
        .map(|name| (name.as_str(), directory.lookup(name)))
        .collect()
}

/// Handle the lookup command
pub async fn handle_lookup(ctx: &CommandContext, names: &[String]) -> Result<()> {
    let directory = ctx.load_directory().await?;
    for (name, id) in lookup_names(&directory, names) {
        match id {
            Some(id) => println!("{}: {}", name, id),
            None => println!("{}: not found among eligible players", name),
        }
    }
    Ok(())
}
