//! Groups command - list server groups.

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::domain::GroupEntry;
use crate::error::Result;

/// List every server group in declaration order.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let definition = ctx.definition()?;
    let groups: Vec<&GroupEntry> = definition.groups().collect();

    if json {
        return output::json(&groups);
    }

    if groups.is_empty() {
        output::dimmed("no server groups defined");
        return Ok(());
    }

    let name_width = groups
        .iter()
        .map(|g| g.nickname().len())
        .max()
        .unwrap_or(5)
        .max(5);

    println!("{:<width$}  {:>7}  {}", "GROUP", "MEMBERS", "DESCRIPTION", width = name_width);
    for g in groups {
        let marker = if definition.default_nickname() == Some(g.nickname()) {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<width$}  {:>7}  {}{}",
            g.nickname(),
            g.members().len(),
            g.description(),
            marker,
            width = name_width
        );
    }

    Ok(())
}
