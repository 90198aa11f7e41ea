use spendwise_domain::CURRENT_SCHEMA_VERSION;

use crate::cli::context::{CliContext, CommandError, CommandResult};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show version information", "version", cmd_version),
    ]
}

fn cmd_version(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    output::info(format!("Spendwise {}", env!("CARGO_PKG_VERSION")));
    output::info(format!("Ledger schema v{}", CURRENT_SCHEMA_VERSION));
    output::info(format!("Ledger file {}", context.ledger_path.display()));
    Ok(())
}

fn cmd_help(context: &mut CliContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        let entry = context
            .command(&name)
            .ok_or_else(|| CommandError::UnknownCommand(name.clone()))?;
        help::print_command(entry);
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}
