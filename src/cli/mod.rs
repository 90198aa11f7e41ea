//! One-shot command line front end: `spendwise_cli <command> [args...]`.

pub mod commands;
pub mod context;
pub mod formatters;
pub mod help;
pub mod output;
pub mod registry;

use tracing::{info, warn};

pub use context::{CliContext, CommandError, CommandResult};

/// Runs a single command against the ledger described by the environment.
pub fn run_cli<I, S>(args: I) -> CommandResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|arg| arg.as_ref().to_string()).collect();
    let mut context = CliContext::from_env()?;
    output::configure_colors(context.config.ui_color_enabled);
    dispatch(&mut context, &args)
}

/// Dispatches `args` against an already built context and saves the ledger
/// when the command changed it.
pub fn dispatch(context: &mut CliContext, args: &[String]) -> CommandResult {
    let Some((name, rest)) = args.split_first() else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    let name = name.to_lowercase();
    let handler = context
        .registry
        .handler(&name)
        .ok_or_else(|| CommandError::UnknownCommand(name.clone()))?;
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

    info!(command = %name, "running command");
    let result = handler(context, &rest);
    if let Err(err) = &result {
        warn!(command = %name, error = %err, "command failed");
    }
    result?;
    context.persist()
}
