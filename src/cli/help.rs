use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    let width = registry
        .list()
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    for entry in registry.list() {
        output::info(format!("  {:<width$}  {}", entry.name, entry.description, width = width));
    }
    output::info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::info(format!("  description  {}", entry.description));
    output::info(format!("  usage        {}", entry.usage));
}
