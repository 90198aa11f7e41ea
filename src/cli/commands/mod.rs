pub mod budget;
pub mod config;
pub mod goal;
pub mod payment;
pub mod summary;
pub mod system;
pub mod transaction;

use crate::cli::registry::CommandEntry;

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(budget::definitions());
    commands.extend(goal::definitions());
    commands.extend(transaction::definitions());
    commands.extend(payment::definitions());
    commands.extend(summary::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}
