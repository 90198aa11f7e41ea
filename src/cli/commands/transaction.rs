use spendwise_core::{CurrencyFormatter, DateFormatter, TransactionService};
use spendwise_domain::{Transaction, TransactionKind};

use crate::cli::context::{
    parse_amount, parse_date, require_args, resolve_id, short_id, CliContext, CommandResult,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const ADD_USAGE: &str = "txn-add <date> <income|expense> <category> <amount> <description...>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("txns", "List transactions, newest first", "txns", cmd_txns),
        CommandEntry::new("txn-add", "Record a transaction", ADD_USAGE, cmd_txn_add),
        CommandEntry::new(
            "txn-remove",
            "Delete a transaction",
            "txn-remove <id>",
            cmd_txn_remove,
        ),
    ]
}

fn cmd_txns(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    if context.ledger.transactions.is_empty() {
        output::info("No transactions recorded.");
        return Ok(());
    }
    let mut transactions: Vec<&Transaction> = context.ledger.transactions.iter().collect();
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    let fmt = &context.formatters;
    output::section("Transactions");
    for txn in transactions {
        let signed = txn.signed_amount();
        let amount = if signed.is_sign_negative() {
            fmt.format_amount(signed)
        } else {
            format!("+{}", fmt.format_amount(signed))
        };
        output::info(format!(
            "{}  {}  {:<14} {:>16}  {}",
            short_id(txn.id),
            fmt.format_date(txn.date),
            txn.category,
            amount,
            txn.description
        ));
    }
    Ok(())
}

fn cmd_txn_add(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 5, ADD_USAGE)?;
    let date = parse_date(args[0])?;
    let kind: TransactionKind = args[1].parse()?;
    let category = args[2];
    let amount = parse_amount(args[3])?;
    let description = args[4..].join(" ");

    let transaction = Transaction::new(date, description, amount, category, kind);
    let id = TransactionService::record(
        &mut context.ledger,
        transaction,
        Some(&context.config.categories),
    )?;
    context.mark_dirty();
    output::success(format!(
        "Recorded {} of {} in {} on {} [{}]",
        kind,
        context.formatters.format_amount(amount),
        category,
        context.formatters.format_date(date),
        short_id(id)
    ));
    Ok(())
}

fn cmd_txn_remove(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, "txn-remove <id>")?;
    let id = resolve_id(args[0], context.ledger.transactions.iter().map(|txn| txn.id))?;
    let removed = TransactionService::remove(&mut context.ledger, id)?;
    context.mark_dirty();
    output::success(format!(
        "Removed `{}` ({})",
        removed.description,
        context.formatters.format_amount(removed.amount)
    ));
    Ok(())
}
