use spendwise_core::{CurrencyFormatter, DateFormatter, PeriodService, SummaryService};
use spendwise_domain::BudgetPeriod;

use crate::cli::context::{CliContext, CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const SUMMARY_USAGE: &str = "summary [weekly|monthly|yearly] [previous]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "summary",
        "Summarize income and spending for a period",
        SUMMARY_USAGE,
        cmd_summary,
    )]
}

fn cmd_summary(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let period: BudgetPeriod = match args.first() {
        Some(value) => value.parse()?,
        None => BudgetPeriod::Monthly,
    };
    let transactions = &context.ledger.transactions;
    let summary = match args.get(1) {
        None => SummaryService::summarize_period(period, transactions, context.today()),
        Some(flag) if flag.eq_ignore_ascii_case("previous") => SummaryService::summarize(
            transactions,
            PeriodService::previous(period, context.today()),
        ),
        Some(_) => {
            return Err(CommandError::InvalidArguments(format!("usage: {}", SUMMARY_USAGE)))
        }
    };
    let fmt = &context.formatters;

    output::section(format!(
        "{} summary {} .. {}",
        period,
        fmt.format_date(summary.window.start),
        fmt.format_date(summary.window.end)
    ));
    output::info(format!("Income    {}", fmt.format_amount(summary.income)));
    output::info(format!("Expenses  {}", fmt.format_amount(summary.expenses)));
    let net = format!("Net       {}", fmt.format_amount(summary.net));
    if summary.net.is_sign_negative() {
        output::warning(net);
    } else {
        output::info(net);
    }
    for entry in &summary.per_category {
        output::info(format!(
            "  {:<14} {:>16} {:>7}  ({} txns)",
            entry.category,
            fmt.format_amount(entry.amount),
            fmt.format_percent(summary.share_of_expenses(&entry.category)),
            entry.transactions
        ));
    }
    Ok(())
}
