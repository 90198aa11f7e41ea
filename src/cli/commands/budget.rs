use spendwise_core::{BudgetService, CoreError, CurrencyFormatter, DateFormatter};
use spendwise_domain::{Budget, BudgetPeriod, TransactionKind};

use crate::cli::context::{
    parse_amount, require_args, resolve_id, short_id, CliContext, CommandResult,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const ADD_USAGE: &str = "budget-add <category> <limit> <weekly|monthly|yearly>";
const EDIT_USAGE: &str = "budget-edit <id> <category> <limit> <weekly|monthly|yearly>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "budgets",
            "Show each budget against its current period",
            "budgets",
            cmd_budgets,
        ),
        CommandEntry::new("budget-add", "Create a budget", ADD_USAGE, cmd_budget_add),
        CommandEntry::new(
            "budget-edit",
            "Change a budget's category, limit or period",
            EDIT_USAGE,
            cmd_budget_edit,
        ),
        CommandEntry::new(
            "budget-remove",
            "Delete a budget",
            "budget-remove <id>",
            cmd_budget_remove,
        ),
    ]
}

fn cmd_budgets(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    if context.ledger.budgets.is_empty() {
        output::info("No budgets yet. Add one with `budget-add`.");
        return Ok(());
    }
    let statuses = BudgetService::reconcile_all(
        &context.ledger.budgets,
        &context.ledger.transactions,
        context.today(),
    );
    let fmt = &context.formatters;
    output::section("Budgets");
    for status in statuses {
        let line = format!(
            "{}  {:<14} {:<8} {} / {} ({}) left {}  [{} .. {}]",
            short_id(status.budget.id),
            status.budget.category,
            status.budget.period.as_str(),
            fmt.format_amount(status.spent),
            fmt.format_amount(status.budget.limit),
            fmt.format_percent(status.percent_used),
            fmt.format_amount(status.remaining),
            fmt.format_date(status.window.start),
            fmt.format_date(status.window.end),
        );
        if status.is_over_budget {
            output::warning(format!("{} over by {}", line, fmt.format_amount(status.overspend())));
        } else {
            output::info(line);
        }
    }
    Ok(())
}

fn ensure_expense_category(context: &CliContext, category: &str) -> CommandResult {
    if !context
        .config
        .categories
        .allows(TransactionKind::Expense, category)
    {
        return Err(CoreError::UnknownCategory(category.to_string()).into());
    }
    Ok(())
}

fn cmd_budget_add(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 3, ADD_USAGE)?;
    let category = args[0];
    ensure_expense_category(context, category)?;
    let limit = parse_amount(args[1])?;
    let period: BudgetPeriod = args[2].parse()?;

    let id = BudgetService::add_budget(
        &mut context.ledger.budgets,
        Budget::new(category, limit, period),
    )?;
    context.mark_dirty();
    output::success(format!(
        "Added {} budget for {} ({}) [{}]",
        period.as_str(),
        category,
        context.formatters.format_amount(limit),
        short_id(id)
    ));
    Ok(())
}

fn cmd_budget_edit(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 4, EDIT_USAGE)?;
    let id = resolve_id(args[0], context.ledger.budgets.iter().map(|budget| budget.id))?;
    let category = args[1];
    ensure_expense_category(context, category)?;
    let limit = parse_amount(args[2])?;
    let period: BudgetPeriod = args[3].parse()?;

    let previous = context
        .ledger
        .budget(id)
        .map(|budget| budget.limit)
        .ok_or(CoreError::BudgetNotFound(id))?;
    BudgetService::update_budget(&mut context.ledger.budgets, id, category, limit, period)?;
    context.mark_dirty();
    let fmt = &context.formatters;
    output::success(format!(
        "Updated {} budget for {}: {} -> {} [{}]",
        period.as_str(),
        category,
        fmt.format_amount(previous),
        fmt.format_amount(limit),
        short_id(id)
    ));
    Ok(())
}

fn cmd_budget_remove(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, "budget-remove <id>")?;
    let id = resolve_id(args[0], context.ledger.budgets.iter().map(|budget| budget.id))?;
    let removed = BudgetService::remove_budget(&mut context.ledger.budgets, id)?;
    context.mark_dirty();
    output::success(format!(
        "Removed {} budget for {}",
        removed.period.as_str(),
        removed.category
    ));
    Ok(())
}
