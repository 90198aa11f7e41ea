use spendwise_core::{CurrencyFormatter, DateFormatter, GoalService};
use spendwise_domain::FinancialGoal;

use crate::cli::context::{
    parse_amount, parse_date, require_args, resolve_id, short_id, CliContext, CommandError,
    CommandResult,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const ADD_USAGE: &str = "goal-add <target> <current> <deadline|-> <description...>";
const EDIT_USAGE: &str = "goal-edit <id> <target> <current> <deadline|-> <description...>";
const CONTRIBUTE_USAGE: &str = "goal-contribute <id> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("goals", "Show progress on savings goals", "goals", cmd_goals),
        CommandEntry::new("goal-add", "Create a savings goal", ADD_USAGE, cmd_goal_add),
        CommandEntry::new("goal-edit", "Replace a goal's details", EDIT_USAGE, cmd_goal_edit),
        CommandEntry::new(
            "goal-contribute",
            "Add savings towards a goal",
            CONTRIBUTE_USAGE,
            cmd_goal_contribute,
        ),
        CommandEntry::new("goal-remove", "Delete a goal", "goal-remove <id>", cmd_goal_remove),
    ]
}

fn cmd_goals(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    if context.ledger.goals.is_empty() {
        output::info("No goals yet. Add one with `goal-add`.");
        return Ok(());
    }
    let fmt = &context.formatters;
    output::section("Goals");
    for status in GoalService::evaluate_all(&context.ledger.goals, context.today()) {
        let goal = &status.goal;
        let deadline = goal
            .deadline
            .map(|date| format!(" due {}", fmt.format_date(date)))
            .unwrap_or_default();
        let line = format!(
            "{}  {}: {} of {} ({}){}",
            short_id(goal.id),
            goal.description,
            fmt.format_amount(goal.current_amount),
            fmt.format_amount(goal.target_amount),
            fmt.format_percent(status.percent_complete),
            deadline
        );
        if status.is_complete {
            output::success(format!("{} complete", line));
        } else if status.is_overdue {
            output::warning(format!("{} overdue", line));
        } else {
            output::info(line);
        }
    }
    Ok(())
}

/// Builds a goal from `<target> <current> <deadline|-> <description...>`.
fn goal_from_args(args: &[&str]) -> Result<FinancialGoal, CommandError> {
    let target = parse_amount(args[0])?;
    let current = parse_amount(args[1])?;
    let mut goal = FinancialGoal::new(args[3..].join(" "), target).with_current(current);
    if args[2] != "-" {
        goal = goal.with_deadline(parse_date(args[2])?);
    }
    Ok(goal)
}

fn cmd_goal_add(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 4, ADD_USAGE)?;
    let goal = goal_from_args(args)?;
    let target = goal.target_amount;
    let label = goal.description.clone();
    let id = GoalService::add_goal(&mut context.ledger.goals, goal)?;
    context.mark_dirty();
    output::success(format!(
        "Added goal `{}` targeting {} [{}]",
        label,
        context.formatters.format_amount(target),
        short_id(id)
    ));
    Ok(())
}

fn cmd_goal_edit(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 5, EDIT_USAGE)?;
    let id = resolve_id(args[0], context.ledger.goals.iter().map(|goal| goal.id))?;
    let mut goal = goal_from_args(&args[1..])?;
    goal.id = id;
    let label = goal.description.clone();
    let target = goal.target_amount;
    GoalService::update_goal(&mut context.ledger.goals, goal)?;
    context.mark_dirty();
    output::success(format!(
        "Updated goal `{}` targeting {} [{}]",
        label,
        context.formatters.format_amount(target),
        short_id(id)
    ));
    Ok(())
}

fn cmd_goal_remove(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, "goal-remove <id>")?;
    let id = resolve_id(args[0], context.ledger.goals.iter().map(|goal| goal.id))?;
    let removed = GoalService::remove_goal(&mut context.ledger.goals, id)?;
    context.mark_dirty();
    output::success(format!("Removed goal `{}`", removed.description));
    Ok(())
}

fn cmd_goal_contribute(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 2, CONTRIBUTE_USAGE)?;
    let id = resolve_id(args[0], context.ledger.goals.iter().map(|goal| goal.id))?;
    let amount = parse_amount(args[1])?;
    let saved = GoalService::contribute(&mut context.ledger.goals, id, amount)?;
    context.mark_dirty();

    let status = context
        .ledger
        .goal(id)
        .map(|goal| GoalService::evaluate(goal, context.today()));
    let fmt = &context.formatters;
    match status {
        Some(status) if status.is_complete => output::success(format!(
            "Goal `{}` reached at {}",
            status.goal.description,
            fmt.format_amount(saved)
        )),
        Some(status) => output::success(format!(
            "Goal `{}` now at {} ({})",
            status.goal.description,
            fmt.format_amount(saved),
            fmt.format_percent(status.percent_complete)
        )),
        None => output::success(format!("Saved {}", fmt.format_amount(saved))),
    }
    Ok(())
}
