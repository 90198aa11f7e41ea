use spendwise_core::{
    AdmissionDecision, CoreError, CurrencyFormatter, ProposedPayment, TransactionService,
};
use spendwise_domain::TransactionKind;

use crate::cli::context::{parse_amount, require_args, CliContext, CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const PAY_USAGE: &str = "pay <category> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "pay",
        "Check a payment against its budgets and record it when it fits",
        PAY_USAGE,
        cmd_pay,
    )]
}

fn cmd_pay(context: &mut CliContext, args: &[&str]) -> CommandResult {
    require_args(args, 2, PAY_USAGE)?;
    let category = args[0];
    if !context
        .config
        .categories
        .allows(TransactionKind::Expense, category)
    {
        return Err(CoreError::UnknownCategory(category.to_string()).into());
    }
    let proposed = ProposedPayment::new(category, parse_amount(args[1])?);
    let budgets = context.ledger.budgets.clone();
    let policy = context.admission_policy();

    let decision = TransactionService::simulate_payment(
        &mut context.ledger,
        &budgets,
        &proposed,
        &policy,
        context.clock.as_ref(),
    )?;

    match decision {
        AdmissionDecision::Admitted => {
            context.mark_dirty();
            output::success(format!(
                "Paid {} from {}",
                context.formatters.format_amount(proposed.amount),
                proposed.category
            ));
            Ok(())
        }
        AdmissionDecision::Rejected(rejection) => {
            Err(CommandError::PaymentRejected(Box::new(rejection)))
        }
    }
}
