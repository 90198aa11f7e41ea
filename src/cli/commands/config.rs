use spendwise_domain::{BudgetPeriod, TransactionKind};

use crate::cli::context::{CliContext, CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const CONFIG_USAGE: &str = "config [show|set <currency|precision|color> <value>|gate <period...>|category-add <income|expense> <name...>]";
const MAX_PRECISION: u8 = 8;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn usage() -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", CONFIG_USAGE))
}

fn cmd_config(context: &mut CliContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(usage());
            }
            set_value(context, args[1], args[2])?;
        }
        "gate" => {
            if args.len() < 2 {
                return Err(CommandError::InvalidArguments(
                    "usage: config gate <weekly|monthly|yearly...>".into(),
                ));
            }
            let mut periods: Vec<BudgetPeriod> = Vec::new();
            for value in &args[1..] {
                let period: BudgetPeriod = value.parse()?;
                if !periods.contains(&period) {
                    periods.push(period);
                }
            }
            let names: Vec<&str> = periods.iter().map(|period| period.as_str()).collect();
            context.config.admission.gated_periods = periods;
            context.save_config()?;
            output::success(format!("Payments now checked against {} budgets.", names.join(", ")));
        }
        "category-add" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(
                    "usage: config category-add <income|expense> <name...>".into(),
                ));
            }
            let kind: TransactionKind = args[1].parse()?;
            let name = args[2..].join(" ");
            if name.trim().is_empty() {
                return Err(CommandError::InvalidArguments("category name is required".into()));
            }
            if !context.config.categories.register(kind, name.trim()) {
                output::info(format!("{} is already registered for {}.", name.trim(), kind));
                return Ok(());
            }
            context.save_config()?;
            output::success(format!("Added {} category {}.", kind, name.trim()));
        }
        _ => return Err(usage()),
    }
    Ok(())
}

fn set_value(context: &mut CliContext, key: &str, value: &str) -> CommandResult {
    match key.to_lowercase().as_str() {
        "currency" => {
            let code = value.trim().to_uppercase();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(CommandError::InvalidArguments(format!(
                    "currency must be a three-letter code, got `{}`",
                    value
                )));
            }
            context.config.currency = code;
        }
        "precision" => {
            let precision: u8 = value
                .parse()
                .ok()
                .filter(|digits| *digits <= MAX_PRECISION)
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "precision must be between 0 and {}, got `{}`",
                        MAX_PRECISION, value
                    ))
                })?;
            context.config.currency_precision = precision;
        }
        "color" => {
            context.config.ui_color_enabled = match value.to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "color must be on or off, got `{}`",
                        other
                    )))
                }
            };
            output::configure_colors(context.config.ui_color_enabled);
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown setting `{}` (use currency, precision or color)",
                other
            )))
        }
    }
    context.save_config()?;
    output::success(format!("Updated {}.", key.to_lowercase()));
    Ok(())
}

fn show_config(context: &CliContext) {
    let config = &context.config;
    let gated: Vec<&str> = config
        .admission
        .gated_periods
        .iter()
        .map(|period| period.as_str())
        .collect();
    output::section("Configuration");
    output::info(format!("Currency         {}", config.currency));
    output::info(format!("Precision        {}", config.currency_precision));
    output::info(format!("Color            {}", if config.ui_color_enabled { "on" } else { "off" }));
    output::info(format!("Gated periods    {}", gated.join(", ")));
    output::info(format!(
        "Expense labels   {}",
        config.categories.for_kind(TransactionKind::Expense).join(", ")
    ));
    output::info(format!(
        "Income labels    {}",
        config.categories.for_kind(TransactionKind::Income).join(", ")
    ));
    output::info(format!("Ledger           {}", context.ledger_path.display()));
    output::info(format!(
        "Config file      {}",
        context.config_manager.config_path().display()
    ));
}
