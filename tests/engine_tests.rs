use chrono::NaiveDate;
use rust_decimal_macros::dec;
use spendwise::cli::{dispatch, CliContext, CommandError};
use spendwise::config::{Config, ConfigManager};
use spendwise::domain::{Budget, BudgetPeriod, FinancialGoal, Ledger, Transaction};
use spendwise::engine::{
    AdmissionPolicy, AdmissionService, BudgetService, FixedClock, GoalService, PeriodService,
    ProposedPayment,
};
use spendwise::utils::persistence::{load_ledger_from_file, save_ledger_to_file};
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn food_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .budgets
        .push(Budget::new("Food", dec!(500), BudgetPeriod::Monthly));
    ledger.transactions.extend([
        Transaction::expense(date(2025, 3, 2), "Groceries", dec!(230), "Food"),
        Transaction::expense(date(2025, 3, 12), "Groceries", dec!(250), "Food"),
        Transaction::expense(date(2025, 2, 28), "Last month", dec!(400), "Food"),
        Transaction::income(date(2025, 3, 1), "Salary", dec!(2500), "Salary"),
    ]);
    ledger
}

#[test]
fn reconcile_survives_a_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let ledger = food_ledger();
    save_ledger_to_file(&ledger, &path).unwrap();
    let loaded = load_ledger_from_file(&path).unwrap();

    let now = date(2025, 3, 20);
    let before = BudgetService::reconcile_all(&ledger.budgets, &ledger.transactions, now);
    let after = BudgetService::reconcile_all(&loaded.budgets, &loaded.transactions, now);
    assert_eq!(before, after);
    assert_eq!(after[0].spent, dec!(480));
    assert_eq!(after[0].remaining, dec!(20));
    assert_eq!(after[0].percent_used, dec!(96));
    assert_eq!(after[0].window, PeriodService::resolve(BudgetPeriod::Monthly, now));
}

#[test]
fn weekly_budgets_gate_only_when_policy_says_so() {
    let mut ledger = food_ledger();
    ledger
        .budgets
        .push(Budget::new("Food", dec!(100), BudgetPeriod::Weekly));
    let proposed = ProposedPayment::new("Food", dec!(10));
    let now = date(2025, 3, 13);

    let monthly_only = AdmissionService::admit_with_policy(
        &proposed,
        &ledger.budgets,
        &ledger.transactions,
        now,
        &AdmissionPolicy::default(),
    )
    .unwrap();
    assert!(monthly_only.is_admitted());

    let everything = AdmissionService::admit_with_policy(
        &proposed,
        &ledger.budgets,
        &ledger.transactions,
        now,
        &AdmissionPolicy::all_periods(),
    )
    .unwrap();
    let rejection = everything.rejection().expect("weekly budget is already spent");
    assert_eq!(rejection.status.budget.period, BudgetPeriod::Weekly);
}

#[test]
fn goal_deadline_drives_overdue_flag() {
    let goal = FinancialGoal::new("Bike", dec!(800))
        .with_current(dec!(200))
        .with_deadline(date(2025, 3, 1));
    assert!(GoalService::evaluate(&goal, date(2025, 3, 2)).is_overdue);
    assert!(!GoalService::evaluate(&goal, date(2025, 3, 1)).is_overdue);

    let done = goal.clone().with_current(dec!(800));
    let status = GoalService::evaluate(&done, date(2025, 6, 1));
    assert!(status.is_complete);
    assert!(!status.is_overdue);
}

#[test]
fn rejected_payment_via_dispatch_leaves_ledger_file_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    save_ledger_to_file(&food_ledger(), &path).unwrap();
    let original = std::fs::read_to_string(&path).unwrap();

    let mut context = CliContext::new(
        load_ledger_from_file(&path).unwrap(),
        path.clone(),
        ConfigManager::new(dir.path().join("config.json")),
        Config::default(),
        Box::new(FixedClock::new(date(2025, 3, 20))),
    );
    let result = dispatch(&mut context, &args(&["pay", "Food", "25"]));
    match result {
        Err(CommandError::PaymentRejected(rejection)) => {
            assert_eq!(rejection.hypothetical_spent, dec!(505));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
    assert!(!context.is_dirty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);

    dispatch(&mut context, &args(&["pay", "Food", "15"])).unwrap();
    let reloaded = load_ledger_from_file(&path).unwrap();
    assert_eq!(reloaded.transactions.len(), 5);
    let spent = BudgetService::reconcile(&reloaded.budgets[0], &reloaded.transactions, date(2025, 3, 20)).spent;
    assert_eq!(spent, dec!(495));
}

#[test]
fn dispatch_rejects_bad_arguments() {
    let dir = tempdir().unwrap();
    let mut context = CliContext::new(
        Ledger::new(),
        dir.path().join("ledger.json"),
        ConfigManager::new(dir.path().join("config.json")),
        Config::default(),
        Box::new(FixedClock::new(date(2025, 3, 20))),
    );
    assert!(matches!(
        dispatch(&mut context, &args(&["budget-add", "Food", "500", "fortnightly"])),
        Err(CommandError::InvalidArguments(_))
    ));
    assert!(matches!(
        dispatch(&mut context, &args(&["pay", "Food", "-5"])),
        Err(CommandError::Core(_))
    ));
    assert!(matches!(
        dispatch(&mut context, &args(&["goal-add", "100"])),
        Err(CommandError::InvalidArguments(message)) if message.starts_with("usage:")
    ));
    assert!(!dir.path().join("ledger.json").exists());
}
