use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    admission_service::{AdmissionService, ProposedPayment},
    budget_service::BudgetService,
    goal_service::GoalService,
    period_service::PeriodService,
};
use spendwise_domain::{Budget, BudgetPeriod, FinancialGoal, Transaction};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mixed_log() -> Vec<Transaction> {
    vec![
        Transaction::expense(date(2025, 3, 1), "Market", dec!(12.30), "Food"),
        Transaction::expense(date(2025, 3, 8), "Bakery", dec!(6.45), "Food"),
        Transaction::income(date(2025, 3, 9), "Salary", dec!(2500), "Salary"),
        Transaction::expense(date(2025, 3, 31), "Takeaway", dec!(21), "Food"),
        Transaction::expense(date(2025, 4, 1), "Brunch", dec!(35), "Food"),
    ]
}

#[test]
fn zero_limit_budget_reports_zero_percent() {
    let budget = Budget::new("Food", Decimal::ZERO, BudgetPeriod::Monthly);
    let now = date(2025, 3, 15);

    let with_spend = BudgetService::reconcile(&budget, &mixed_log(), now);
    assert_eq!(with_spend.percent_used, Decimal::ZERO);
    assert!(with_spend.is_over_budget);

    let without_spend = BudgetService::reconcile(&budget, &[], now);
    assert_eq!(without_spend.percent_used, Decimal::ZERO);
    assert!(!without_spend.is_over_budget);
}

#[test]
fn reconcile_is_idempotent() {
    let budget = Budget::new("Food", dec!(200), BudgetPeriod::Monthly);
    let log = mixed_log();
    let now = date(2025, 3, 15);
    let first = BudgetService::reconcile(&budget, &log, now);
    let second = BudgetService::reconcile(&budget, &log, now);
    assert_eq!(first, second);
}

#[test]
fn adding_a_matching_expense_moves_spent_and_remaining() {
    let budget = Budget::new("Food", dec!(200), BudgetPeriod::Monthly);
    let now = date(2025, 3, 15);
    let mut log = mixed_log();
    let before = BudgetService::reconcile(&budget, &log, now);

    log.push(Transaction::expense(date(2025, 3, 15), "Lunch", dec!(9.99), "Food"));
    let after = BudgetService::reconcile(&budget, &log, now);

    assert_eq!(after.spent - before.spent, dec!(9.99));
    assert!(after.remaining < before.remaining);
}

#[test]
fn window_end_is_included_and_next_day_excluded() {
    let now = date(2025, 3, 15);
    for period in BudgetPeriod::ALL {
        let window = PeriodService::resolve(period, now);
        let budget = Budget::new("Food", dec!(100), period);
        let on_end = vec![Transaction::expense(window.end, "Edge", dec!(10), "Food")];
        let after_end = vec![Transaction::expense(
            window.end + Duration::days(1),
            "Edge",
            dec!(10),
            "Food",
        )];
        assert_eq!(BudgetService::reconcile(&budget, &on_end, now).spent, dec!(10));
        assert_eq!(BudgetService::reconcile(&budget, &after_end, now).spent, Decimal::ZERO);
    }
}

#[test]
fn goal_at_target_is_complete() {
    let goal = FinancialGoal::new("Emergency fund", dec!(1000)).with_current(dec!(1000));
    let status = GoalService::evaluate(&goal, date(2025, 3, 15));
    assert!(status.is_complete);
    assert_eq!(status.percent_complete, dec!(100));
}

#[test]
fn food_budget_admission_scenarios() {
    let budgets = vec![Budget::new("Food", dec!(500), BudgetPeriod::Monthly)];
    let log = vec![
        Transaction::expense(date(2025, 3, 2), "Groceries", dec!(230), "Food"),
        Transaction::expense(date(2025, 3, 12), "Groceries", dec!(250), "Food"),
    ];
    let now = date(2025, 3, 20);

    let over = AdmissionService::admit(&ProposedPayment::new("Food", dec!(25)), &budgets, &log, now)
        .unwrap();
    let rejection = over.rejection().expect("505 exceeds 500");
    assert_eq!(rejection.status.spent, dec!(480));
    assert_eq!(rejection.hypothetical_spent, dec!(505));

    let under = AdmissionService::admit(&ProposedPayment::new("Food", dec!(15)), &budgets, &log, now)
        .unwrap();
    assert!(under.is_admitted());

    let travel =
        AdmissionService::admit(&ProposedPayment::new("Travel", dec!(1000)), &budgets, &log, now)
            .unwrap();
    assert!(travel.is_admitted());
}

#[test]
fn reconcile_survives_spend_far_beyond_a_tiny_limit() {
    let budget = Budget::new("Food", dec!(0.01), BudgetPeriod::Monthly);
    let log = vec![Transaction::expense(
        date(2025, 3, 2),
        "Import",
        dec!(1000000000000000000000000000),
        "Food",
    )];
    let status = BudgetService::reconcile(&budget, &log, date(2025, 3, 15));
    assert_eq!(status.percent_used, Decimal::MAX);
    assert!(status.is_over_budget);
    assert!(status.remaining < Decimal::ZERO);
}

#[test]
fn admission_survives_overflowing_history() {
    let huge = dec!(50000000000000000000000000000);
    let log = vec![
        Transaction::expense(date(2025, 3, 2), "Import", huge, "Food"),
        Transaction::expense(date(2025, 3, 3), "Import", huge, "Food"),
    ];
    let budgets = vec![Budget::new("Food", dec!(500), BudgetPeriod::Monthly)];
    let decision =
        AdmissionService::admit(&ProposedPayment::new("Food", dec!(1)), &budgets, &log, date(2025, 3, 15))
            .unwrap();
    assert!(!decision.is_admitted());
}
