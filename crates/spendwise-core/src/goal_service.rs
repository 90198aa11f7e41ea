//! Goal progress evaluation and goal bookkeeping.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise_domain::{FinancialGoal, GoalStatus};
use tracing::debug;
use uuid::Uuid;

use crate::{
    amount::{checked_percent, ensure_positive, saturating_add},
    CoreError,
};

pub struct GoalService;

impl GoalService {
    /// Classifies a goal's progress as of `now`. Never mutates the goal.
    pub fn evaluate(goal: &FinancialGoal, now: NaiveDate) -> GoalStatus {
        let percent_complete = if goal.target_amount > Decimal::ZERO {
            checked_percent(goal.current_amount, goal.target_amount)
                .map_or(Decimal::ONE_HUNDRED, |percent| percent.min(Decimal::ONE_HUNDRED))
        } else {
            Decimal::ZERO
        };
        let is_complete = goal.current_amount >= goal.target_amount;
        let is_overdue = !is_complete && goal.deadline.is_some_and(|deadline| now > deadline);
        GoalStatus {
            goal: goal.clone(),
            percent_complete,
            is_complete,
            is_overdue,
        }
    }

    pub fn evaluate_all(goals: &[FinancialGoal], now: NaiveDate) -> Vec<GoalStatus> {
        goals.iter().map(|goal| Self::evaluate(goal, now)).collect()
    }

    pub fn add_goal(goals: &mut Vec<FinancialGoal>, goal: FinancialGoal) -> Result<Uuid, CoreError> {
        validate_goal(&goal)?;
        let id = goal.id;
        debug!(%id, description = %goal.description, "goal added");
        goals.push(goal);
        Ok(id)
    }

    /// Replaces an existing goal, keeping its id.
    pub fn update_goal(goals: &mut [FinancialGoal], goal: FinancialGoal) -> Result<(), CoreError> {
        validate_goal(&goal)?;
        let slot = goals
            .iter_mut()
            .find(|existing| existing.id == goal.id)
            .ok_or(CoreError::GoalNotFound(goal.id))?;
        *slot = goal;
        Ok(())
    }

    /// Adds savings to a goal. The write is refused if it would overshoot the target.
    pub fn contribute(
        goals: &mut [FinancialGoal],
        id: Uuid,
        amount: Decimal,
    ) -> Result<Decimal, CoreError> {
        ensure_positive(amount)?;
        let goal = goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(CoreError::GoalNotFound(id))?;
        let updated = saturating_add(goal.current_amount, amount);
        if updated > goal.target_amount {
            return Err(CoreError::Validation(format!(
                "contribution of {} would exceed the target of {} (only {} left)",
                amount,
                goal.target_amount,
                goal.shortfall()
            )));
        }
        goal.current_amount = updated;
        Ok(updated)
    }

    pub fn remove_goal(goals: &mut Vec<FinancialGoal>, id: Uuid) -> Result<FinancialGoal, CoreError> {
        let index = goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(CoreError::GoalNotFound(id))?;
        Ok(goals.remove(index))
    }
}

pub(crate) fn validate_goal(goal: &FinancialGoal) -> Result<(), CoreError> {
    if goal.description.trim().is_empty() {
        return Err(CoreError::Validation("goal description is required".into()));
    }
    ensure_positive(goal.target_amount)?;
    if goal.current_amount < Decimal::ZERO {
        return Err(CoreError::InvalidAmount(goal.current_amount));
    }
    if goal.current_amount > goal.target_amount {
        return Err(CoreError::Validation(
            "current amount cannot exceed target amount".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn partial_progress_is_a_percentage() {
        let goal = FinancialGoal::new("Laptop", dec!(1200)).with_current(dec!(300));
        let status = GoalService::evaluate(&goal, date(2025, 1, 1));
        assert_eq!(status.percent_complete, dec!(25));
        assert!(!status.is_complete);
        assert!(!status.is_overdue);
    }

    #[test]
    fn reaching_target_completes_goal() {
        let goal = FinancialGoal::new("Vacation", dec!(2000)).with_current(dec!(2000));
        let status = GoalService::evaluate(&goal, date(2025, 1, 1));
        assert!(status.is_complete);
        assert_eq!(status.percent_complete, dec!(100));
    }

    #[test]
    fn percent_is_capped_at_one_hundred() {
        let mut goal = FinancialGoal::new("Bike", dec!(400));
        goal.current_amount = dec!(500);
        let status = GoalService::evaluate(&goal, date(2025, 1, 1));
        assert_eq!(status.percent_complete, dec!(100));
        assert!(status.is_complete);
    }

    #[test]
    fn zero_target_reports_zero_percent() {
        let mut goal = FinancialGoal::new("Placeholder", Decimal::ZERO);
        goal.current_amount = Decimal::ZERO;
        let status = GoalService::evaluate(&goal, date(2025, 1, 1));
        assert_eq!(status.percent_complete, Decimal::ZERO);
        assert!(status.is_complete);
    }

    #[test]
    fn overdue_requires_past_deadline_and_incomplete() {
        let deadline = date(2025, 6, 30);
        let goal = FinancialGoal::new("Car", dec!(5000))
            .with_current(dec!(1000))
            .with_deadline(deadline);

        assert!(!GoalService::evaluate(&goal, deadline).is_overdue);
        assert!(GoalService::evaluate(&goal, date(2025, 7, 1)).is_overdue);

        let done = goal.clone().with_current(dec!(5000));
        assert!(!GoalService::evaluate(&done, date(2026, 1, 1)).is_overdue);

        let open_ended = FinancialGoal::new("Rainy day", dec!(300));
        assert!(!GoalService::evaluate(&open_ended, date(2030, 1, 1)).is_overdue);
    }

    #[test]
    fn add_goal_validates_amounts() {
        let mut goals = Vec::new();
        let too_much = FinancialGoal::new("Phone", dec!(800)).with_current(dec!(900));
        assert!(matches!(
            GoalService::add_goal(&mut goals, too_much),
            Err(CoreError::Validation(_))
        ));
        let negative = FinancialGoal::new("Phone", dec!(800)).with_current(dec!(-1));
        assert_eq!(
            GoalService::add_goal(&mut goals, negative),
            Err(CoreError::InvalidAmount(dec!(-1)))
        );
        let unnamed = FinancialGoal::new("  ", dec!(800));
        assert!(GoalService::add_goal(&mut goals, unnamed).is_err());
        assert!(goals.is_empty());

        GoalService::add_goal(&mut goals, FinancialGoal::new("Phone", dec!(800))).unwrap();
        assert_eq!(goals.len(), 1);
    }

    #[test]
    fn contribute_refuses_to_overshoot() {
        let mut goals = vec![FinancialGoal::new("Laptop", dec!(1200)).with_current(dec!(1100))];
        let id = goals[0].id;
        assert_eq!(GoalService::contribute(&mut goals, id, dec!(50)), Ok(dec!(1150)));
        assert!(GoalService::contribute(&mut goals, id, dec!(60)).is_err());
        assert_eq!(goals[0].current_amount, dec!(1150));
        assert_eq!(GoalService::contribute(&mut goals, id, dec!(50)), Ok(dec!(1200)));
        assert_eq!(
            GoalService::contribute(&mut goals, id, dec!(-5)),
            Err(CoreError::InvalidAmount(dec!(-5)))
        );
    }

    #[test]
    fn update_and_remove_goal() {
        let mut goals = vec![FinancialGoal::new("Laptop", dec!(1200))];
        let mut edited = goals[0].clone();
        edited.target_amount = dec!(1500);
        GoalService::update_goal(&mut goals, edited).unwrap();
        assert_eq!(goals[0].target_amount, dec!(1500));

        let id = goals[0].id;
        GoalService::remove_goal(&mut goals, id).unwrap();
        assert_eq!(GoalService::remove_goal(&mut goals, id), Err(CoreError::GoalNotFound(id)));
    }
}
