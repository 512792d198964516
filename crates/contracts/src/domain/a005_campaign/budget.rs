//! Budget check of a single campaign
//!
//! `variance = estimated_cost - actual_cost`. A positive variance means the
//! campaign is under its estimate, a negative one over it. Exactly on the
//! estimate gives neither a headline nor a banner.

use super::aggregate::Campaign;
use crate::shared::number_format::format_currency;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// Amount left under the estimate
    UnderBudget(f64),
    /// Amount spent over the estimate, always positive
    OverBudget(f64),
    OnBudget,
}

/// Result of the "Check Budget" action
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    pub title: String,
    pub status: BudgetStatus,
    pub budget: String,
    pub estimated_cost: String,
    pub actual_cost: String,
}

impl BudgetReport {
    pub fn evaluate(campaign: &Campaign) -> Self {
        let variance = campaign.estimated_cost - campaign.actual_cost;
        let status = if variance > 0.0 {
            BudgetStatus::UnderBudget(variance)
        } else if variance < 0.0 {
            BudgetStatus::OverBudget(variance.abs())
        } else {
            BudgetStatus::OnBudget
        };

        Self {
            title: campaign.title.clone(),
            status,
            budget: format_currency(campaign.budget),
            estimated_cost: format_currency(campaign.estimated_cost),
            actual_cost: format_currency(campaign.actual_cost),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        matches!(self.status, BudgetStatus::OverBudget(_))
    }

    /// "$500.00 over budget"
    pub fn headline(&self) -> Option<String> {
        match self.status {
            BudgetStatus::UnderBudget(amount) => {
                Some(format!("{} under budget", format_currency(amount)))
            }
            BudgetStatus::OverBudget(amount) => {
                Some(format!("{} over budget", format_currency(amount)))
            }
            BudgetStatus::OnBudget => None,
        }
    }

    /// Explanatory banner under the amounts
    pub fn banner(&self) -> Option<String> {
        match self.status {
            BudgetStatus::UnderBudget(amount) => Some(format!(
                "Project is under the estimated cost by {}",
                format_currency(amount)
            )),
            BudgetStatus::OverBudget(amount) => Some(format!(
                "Project is exceeding the estimated cost by {}",
                format_currency(amount)
            )),
            BudgetStatus::OnBudget => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_campaign::aggregate::CampaignState;

    fn campaign(budget: f64, estimated_cost: f64, actual_cost: f64) -> Campaign {
        Campaign {
            campaign_id: 1,
            client_id: Some(1),
            title: "Summer Sale".into(),
            start_date: "2024-06-01".into(),
            end_date: "2024-08-31".into(),
            estimated_cost,
            actual_cost,
            budget,
            completion_status: false,
            current_state: CampaignState::InProgress,
            manager_id: None,
        }
    }

    #[test]
    fn test_over_budget() {
        let report = BudgetReport::evaluate(&campaign(10000.0, 8000.0, 8500.0));
        assert_eq!(report.status, BudgetStatus::OverBudget(500.0));
        assert!(report.is_over_budget());
        assert_eq!(report.headline().as_deref(), Some("$500.00 over budget"));
        assert_eq!(
            report.banner().as_deref(),
            Some("Project is exceeding the estimated cost by $500.00")
        );
        assert_eq!(report.budget, "$10,000.00");
        assert_eq!(report.estimated_cost, "$8,000.00");
        assert_eq!(report.actual_cost, "$8,500.00");
    }

    #[test]
    fn test_under_budget() {
        let report = BudgetReport::evaluate(&campaign(5000.0, 4000.0, 2750.5));
        assert_eq!(report.status, BudgetStatus::UnderBudget(1249.5));
        assert_eq!(report.headline().as_deref(), Some("$1,249.50 under budget"));
        assert_eq!(
            report.banner().as_deref(),
            Some("Project is under the estimated cost by $1,249.50")
        );
    }

    #[test]
    fn test_on_budget_shows_no_message() {
        let report = BudgetReport::evaluate(&campaign(1000.0, 750.0, 750.0));
        assert_eq!(report.status, BudgetStatus::OnBudget);
        assert_eq!(report.headline(), None);
        assert_eq!(report.banner(), None);
        assert!(!report.is_over_budget());
    }

    #[test]
    fn test_budget_does_not_affect_classification() {
        let low = BudgetReport::evaluate(&campaign(1.0, 200.0, 100.0));
        let high = BudgetReport::evaluate(&campaign(1_000_000.0, 200.0, 100.0));
        assert_eq!(low.status, high.status);
    }
}
