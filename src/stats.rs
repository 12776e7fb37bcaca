//! Planning run statistics
//!
//! Tracks how many bookings were read, accepted, and rejected in one run,
//! together with aggregate financials over the accepted flights.

use crate::models::Financials;
use serde::Serialize;

/// Statistics for one planning run
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanningStats {
    /// Number of booking rows read from the input file
    pub bookings_read: usize,
    /// Number of bookings accepted as flyable
    pub accepted: usize,
    /// Number of bookings rejected
    pub rejected: usize,
    /// Total income across accepted flights
    pub total_income: f64,
    /// Total operating cost across accepted flights
    pub total_cost: f64,
    /// Total profit across accepted flights
    pub total_profit: f64,
    /// Total processing time
    #[serde(skip)]
    pub processing_time: std::time::Duration,
}

impl PlanningStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted booking and fold in its financials
    pub fn record_accepted(&mut self, financials: &Financials) {
        self.accepted += 1;
        self.total_income += financials.income;
        self.total_cost += financials.cost;
        self.total_profit += financials.profit;
    }

    /// Record a rejected booking
    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    /// Acceptance rate as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.bookings_read == 0 {
            100.0
        } else {
            (self.accepted as f64 / self.bookings_read as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Planning summary: {} bookings -> {} accepted, {} rejected ({:.1}% accepted) | \
             Income: £{:.2}, Cost: £{:.2}, Profit: £{:.2}",
            self.bookings_read,
            self.accepted,
            self.rejected,
            self.acceptance_rate(),
            self.total_income,
            self.total_cost,
            self.total_profit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_accumulation() {
        let mut stats = PlanningStats::new();
        stats.bookings_read = 3;
        stats.record_accepted(&Financials {
            income: 100.0,
            cost: 40.0,
            profit: 60.0,
        });
        stats.record_accepted(&Financials {
            income: 50.0,
            cost: 70.0,
            profit: -20.0,
        });
        stats.record_rejected();

        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.total_income, 150.0);
        assert_eq!(stats.total_cost, 110.0);
        assert_eq!(stats.total_profit, 40.0);
    }

    #[test]
    fn test_acceptance_rate() {
        let mut stats = PlanningStats::new();
        assert_eq!(stats.acceptance_rate(), 100.0);

        stats.bookings_read = 4;
        stats.accepted = 3;
        assert_eq!(stats.acceptance_rate(), 75.0);
    }

    #[test]
    fn test_summary_mentions_counts() {
        let mut stats = PlanningStats::new();
        stats.bookings_read = 2;
        stats.accepted = 1;
        stats.rejected = 1;

        let summary = stats.summary();
        assert!(summary.contains("2 bookings"));
        assert!(summary.contains("1 accepted"));
        assert!(summary.contains("1 rejected"));
    }
}
