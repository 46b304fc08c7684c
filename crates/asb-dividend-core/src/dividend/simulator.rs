use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use crate::error::DividendSimError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::DividendSimResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Dividend and bonus accrue monthly and are credited once per year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Balance above this amount earns no bonus.
pub const BONUS_ELIGIBLE_CEILING: Money = dec!(30000);

/// Reported wealth is rounded to this many decimal places.
pub const REPORTING_DP: u32 = 2;

const PERCENT: Decimal = dec!(100);

const MAX_RESERVED_YEARS: u32 = 1024;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for one simulation run.
///
/// Missing fields deserialize to the calculator's stock values
/// (RM 50,000 initial, no deposit, 1 year, 5% dividend, 0.5% bonus).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInput {
    pub initial_balance: Money,
    pub monthly_deposit: Money,
    pub investment_period_years: i32,
    /// Annual dividend rate in percent (5 = 5%).
    pub annual_dividend_rate_pct: Rate,
    /// Annual bonus rate in percent, paid on the balance up to the ceiling.
    pub annual_bonus_rate_pct: Rate,
}

impl Default for SimulationInput {
    fn default() -> Self {
        SimulationInput {
            initial_balance: dec!(50000),
            monthly_deposit: Decimal::ZERO,
            investment_period_years: 1,
            annual_dividend_rate_pct: dec!(5),
            annual_bonus_rate_pct: dec!(0.5),
        }
    }
}

/// Reported wealth at the end of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyResult {
    pub year: u32,
    pub total_wealth: Money,
}

/// One row per year, ordered by year. Empty when the input was rejected.
pub type SimulationOutput = Vec<YearlyResult>;

/// Full-precision trace of a single simulated year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBreakdown {
    pub year: u32,
    pub opening_balance: Money,
    pub deposits: Money,
    pub dividend: Money,
    pub bonus: Money,
    pub closing_balance: Money,
    /// True when the balance exceeded the bonus ceiling in any month.
    pub bonus_capped: bool,
}

/// Totals across the whole horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub years: u32,
    pub final_wealth: Money,
    pub total_deposited: Money,
    pub total_dividend: Money,
    pub total_bonus: Money,
    pub total_earnings: Money,
}

/// Result payload of `run_simulation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub yearly_results: SimulationOutput,
    pub summary: SimulationSummary,
    pub breakdown: Vec<YearBreakdown>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the four preconditions of a run. The monthly deposit is not gated.
pub fn validate(input: &SimulationInput) -> DividendSimResult<()> {
    if input.initial_balance <= Decimal::ZERO {
        return Err(DividendSimError::InvalidInput {
            field: "initial_balance".into(),
            reason: "initial_balance must be > 0".into(),
        });
    }
    if input.annual_dividend_rate_pct < Decimal::ZERO {
        return Err(DividendSimError::InvalidInput {
            field: "annual_dividend_rate_pct".into(),
            reason: "annual_dividend_rate_pct must be >= 0".into(),
        });
    }
    if input.annual_bonus_rate_pct < Decimal::ZERO {
        return Err(DividendSimError::InvalidInput {
            field: "annual_bonus_rate_pct".into(),
            reason: "annual_bonus_rate_pct must be >= 0".into(),
        });
    }
    if input.investment_period_years <= 0 {
        return Err(DividendSimError::InvalidInput {
            field: "investment_period_years".into(),
            reason: "investment_period_years must be > 0".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Simulate the balance year by year and return the rounded wealth per year.
///
/// Rejected or unrepresentable input yields an empty sequence; nothing is
/// thrown across this boundary.
pub fn simulate(input: &SimulationInput) -> SimulationOutput {
    match simulate_breakdown(input) {
        Ok(breakdown) => breakdown.iter().map(YearBreakdown::reported).collect(),
        Err(e) => {
            warn!(error = %e, "simulation rejected");
            Vec::new()
        }
    }
}

/// Run the monthly accrual and return the unrounded per-year trace.
///
/// Dividend and bonus accrue on the balance at the start of each month and
/// are credited together after the twelfth month. The month's deposit lands
/// after its accrual, so it first earns in the following month.
pub fn simulate_breakdown(input: &SimulationInput) -> DividendSimResult<Vec<YearBreakdown>> {
    validate(input)?;

    debug!(
        initial_balance = %input.initial_balance,
        monthly_deposit = %input.monthly_deposit,
        years = input.investment_period_years,
        dividend_pct = %input.annual_dividend_rate_pct,
        bonus_pct = %input.annual_bonus_rate_pct,
        "running dividend simulation"
    );

    let years = input.investment_period_years.unsigned_abs();
    let months = Decimal::from(MONTHS_PER_YEAR);
    let dividend_fraction = input.annual_dividend_rate_pct / PERCENT;
    let bonus_fraction = input.annual_bonus_rate_pct / PERCENT;

    // Long horizons usually overflow early; grow past this on demand.
    let mut breakdown: Vec<YearBreakdown> =
        Vec::with_capacity(years.min(MAX_RESERVED_YEARS) as usize);
    let mut current_balance = input.initial_balance;

    for year in 1..=years {
        let opening_balance = current_balance;
        let mut total_dividend = Decimal::ZERO;
        let mut total_bonus = Decimal::ZERO;
        let mut deposits = Decimal::ZERO;
        let mut bonus_capped = false;

        for _ in 0..MONTHS_PER_YEAR {
            let monthly_dividend = checked(current_balance.checked_mul(dividend_fraction), year)?
                / months;

            if current_balance > BONUS_ELIGIBLE_CEILING {
                bonus_capped = true;
            }
            let bonus_eligible = current_balance.min(BONUS_ELIGIBLE_CEILING);
            let monthly_bonus = checked(bonus_eligible.checked_mul(bonus_fraction), year)? / months;

            total_dividend = checked(total_dividend.checked_add(monthly_dividend), year)?;
            total_bonus = checked(total_bonus.checked_add(monthly_bonus), year)?;

            current_balance = checked(current_balance.checked_add(input.monthly_deposit), year)?;
            deposits = checked(deposits.checked_add(input.monthly_deposit), year)?;
        }

        let earnings = checked(total_dividend.checked_add(total_bonus), year)?;
        current_balance = checked(current_balance.checked_add(earnings), year)?;

        breakdown.push(YearBreakdown {
            year,
            opening_balance,
            deposits,
            dividend: total_dividend,
            bonus: total_bonus,
            closing_balance: current_balance,
            bonus_capped,
        });
    }

    Ok(breakdown)
}

/// Checked entry point: yearly results, trace and totals in the standard
/// computation envelope.
pub fn run_simulation(
    input: &SimulationInput,
) -> DividendSimResult<ComputationOutput<SimulationReport>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let breakdown = simulate_breakdown(input)?;
    let yearly_results: SimulationOutput =
        breakdown.iter().map(YearBreakdown::reported).collect();

    let mut total_deposited = Decimal::ZERO;
    let mut total_dividend = Decimal::ZERO;
    let mut total_bonus = Decimal::ZERO;
    for yr in &breakdown {
        total_deposited += yr.deposits;
        total_dividend += yr.dividend;
        total_bonus += yr.bonus;
    }

    let final_balance = breakdown
        .last()
        .map(|yr| yr.closing_balance)
        .unwrap_or(input.initial_balance);

    let summary = SimulationSummary {
        years: breakdown.len() as u32,
        final_wealth: round_reported(final_balance),
        total_deposited: round_reported(total_deposited),
        total_dividend: round_reported(total_dividend),
        total_bonus: round_reported(total_bonus),
        total_earnings: round_reported(total_dividend + total_bonus),
    };

    if input.annual_bonus_rate_pct > Decimal::ZERO && breakdown.iter().any(|yr| yr.bonus_capped)
    {
        warnings.push(format!(
            "Balance exceeds bonus-eligible ceiling of {}; bonus accrues on the capped amount only",
            BONUS_ELIGIBLE_CEILING
        ));
    }
    if input.annual_dividend_rate_pct.is_zero() && input.annual_bonus_rate_pct.is_zero() {
        warnings.push("Dividend and bonus rates are both zero; growth comes from deposits only".into());
    }

    let output = SimulationReport {
        yearly_results,
        summary,
        breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "ASB dividend simulation (monthly accrual on opening balance, annual credit, bonus capped at eligible ceiling)",
        &serde_json::json!({
            "initial_balance": input.initial_balance.to_string(),
            "monthly_deposit": input.monthly_deposit.to_string(),
            "investment_period_years": input.investment_period_years,
            "annual_dividend_rate_pct": input.annual_dividend_rate_pct.to_string(),
            "annual_bonus_rate_pct": input.annual_bonus_rate_pct.to_string(),
            "bonus_eligible_ceiling": BONUS_ELIGIBLE_CEILING.to_string(),
            "months_per_year": MONTHS_PER_YEAR,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

impl YearBreakdown {
    /// The rounded row reported for this year.
    pub fn reported(&self) -> YearlyResult {
        YearlyResult {
            year: self.year,
            total_wealth: round_reported(self.closing_balance),
        }
    }
}

/// Display rounding only; never fed back into the running balance.
fn round_reported(value: Money) -> Money {
    let mut rounded =
        value.round_dp_with_strategy(REPORTING_DP, RoundingStrategy::MidpointAwayFromZero);
    // Fixed two places so "52650" prints as "52650.00".
    rounded.rescale(REPORTING_DP);
    rounded
}

fn checked(value: Option<Decimal>, year: u32) -> DividendSimResult<Decimal> {
    value.ok_or(DividendSimError::Overflow { year })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
