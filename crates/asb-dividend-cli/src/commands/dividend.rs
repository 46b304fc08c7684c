use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

use asb_dividend_core::dividend::chart;
use asb_dividend_core::dividend::simulator::{self, SimulationInput};

use crate::input;
use crate::input::coerce::{number_or, years_or};

/// Simulation parameters, shared by `simulate` and `chart`
#[derive(Args, Debug, Default)]
#[command(allow_hyphen_values = true)]
pub struct SimulationArgs {
    /// Initial investment amount (RM), default 50000
    #[arg(long)]
    pub initial_balance: Option<String>,

    /// Amount deposited at the end of every month (RM), default 0
    #[arg(long)]
    pub monthly_deposit: Option<String>,

    /// Investment period in whole years, default 1
    #[arg(long, alias = "period")]
    pub years: Option<String>,

    /// Annual dividend rate in percent (5 = 5%), default 5
    #[arg(long)]
    pub dividend_rate: Option<String>,

    /// Annual bonus rate in percent on the bonus-eligible balance, default 0.5
    #[arg(long)]
    pub bonus_rate: Option<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the year-by-year simulation
#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub params: SimulationArgs,

    /// Include the full-precision per-year breakdown
    #[arg(long)]
    pub breakdown: bool,
}

/// Arguments for the chart series export
#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub params: SimulationArgs,
}

impl SimulationArgs {
    fn has_value_flags(&self) -> bool {
        self.initial_balance.is_some()
            || self.monthly_deposit.is_some()
            || self.years.is_some()
            || self.dividend_rate.is_some()
            || self.bonus_rate.is_some()
    }

    /// Build the input from flags; absent flags keep the calculator defaults,
    /// malformed ones degrade to 0 (amounts, rates) or 1 (years).
    fn to_input(&self) -> SimulationInput {
        let defaults = SimulationInput::default();
        SimulationInput {
            initial_balance: self
                .initial_balance
                .as_deref()
                .map_or(defaults.initial_balance, |t| number_or(t, Decimal::ZERO)),
            monthly_deposit: self
                .monthly_deposit
                .as_deref()
                .map_or(defaults.monthly_deposit, |t| number_or(t, Decimal::ZERO)),
            investment_period_years: self
                .years
                .as_deref()
                .map_or(defaults.investment_period_years, |t| years_or(t, 1)),
            annual_dividend_rate_pct: self
                .dividend_rate
                .as_deref()
                .map_or(defaults.annual_dividend_rate_pct, |t| number_or(t, Decimal::ZERO)),
            annual_bonus_rate_pct: self
                .bonus_rate
                .as_deref()
                .map_or(defaults.annual_bonus_rate_pct, |t| number_or(t, Decimal::ZERO)),
        }
    }
}

/// Resolve inputs: `--input` file, then piped stdin when no value flags are
/// given, then flags over the calculator defaults.
fn resolve_input(args: &SimulationArgs) -> Result<SimulationInput, Box<dyn std::error::Error>> {
    let resolved = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if args.has_value_flags() {
        args.to_input()
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SimulationInput::default()
    };
    debug!(?resolved, "resolved simulation input");
    Ok(resolved)
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input = resolve_input(&args.params)?;
    let result = simulator::run_simulation(&sim_input)
        .map_err(|e| format!("No results yet: {}", e))?;

    let mut value = serde_json::to_value(result)?;
    if !args.breakdown {
        if let Some(res) = value.get_mut("result").and_then(Value::as_object_mut) {
            res.remove("breakdown");
        }
    }
    Ok(value)
}

pub fn run_chart(args: ChartArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input = resolve_input(&args.params)?;
    let results = simulator::simulate(&sim_input);
    if results.is_empty() {
        let reason = simulator::validate(&sim_input)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "balance exceeded the representable range".to_string());
        return Err(format!("No results yet: {}", reason).into());
    }
    let series = chart::chart_series(&results);
    Ok(serde_json::json!({ "result": series }))
}
