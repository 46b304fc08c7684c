use napi::Result as NapiResult;
use napi_derive::napi;

use asb_dividend_core::dividend::chart;
use asb_dividend_core::dividend::simulator::{self, SimulationInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_input(input_json: &str) -> NapiResult<SimulationInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

/// Full simulation envelope (yearly results, summary, breakdown).
#[napi]
pub fn simulate_dividend(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = simulator::run_simulation(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Line series for the wealth chart. Rejected input gives empty arrays.
#[napi]
pub fn dividend_chart_series(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let series = chart::chart_series(&simulator::simulate(&input));
    serde_json::to_string(&series).map_err(to_napi_error)
}
