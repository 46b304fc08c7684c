use asb_dividend_core::dividend::chart::chart_series;
use asb_dividend_core::dividend::simulator::{
    self, SimulationInput, BONUS_ELIGIBLE_CEILING, MONTHS_PER_YEAR,
};
use asb_dividend_core::DividendSimError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn run(initial: Decimal, deposit: Decimal, years: i32, dividend: Decimal, bonus: Decimal) -> SimulationInput {
    SimulationInput {
        initial_balance: initial,
        monthly_deposit: deposit,
        investment_period_years: years,
        annual_dividend_rate_pct: dividend,
        annual_bonus_rate_pct: bonus,
    }
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_scenario_constant_balance_one_year() {
    // Dividend 50,000 * 5% = 2,500; bonus on capped 30,000 * 0.5% = 150
    let out = simulator::simulate(&run(dec!(50000), dec!(0), 1, dec!(5), dec!(0.5)));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].year, 1);
    assert_eq!(out[0].total_wealth, dec!(52650.00));
}

#[test]
fn test_scenario_monthly_deposits_two_years() {
    let input = run(dec!(30000), dec!(1000), 2, dec!(5), dec!(0.5));
    let trace = simulator::simulate_breakdown(&input).unwrap();

    // Year 2 starts from year 1's full-precision close
    assert_eq!(trace[1].opening_balance, trace[0].closing_balance);

    let out = simulator::simulate(&input);
    assert_eq!(out[0].total_wealth, dec!(43925.00));
    assert_eq!(out[1].total_wealth, dec!(58546.25));
}

#[test]
fn test_ceiling_crossed_via_deposits_over_several_years() {
    // 20,000 + 500/month crosses 30,000 during year 2
    let input = run(dec!(20000), dec!(500), 3, dec!(0), dec!(1.2));
    let trace = simulator::simulate_breakdown(&input).unwrap();

    assert!(!trace[0].bonus_capped);
    assert!(trace[1].bonus_capped);
    assert!(trace[2].bonus_capped);

    // Fully capped year: bonus is exactly 30,000 * 1.2%
    assert_eq!(trace[2].bonus, BONUS_ELIGIBLE_CEILING * dec!(0.012));
    // Year 1 stayed under the ceiling, so it earned less than a capped year
    assert!(trace[0].bonus < trace[2].bonus);
}

#[test]
fn test_each_year_reconciles() {
    let input = run(dec!(12000), dec!(350), 5, dec!(4.25), dec!(0.75));
    let trace = simulator::simulate_breakdown(&input).unwrap();
    for yr in &trace {
        let expected = yr.opening_balance + yr.deposits + yr.dividend + yr.bonus;
        assert!(
            (yr.closing_balance - expected).abs() < dec!(0.0000001),
            "year {} does not reconcile: {} vs {}",
            yr.year,
            yr.closing_balance,
            expected
        );
        assert_eq!(yr.deposits, dec!(350) * Decimal::from(MONTHS_PER_YEAR));
    }
}

#[test]
fn test_summary_reconciles_with_inputs() {
    let input = run(dec!(12000), dec!(350), 5, dec!(4.25), dec!(0.75));
    let out = simulator::run_simulation(&input).unwrap();
    let s = &out.result.summary;
    let rebuilt = input.initial_balance + s.total_deposited + s.total_dividend + s.total_bonus;
    assert!((s.final_wealth - rebuilt).abs() <= dec!(0.02));
    assert_eq!(
        s.final_wealth,
        out.result.yearly_results.last().unwrap().total_wealth
    );
}

// ===========================================================================
// Rejection
// ===========================================================================

#[test]
fn test_invalid_inputs_yield_empty_output() {
    let cases = [
        run(dec!(0), dec!(100), 5, dec!(5), dec!(0.5)),
        run(dec!(-10), dec!(100), 5, dec!(5), dec!(0.5)),
        run(dec!(1000), dec!(100), 0, dec!(5), dec!(0.5)),
        run(dec!(1000), dec!(100), 5, dec!(-1), dec!(0.5)),
        run(dec!(1000), dec!(100), 5, dec!(5), dec!(-1)),
    ];
    for case in &cases {
        assert!(simulator::simulate(case).is_empty(), "accepted {:?}", case);
        assert!(matches!(
            simulator::run_simulation(case),
            Err(DividendSimError::InvalidInput { .. })
        ));
    }
}

#[test]
fn test_envelope_serializes_wealth_as_strings() {
    let out = simulator::run_simulation(&SimulationInput::default()).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["result"]["yearly_results"][0]["year"], 1);
    assert_eq!(json["result"]["yearly_results"][0]["total_wealth"], "52650.00");
    assert_eq!(json["assumptions"]["bonus_eligible_ceiling"], "30000");
}

#[test]
fn test_chart_series_from_simulation() {
    let out = simulator::simulate(&run(dec!(1000), dec!(100), 4, dec!(5), dec!(0)));
    let series = chart_series(&out);
    assert_eq!(series.labels, vec!["1", "2", "3", "4"]);
    assert_eq!(
        series.data,
        out.iter().map(|r| r.total_wealth).collect::<Vec<_>>()
    );
}

// ===========================================================================
// Properties
// ===========================================================================

fn cents(max: i64) -> impl Strategy<Value = Decimal> {
    (0..=max).prop_map(|c| Decimal::new(c, 2))
}

prop_compose! {
    fn valid_input()(
        initial in (1i64..=50_000_000).prop_map(|c| Decimal::new(c, 2)),
        deposit in cents(500_000),
        years in 1i32..=40,
        dividend in cents(1_500),
        bonus in cents(300),
    ) -> SimulationInput {
        run(initial, deposit, years, dividend, bonus)
    }
}

proptest! {
    #[test]
    fn prop_one_row_per_year_in_order(input in valid_input()) {
        let out = simulator::simulate(&input);
        prop_assert_eq!(out.len(), input.investment_period_years as usize);
        for (i, row) in out.iter().enumerate() {
            prop_assert_eq!(row.year as usize, i + 1);
        }
    }

    #[test]
    fn prop_wealth_never_decreases(input in valid_input()) {
        let out = simulator::simulate(&input);
        for pair in out.windows(2) {
            prop_assert!(pair[1].total_wealth >= pair[0].total_wealth);
        }
    }

    #[test]
    fn prop_repeat_runs_identical(input in valid_input()) {
        let first = simulator::simulate(&input);
        let second = simulator::simulate(&input);
        prop_assert_eq!(first, second);
    }
}
