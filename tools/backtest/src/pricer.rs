//! Black-Scholes option valuation
//!
//! Pure closed-form pricing over `f64`. The standard library has no `erf`,
//! so the normal CDF uses the Abramowitz-Stegun 7.1.26 approximation
//! (maximum error 1.5e-7), which is accurate well below quote granularity.

use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

/// Which payoff the option carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

/// Abramowitz-Stegun approximation of the error function.
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// Standard normal cumulative distribution function.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Payoff if exercised immediately at the given spot.
fn intrinsic(kind: OptionKind, spot: f64, strike: f64) -> f64 {
    match kind {
        OptionKind::Call => (spot - strike).max(0.0),
        OptionKind::Put => (strike - spot).max(0.0),
    }
}

/// Theoretical Black-Scholes value of a European option.
///
/// - `spot`: current underlying price (S)
/// - `strike`: exercise price (K)
/// - `maturity`: time to expiration in years (T)
/// - `rate`: continuously compounded risk-free rate (r)
/// - `vol`: annualized volatility (σ)
///
/// Edge cases: at or past expiry the option is worth its intrinsic value;
/// with no volatility it is worth its discounted intrinsic value.
pub fn price(kind: OptionKind, spot: f64, strike: f64, maturity: f64, rate: f64, vol: f64) -> f64 {
    if maturity <= 0.0 {
        return intrinsic(kind, spot, strike);
    }

    let discount = (-rate * maturity).exp();
    if vol <= 0.0 {
        return match kind {
            OptionKind::Call => (spot - strike * discount).max(0.0),
            OptionKind::Put => (strike * discount - spot).max(0.0),
        };
    }

    let sqrt_t = maturity.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * maturity) / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;

    match kind {
        OptionKind::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        OptionKind::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Black-Scholes value of a European call.
pub fn call_price(spot: f64, strike: f64, maturity: f64, rate: f64, vol: f64) -> f64 {
    price(OptionKind::Call, spot, strike, maturity, rate, vol)
}

/// Black-Scholes value of a European put.
pub fn put_price(spot: f64, strike: f64, maturity: f64, rate: f64, vol: f64) -> f64 {
    price(OptionKind::Put, spot, strike, maturity, rate, vol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_erf_reference_values() {
        assert!((erf(0.0)).abs() < TOLERANCE);
        assert!((erf(1.0) - 0.8427007929).abs() < 1e-5);
        assert!((erf(-1.0) + 0.8427007929).abs() < 1e-5);
    }

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < TOLERANCE);
        assert!(norm_cdf(-10.0) < 1e-10);
        assert!(norm_cdf(10.0) > 1.0 - 1e-10);
    }

    #[test]
    fn test_atm_call_sanity() {
        // S=K=100, T=1, r=5%, σ=20%: the classic textbook inputs price
        // a shade above 10.45.
        let value = call_price(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!((value - 10.4506).abs() < 1e-3);
    }

    #[test]
    fn test_atm_put_sanity() {
        let value = put_price(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!((value - 5.5735).abs() < 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K·e^(-rT)
        let (spot, strike, maturity, rate, vol) = (100.0, 105.0, 0.5, 0.05, 0.3);
        let call = call_price(spot, strike, maturity, rate, vol);
        let put = put_price(spot, strike, maturity, rate, vol);
        let expected = spot - strike * (-rate * maturity).exp();
        assert!((call - put - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_value_at_expiry_is_intrinsic() {
        assert!((call_price(110.0, 100.0, 0.0, 0.05, 0.25) - 10.0).abs() < TOLERANCE);
        assert!(call_price(90.0, 100.0, 0.0, 0.05, 0.25).abs() < TOLERANCE);
        assert!((put_price(90.0, 100.0, 0.0, 0.05, 0.25) - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_vol_is_discounted_intrinsic() {
        let value = call_price(110.0, 100.0, 1.0, 0.05, 0.0);
        let expected = 110.0 - 100.0 * (-0.05f64).exp();
        assert!((value - expected).abs() < TOLERANCE);

        assert!(put_price(110.0, 100.0, 1.0, 0.05, 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_deep_moneyness_limits() {
        assert!(call_price(150.0, 100.0, 0.25, 0.0, 0.25) > 50.0 - 1e-3);
        assert!(call_price(50.0, 100.0, 0.25, 0.0, 0.25) < 0.01);
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 10.0f64..500.0,
            strike in 10.0f64..500.0,
            maturity in 0.01f64..3.0,
            rate in 0.0f64..0.10,
            vol in 0.05f64..0.80,
        ) {
            let call = call_price(spot, strike, maturity, rate, vol);
            let put = put_price(spot, strike, maturity, rate, vol);
            let expected = spot - strike * (-rate * maturity).exp();
            prop_assert!((call - put - expected).abs() < 1e-4);
        }

        #[test]
        fn prop_value_at_least_intrinsic_for_calls(
            spot in 10.0f64..500.0,
            strike in 10.0f64..500.0,
            maturity in 0.01f64..3.0,
            rate in 0.0f64..0.10,
            vol in 0.05f64..0.80,
        ) {
            let value = call_price(spot, strike, maturity, rate, vol);
            let floor = (spot - strike * (-rate * maturity).exp()).max(0.0);
            // slack covers the CDF approximation error scaled by spot/strike
            prop_assert!(value >= floor - 1e-4);
        }
    }
}
