//! Expected-move estimator.
//!
//! Estimates the market-implied price move of an underlying around a binary
//! event from listed option premiums:
//!
//! **Straddle**: C(K_atm) + P(K_atm)
//! **Strangle**: C(K_otm_call) + P(K_otm_put)
//! **Expected move**: (straddle + strangle) / 2, rounded to cents
//!
//! Where K_atm is the listed strike nearest the spot, K_otm_call is the
//! first listed call strike strictly above K_atm, and K_otm_put is the
//! first listed put strike strictly below K_atm.

use serde::{Deserialize, Serialize};

use crate::chain::{OptionChain, Quote};
use crate::types::error::{ExpectedMoveError, OptionSide};

/// Expected-move estimate with its intermediate values.
///
/// Derived and immutable; recomputed fresh from a `(spot, chain)` snapshot
/// on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedMove {
    /// Spot price the estimate was taken against
    pub spot: f64,
    /// Listed call strike nearest the spot
    pub atm_strike: f64,
    /// Last price of the call at the ATM strike
    pub atm_call_price: f64,
    /// Last price of the put at the ATM strike
    pub atm_put_price: f64,
    /// ATM straddle premium
    pub straddle: f64,
    /// First call strike strictly above the ATM strike
    pub otm_call_strike: f64,
    /// Last price of the call at the OTM call strike
    pub otm_call_price: f64,
    /// First put strike strictly below the ATM strike
    pub otm_put_strike: f64,
    /// Last price of the put at the OTM put strike
    pub otm_put_price: f64,
    /// First-OTM strangle premium
    pub strangle: f64,
    /// Average of straddle and strangle, rounded half-up to cents
    pub expected_move: f64,
    /// `spot + expected_move`
    pub upper_bound: f64,
    /// `spot - expected_move`
    pub lower_bound: f64,
}

/// Returns the strike minimising absolute distance to the spot.
///
/// Ties are broken by whichever strike is encountered first in iteration
/// order, so the result is stable for a given listing order.
///
/// # Errors
/// `ExpectedMoveError::EmptyChain` if `strikes` yields no elements.
///
/// # Examples
///
/// ```
/// use emove_core::calc::nearest_strike;
///
/// let strikes = [90.0, 95.0, 100.0, 105.0];
/// assert_eq!(nearest_strike(strikes, 101.2).unwrap(), 100.0);
///
/// // Exact tie keeps the first strike encountered
/// assert_eq!(nearest_strike([95.0, 105.0], 100.0).unwrap(), 95.0);
///
/// assert!(nearest_strike([], 100.0).is_err());
/// ```
pub fn nearest_strike(
    strikes: impl IntoIterator<Item = f64>,
    spot: f64,
) -> Result<f64, ExpectedMoveError> {
    let mut best: Option<f64> = None;
    for strike in strikes {
        let closer = match best {
            None => true,
            Some(current) => (strike - spot).abs() < (current - spot).abs(),
        };
        if closer {
            best = Some(strike);
        }
    }
    best.ok_or(ExpectedMoveError::EmptyChain)
}

/// Rounds half-up to two decimal places.
///
/// Ties (exact half-cents) round toward positive infinity, so 4.055 → 4.06.
/// Only used for the final straddle/strangle average, which is a sum of
/// non-negative premiums.
fn round_half_up_2dp(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Computes the expected move of an underlying from an option chain snapshot.
///
/// The ATM strike is selected from the call side (matching the quote source,
/// where the call listing drives strike selection); the put side is then an
/// exact-match lookup that fails with `MissingQuote` when puts list strikes
/// differently. When a strike appears more than once on a side, the first
/// quote in listing order wins.
///
/// Deterministic for identical `(spot, chain)` inputs; no hidden state.
///
/// # Arguments
/// * `spot` - Current underlying price (must be positive and finite)
/// * `chain` - Option chain snapshot for one symbol and one expiry
///
/// # Errors
/// - `InvalidSpot` if spot is non-positive or non-finite
/// - `EmptyChain` if the chain lists no call strikes
/// - `MissingQuote` if the ATM strike has no quote on either side
/// - `InsufficientOtmStrikes` if no call strike lies strictly above the ATM
///   strike, or no put strike strictly below it (warning severity: a
///   data-availability condition, not a bug)
///
/// # Examples
///
/// ```
/// use emove_core::chain::{OptionChain, Quote};
/// use emove_core::calc::expected_move;
///
/// let chain = OptionChain::new(
///     vec![Quote::new(95.0, 5.40), Quote::new(100.0, 3.20), Quote::new(105.0, 1.10)],
///     vec![Quote::new(95.0, 1.00), Quote::new(100.0, 2.80), Quote::new(105.0, 4.90)],
/// );
///
/// let result = expected_move(100.0, &chain).unwrap();
/// assert_eq!(result.straddle, 6.00);
/// assert_eq!(result.strangle, 2.10);
/// assert_eq!(result.expected_move, 4.05);
/// ```
pub fn expected_move(spot: f64, chain: &OptionChain) -> Result<ExpectedMove, ExpectedMoveError> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(ExpectedMoveError::InvalidSpot { spot });
    }

    let atm_strike = nearest_strike(chain.call_strikes(), spot)?;

    let atm_call = chain
        .call_at(atm_strike)
        .ok_or(ExpectedMoveError::MissingQuote {
            side: OptionSide::Call,
            strike: atm_strike,
        })?;
    let atm_put = chain
        .put_at(atm_strike)
        .ok_or(ExpectedMoveError::MissingQuote {
            side: OptionSide::Put,
            strike: atm_strike,
        })?;
    let straddle = atm_call.last_price + atm_put.last_price;

    let otm_call = first_otm(&chain.calls, |q| q.strike > atm_strike, |a, b| a < b).ok_or(
        ExpectedMoveError::InsufficientOtmStrikes {
            side: OptionSide::Call,
            atm_strike,
        },
    )?;
    let otm_put = first_otm(&chain.puts, |q| q.strike < atm_strike, |a, b| a > b).ok_or(
        ExpectedMoveError::InsufficientOtmStrikes {
            side: OptionSide::Put,
            atm_strike,
        },
    )?;
    let strangle = otm_call.last_price + otm_put.last_price;

    let expected_move = round_half_up_2dp((straddle + strangle) / 2.0);

    Ok(ExpectedMove {
        spot,
        atm_strike,
        atm_call_price: atm_call.last_price,
        atm_put_price: atm_put.last_price,
        straddle,
        otm_call_strike: otm_call.strike,
        otm_call_price: otm_call.last_price,
        otm_put_strike: otm_put.strike,
        otm_put_price: otm_put.last_price,
        strangle,
        expected_move,
        upper_bound: spot + expected_move,
        lower_bound: spot - expected_move,
    })
}

/// First OTM quote on one side: the extreme strike among quotes passing the
/// partition filter. Strict comparison keeps the first quote in listing
/// order when the extreme strike is duplicated.
fn first_otm<'a>(
    quotes: &'a [Quote],
    is_otm: impl Fn(&Quote) -> bool,
    beats: impl Fn(f64, f64) -> bool,
) -> Option<&'a Quote> {
    let mut best: Option<&Quote> = None;
    for quote in quotes.iter().filter(|q| is_otm(q)) {
        let better = match best {
            None => true,
            Some(current) => beats(quote.strike, current.strike),
        };
        if better {
            best = Some(quote);
        }
    }
    best
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        /// Strike ladder with non-negative premiums on both sides, plus a
        /// spot inside the quoted range.
        fn ladder_chain()(
            n in 3usize..12,
            base in 20.0f64..500.0,
            step in 1.0f64..10.0,
            seed_prices in proptest::collection::vec(0.0f64..50.0, 24),
            spot_frac in 0.0f64..1.0,
        ) -> (f64, OptionChain) {
            let strikes: Vec<f64> = (0..n).map(|i| base + step * i as f64).collect();
            let calls: Vec<Quote> = strikes
                .iter()
                .enumerate()
                .map(|(i, &k)| Quote::new(k, seed_prices[i % seed_prices.len()]))
                .collect();
            let puts: Vec<Quote> = strikes
                .iter()
                .enumerate()
                .map(|(i, &k)| Quote::new(k, seed_prices[(i + 7) % seed_prices.len()]))
                .collect();
            let spot = strikes[0] + spot_frac * (strikes[n - 1] - strikes[0]);
            (spot.max(0.01), OptionChain::new(calls, puts))
        }
    }

    proptest! {
        #[test]
        fn nearest_strike_is_minimal(
            strikes in proptest::collection::vec(1.0f64..1000.0, 1..40),
            spot in 1.0f64..1000.0,
        ) {
            let found = nearest_strike(strikes.iter().copied(), spot).unwrap();
            let best = strikes
                .iter()
                .map(|k| (k - spot).abs())
                .fold(f64::INFINITY, f64::min);
            prop_assert_eq!((found - spot).abs(), best);
        }

        #[test]
        fn estimator_is_deterministic((spot, chain) in ladder_chain()) {
            let first = expected_move(spot, &chain);
            let second = expected_move(spot, &chain);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn expected_move_is_non_negative_or_warns((spot, chain) in ladder_chain()) {
            match expected_move(spot, &chain) {
                Ok(result) => {
                    prop_assert!(result.expected_move >= 0.0);
                    prop_assert!(result.upper_bound >= result.lower_bound);
                }
                // ATM landed on the edge of the ladder
                Err(ExpectedMoveError::InsufficientOtmStrikes { .. }) => {}
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }
}
