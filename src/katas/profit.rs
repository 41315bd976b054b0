//! Maximum profit from a stock price sequence.

/// Returns the most profit obtainable from `quotes` (prices in date order)
/// when each day allows buying one unit, selling everything held, or doing
/// nothing.
///
/// Equivalent rule: every day's contribution is the best later-or-same price
/// minus that day's price, so a single right-to-left sweep tracking the
/// running maximum suffices.
pub fn max_profit(quotes: &[f64]) -> f64 {
    let mut best_ahead = f64::NEG_INFINITY;
    let mut profit = 0.0;

    for &price in quotes.iter().rev() {
        best_ahead = best_ahead.max(price);
        profit += best_ahead - price;
    }
    profit
}
