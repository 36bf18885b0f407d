//! Firing rule, hysteresis and take-profit/stop-loss targets.

use chrono::Utc;

use crate::common::math;
use crate::config::SignalConfig;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{Alert, SignalReason, Trend};
use crate::signals::rules::aggregate;

/// Outcome of one evaluation cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub candidate: Trend,
    pub reasons: Vec<SignalReason>,
    /// Trend memory to carry into the next cycle.
    pub last_emitted: Option<Trend>,
    pub alert: Option<Alert>,
}

/// Decide whether to alert for this snapshot.
///
/// An alert fires when at least `min_reasons` reasons were collected and the
/// candidate trend is directional and equal to the trend remembered from the
/// previous cycle. The memory becomes the candidate on every directional
/// cycle, fired or not; `Trend::None` cycles leave it untouched.
pub fn decide(
    snapshot: &IndicatorSnapshot,
    last_emitted: Option<Trend>,
    config: &SignalConfig,
) -> Decision {
    let aggregation = aggregate(snapshot, config);
    let candidate = aggregation.candidate;

    let fires = candidate.is_directional()
        && aggregation.reasons.len() >= config.min_reasons
        && last_emitted == Some(candidate);

    let alert = fires
        .then(|| targets(candidate, snapshot.price, config))
        .flatten()
        .map(|(take_profit, stop_loss)| Alert {
            direction: candidate,
            reasons: aggregation.reasons.clone(),
            price: snapshot.price,
            take_profit,
            stop_loss,
            timestamp: Utc::now(),
        });

    let last_emitted = if candidate.is_directional() {
        Some(candidate)
    } else {
        last_emitted
    };

    Decision {
        candidate,
        reasons: aggregation.reasons,
        last_emitted,
        alert,
    }
}

/// Take-profit and stop-loss prices, rounded to 2 decimals.
///
/// `None` for `Trend::None`, which has no direction to target.
pub fn targets(direction: Trend, price: f64, config: &SignalConfig) -> Option<(f64, f64)> {
    let (tp, sl) = match direction {
        Trend::Buy => (config.buy_take_profit, config.buy_stop_loss),
        Trend::Sell => (config.sell_take_profit, config.sell_stop_loss),
        Trend::None => return None,
    };
    Some((math::round2(price * tp), math::round2(price * sl)))
}
