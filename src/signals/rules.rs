//! Ordered aggregation rules.
//!
//! Each directional rule may add one reason and propose one trend. They are
//! evaluated in the order of [`DIRECTIONAL_RULES`]; the first proposal becomes
//! the candidate trend and later proposals only add reasons.

use crate::config::SignalConfig;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{SignalReason, Trend};

/// A reason paired with the trend it proposes.
pub type Proposal = (SignalReason, Trend);

pub type DirectionalRule = fn(&IndicatorSnapshot, &SignalConfig) -> Option<Proposal>;

/// Evaluation order: RSI, then SMA crossover, then MACD.
pub const DIRECTIONAL_RULES: [(&str, DirectionalRule); 3] =
    [("rsi", rsi_rule), ("sma", sma_rule), ("macd", macd_rule)];

pub fn rsi_rule(snapshot: &IndicatorSnapshot, config: &SignalConfig) -> Option<Proposal> {
    let rsi = snapshot.rsi?;
    if rsi < config.rsi_oversold {
        Some((SignalReason::RsiLow, Trend::Buy))
    } else if rsi > config.rsi_overbought {
        Some((SignalReason::RsiHigh, Trend::Sell))
    } else {
        None
    }
}

/// Requires both averages; equal averages abstain.
pub fn sma_rule(snapshot: &IndicatorSnapshot, _config: &SignalConfig) -> Option<Proposal> {
    let (short, long) = (snapshot.sma_short?, snapshot.sma_long?);
    if short > long {
        Some((SignalReason::SmaBullish, Trend::Buy))
    } else if short < long {
        Some((SignalReason::SmaBearish, Trend::Sell))
    } else {
        None
    }
}

/// A MACD of exactly zero abstains.
pub fn macd_rule(snapshot: &IndicatorSnapshot, _config: &SignalConfig) -> Option<Proposal> {
    let macd = snapshot.macd?;
    if macd > 0.0 {
        Some((SignalReason::MacdPositive, Trend::Buy))
    } else if macd < 0.0 {
        Some((SignalReason::MacdNegative, Trend::Sell))
    } else {
        None
    }
}

/// Volume surge reinforces but never proposes a trend.
pub fn volume_rule(snapshot: &IndicatorSnapshot, config: &SignalConfig) -> Option<SignalReason> {
    snapshot
        .volume_surge(config.volume_surge_multiplier)
        .then_some(SignalReason::VolumeSurge)
}

/// First directional proposal wins; `Trend::None` if nothing proposed.
pub fn resolve_trend(proposals: &[Trend]) -> Trend {
    proposals
        .iter()
        .copied()
        .find(|trend| trend.is_directional())
        .unwrap_or(Trend::None)
}

/// Reasons and candidate trend collected for one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub candidate: Trend,
    pub reasons: Vec<SignalReason>,
}

pub fn aggregate(snapshot: &IndicatorSnapshot, config: &SignalConfig) -> Aggregation {
    let mut reasons = Vec::new();
    let mut proposals = Vec::new();

    for (_name, rule) in DIRECTIONAL_RULES {
        if let Some((reason, trend)) = rule(snapshot, config) {
            reasons.push(reason);
            proposals.push(trend);
        }
    }

    if let Some(reason) = volume_rule(snapshot, config) {
        reasons.push(reason);
    }

    Aggregation {
        candidate: resolve_trend(&proposals),
        reasons,
    }
}
