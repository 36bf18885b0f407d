//! Unit tests for aggregation rules

use solsignal::config::SignalConfig;
use solsignal::models::{IndicatorSnapshot, SignalReason, Trend};
use solsignal::signals::rules::{
    aggregate, macd_rule, resolve_trend, rsi_rule, sma_rule, volume_rule, DIRECTIONAL_RULES,
};

fn base() -> IndicatorSnapshot {
    IndicatorSnapshot::new(100.0, 1000.0)
}

#[test]
fn test_rule_order_is_rsi_sma_macd() {
    let names: Vec<&str> = DIRECTIONAL_RULES.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["rsi", "sma", "macd"]);
}

#[test]
fn test_rsi_thresholds() {
    let config = SignalConfig::default();
    assert_eq!(
        rsi_rule(&base().with_rsi(29.99), &config),
        Some((SignalReason::RsiLow, Trend::Buy))
    );
    assert_eq!(
        rsi_rule(&base().with_rsi(70.01), &config),
        Some((SignalReason::RsiHigh, Trend::Sell))
    );
    assert_eq!(rsi_rule(&base().with_rsi(30.0), &config), None);
    assert_eq!(rsi_rule(&base().with_rsi(70.0), &config), None);
    assert_eq!(rsi_rule(&base(), &config), None);
}

#[test]
fn test_sma_requires_both_and_abstains_on_equality() {
    let config = SignalConfig::default();
    let mut only_short = base();
    only_short.sma_short = Some(110.0);
    assert_eq!(sma_rule(&only_short, &config), None);
    assert_eq!(sma_rule(&base().with_smas(100.0, 100.0), &config), None);
    assert_eq!(
        sma_rule(&base().with_smas(99.0, 100.0), &config),
        Some((SignalReason::SmaBearish, Trend::Sell))
    );
}

#[test]
fn test_macd_zero_abstains() {
    let config = SignalConfig::default();
    assert_eq!(macd_rule(&base().with_macd(0.0), &config), None);
    assert_eq!(
        macd_rule(&base().with_macd(-0.01), &config),
        Some((SignalReason::MacdNegative, Trend::Sell))
    );
}

#[test]
fn test_volume_rule_never_proposes() {
    let config = SignalConfig::default();
    let surge = IndicatorSnapshot::new(100.0, 200.0).with_average_volume(100.0);
    assert_eq!(volume_rule(&surge, &config), Some(SignalReason::VolumeSurge));

    let aggregation = aggregate(&surge, &config);
    assert_eq!(aggregation.candidate, Trend::None);
    assert_eq!(aggregation.reasons, vec![SignalReason::VolumeSurge]);
}

#[test]
fn test_resolve_trend_first_proposer() {
    assert_eq!(resolve_trend(&[]), Trend::None);
    assert_eq!(resolve_trend(&[Trend::Sell, Trend::Buy]), Trend::Sell);
    assert_eq!(resolve_trend(&[Trend::None, Trend::Buy, Trend::Sell]), Trend::Buy);
}

#[test]
fn test_aggregate_first_proposer_wins() {
    let snapshot = base().with_rsi(75.0).with_smas(110.0, 100.0).with_macd(1.0);
    let aggregation = aggregate(&snapshot, &SignalConfig::default());
    assert_eq!(aggregation.candidate, Trend::Sell);
    assert_eq!(
        aggregation.reasons,
        vec![
            SignalReason::RsiHigh,
            SignalReason::SmaBullish,
            SignalReason::MacdPositive
        ]
    );
}

#[test]
fn test_aggregate_later_rule_proposes_when_rsi_neutral() {
    let snapshot = base().with_rsi(50.0).with_smas(90.0, 100.0).with_macd(2.0);
    let aggregation = aggregate(&snapshot, &SignalConfig::default());
    assert_eq!(aggregation.candidate, Trend::Sell);
    assert_eq!(aggregation.reasons.len(), 2);
}
