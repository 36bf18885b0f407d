//! Unit tests for signal models

use chrono::Utc;
use solsignal::models::{Alert, IndicatorSnapshot, SignalReason, Trend};

#[test]
fn test_trend_display() {
    assert_eq!(Trend::Buy.to_string(), "BUY");
    assert_eq!(Trend::Sell.to_string(), "SELL");
    assert_eq!(Trend::None.to_string(), "NONE");
    assert!(!Trend::None.is_directional());
}

#[test]
fn test_reason_descriptions() {
    assert_eq!(SignalReason::RsiLow.to_string(), "RSI low (BUY)");
    assert_eq!(SignalReason::SmaBearish.to_string(), "SMA50 < SMA200 (SELL)");
    assert_eq!(
        SignalReason::VolumeSurge.to_string(),
        "Volume above average (strong trend)"
    );
}

#[test]
fn test_alert_message_format() {
    let alert = Alert {
        direction: Trend::Buy,
        reasons: vec![
            SignalReason::RsiLow,
            SignalReason::SmaBullish,
            SignalReason::MacdPositive,
        ],
        price: 100.0,
        take_profit: 105.0,
        stop_loss: 97.5,
        timestamp: Utc::now(),
    };

    assert_eq!(
        alert.to_message(),
        "[SIGNAL - BUY]\nPrice: $100.00\n- RSI low (BUY)\n- SMA50 > SMA200 (BUY)\n- MACD positive (BUY)\n\nTake Profit: $105.00\nStop Loss: $97.50"
    );
}

#[test]
fn test_snapshot_volume_surge_needs_average() {
    let snapshot = IndicatorSnapshot::new(10.0, 1_000_000.0);
    assert!(!snapshot.volume_surge(1.5));
    assert!(snapshot.with_average_volume(10.0).volume_surge(1.5));
}

#[test]
fn test_snapshot_serialization_skips_unavailable() {
    let json = serde_json::to_value(IndicatorSnapshot::new(10.0, 5.0).with_rsi(40.0)).unwrap();
    assert_eq!(json["rsi"], 40.0);
    assert!(json.get("macd").is_none());
}
