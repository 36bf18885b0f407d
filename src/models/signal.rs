use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directional consensus for one evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Buy,
    Sell,
    None,
}

impl Trend {
    pub fn is_directional(self) -> bool {
        !matches!(self, Trend::None)
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Buy => "BUY",
            Trend::Sell => "SELL",
            Trend::None => "NONE",
        };
        f.write_str(label)
    }
}

/// A single contributing reason collected during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalReason {
    RsiLow,
    RsiHigh,
    SmaBullish,
    SmaBearish,
    MacdPositive,
    MacdNegative,
    VolumeSurge,
}

impl SignalReason {
    pub fn description(self) -> &'static str {
        match self {
            SignalReason::RsiLow => "RSI low (BUY)",
            SignalReason::RsiHigh => "RSI high (SELL)",
            SignalReason::SmaBullish => "SMA50 > SMA200 (BUY)",
            SignalReason::SmaBearish => "SMA50 < SMA200 (SELL)",
            SignalReason::MacdPositive => "MACD positive (BUY)",
            SignalReason::MacdNegative => "MACD negative (SELL)",
            SignalReason::VolumeSurge => "Volume above average (strong trend)",
        }
    }
}

impl fmt::Display for SignalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Payload produced when an alert fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub direction: Trend,
    pub reasons: Vec<SignalReason>,
    pub price: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    /// Render the notification text sent to the alert channel.
    ///
    /// Price and targets are all printed with two decimals.
    pub fn to_message(&self) -> String {
        let mut message = format!("[SIGNAL - {}]\nPrice: ${:.2}\n", self.direction, self.price);
        let lines: Vec<String> = self.reasons.iter().map(|r| format!("- {}", r)).collect();
        message.push_str(&lines.join("\n"));
        message.push_str(&format!(
            "\n\nTake Profit: ${:.2}\nStop Loss: ${:.2}",
            self.take_profit, self.stop_loss
        ));
        message
    }
}
