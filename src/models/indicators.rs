use serde::{Deserialize, Serialize};

/// One bar of the sample series: closing price and traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub close: f64,
    pub volume: f64,
}

impl Sample {
    pub fn new(close: f64, volume: f64) -> Self {
        Self { close, volume }
    }
}

/// Indicator values computed from one sample series at one point in time.
///
/// Every optional field is `None` when the series was too short for that
/// indicator. `None` and a computed zero are different outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    pub volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_volume: Option<f64>,
}

impl IndicatorSnapshot {
    /// Snapshot with only price and volume set; indicators unavailable.
    pub fn new(price: f64, volume: f64) -> Self {
        Self {
            price,
            rsi: None,
            sma_short: None,
            sma_long: None,
            macd: None,
            volume,
            average_volume: None,
        }
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_smas(mut self, short: f64, long: f64) -> Self {
        self.sma_short = Some(short);
        self.sma_long = Some(long);
        self
    }

    pub fn with_macd(mut self, macd: f64) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_average_volume(mut self, average_volume: f64) -> Self {
        self.average_volume = Some(average_volume);
        self
    }

    /// True when the current volume exceeds `multiplier` times the trailing
    /// average. Always false if the average is unavailable.
    pub fn volume_surge(&self, multiplier: f64) -> bool {
        self.average_volume
            .map(|avg| self.volume > avg * multiplier)
            .unwrap_or(false)
    }
}
