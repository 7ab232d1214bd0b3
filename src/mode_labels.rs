// src/mode_labels.rs

/// Human-readable descriptions of the acquisition modes, in the order they appear in a log.
///
/// The default set matches the four modes the ADS1256 test firmware records:
/// single-ended and differential, each multiplexed and continuous.
pub const DEFAULT_MODE_LABELS: [&str; 4] = [
    "4230 SPS, single-ended, multiplexed channels",
    "4230 SPS, differential, multiplexed channels",
    "30 000 SPS, single-ended, continuous",
    "30 000 SPS, differential, continuous",
];

/// Mode index -> chart title.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeLabels {
    labels: Vec<String>,
}

impl Default for ModeLabels {
    fn default() -> Self {
        Self::new(DEFAULT_MODE_LABELS.iter().map(|s| s.to_string()).collect())
    }
}

impl ModeLabels {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Label for `mode_index`, or `"Mode {n}"` (1-based) when none is configured.
    pub fn label(&self, mode_index: usize) -> String {
        self.labels
            .get(mode_index)
            .cloned()
            .unwrap_or_else(|| format!("Mode {}", mode_index + 1))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Axis captions shared by all charts.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    pub time: String,
    pub voltage: String,
    pub frequency: String,
    pub amplitude: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            time: "Time (sample)".to_string(),
            voltage: "Voltage (V)".to_string(),
            frequency: "Frequency (Hz)".to_string(),
            amplitude: "Amplitude".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = ModeLabels::default();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels.label(0), DEFAULT_MODE_LABELS[0]);
        assert_eq!(labels.label(3), DEFAULT_MODE_LABELS[3]);
    }

    #[test]
    fn test_fallback_label() {
        let labels = ModeLabels::new(vec!["first".to_string()]);
        assert_eq!(labels.label(0), "first");
        assert_eq!(labels.label(1), "Mode 2");
        assert_eq!(ModeLabels::new(Vec::new()).label(0), "Mode 1");
    }
}
