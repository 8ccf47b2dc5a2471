//! Rendering a finished run as an aligned text table or pretty JSON.

use serde::Serialize;

use metron_model::ModelFamily;

use crate::runner::ConfigSummary;

/// A finished benchmark run, ready for rendering.
#[derive(Clone, Debug)]
pub struct Report {
    engine: String,
    metric: String,
    summaries: Vec<ConfigSummary>,
}

impl Report {
    /// Wraps run output with the engine and metric names it was produced
    /// under.
    pub fn new(
        engine: impl Into<String>,
        metric: impl Into<String>,
        summaries: Vec<ConfigSummary>,
    ) -> Self {
        Self {
            engine: engine.into(),
            metric: metric.into(),
            summaries,
        }
    }

    // --- Accessors ---

    /// Engine name the run used.
    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Metric name the run scored with.
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Per-configuration summaries, in input order.
    pub fn summaries(&self) -> &[ConfigSummary] {
        &self.summaries
    }

    /// Renders the aligned plain-text table. Configurations with no
    /// successful trials show `-` in the aggregate columns.
    pub fn to_table(&self) -> String {
        let error_header = format!("mean {}", self.metric);
        let mut out = format!(
            "{:<12} {:>7} {:>8} {:>15} {:>12}\n",
            "model", "trials", "skipped", "mean time (us)", error_header
        );

        for summary in &self.summaries {
            let time = match summary.mean_elapsed() {
                Some(elapsed) => format!("{:.1}", elapsed.as_secs_f64() * 1e6),
                None => "-".to_string(),
            };
            let error = match summary.mean_error() {
                Some(error) => format!("{error:.6}"),
                None => "-".to_string(),
            };
            out.push_str(&format!(
                "{:<12} {:>7} {:>8} {:>15} {:>12}\n",
                summary.spec().to_string(),
                summary.n_trials(),
                summary.n_skipped(),
                time,
                error
            ));
        }
        out
    }

    /// Serializes the report as pretty JSON for downstream tooling.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let configs = self
            .summaries
            .iter()
            .map(|summary| JsonSummary {
                model: summary.spec().to_string(),
                family: family_name(summary.spec().family()),
                p: summary.spec().p(),
                q: summary.spec().q(),
                trials: summary.n_trials(),
                skipped: summary.n_skipped(),
                mean_time_us: summary.mean_elapsed().map(|d| d.as_secs_f64() * 1e6),
                mean_error: summary.mean_error(),
            })
            .collect();

        let report = JsonReport {
            engine: &self.engine,
            metric: &self.metric,
            configs,
        };
        serde_json::to_string_pretty(&report)
    }
}

fn family_name(family: ModelFamily) -> &'static str {
    match family {
        ModelFamily::Ar => "ar",
        ModelFamily::Ma => "ma",
        ModelFamily::Arma => "arma",
    }
}

/// Top-level JSON shape.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    engine: &'a str,
    metric: &'a str,
    configs: Vec<JsonSummary>,
}

/// One configuration row in the JSON report.
#[derive(Debug, Serialize)]
struct JsonSummary {
    model: String,
    family: &'static str,
    p: usize,
    q: usize,
    trials: usize,
    skipped: usize,
    mean_time_us: Option<f64>,
    mean_error: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use metron_model::ModelSpec;
    use std::time::Duration;

    fn sample_report() -> Report {
        Report::new(
            "css",
            "rmse",
            vec![
                ConfigSummary::new(
                    ModelSpec::ar(5),
                    5,
                    0,
                    Some(Duration::from_micros(150)),
                    Some(0.051),
                ),
                ConfigSummary::new(ModelSpec::arma(5, 5), 0, 5, None, None),
            ],
        )
    }

    #[test]
    fn table_has_header_and_one_row_per_config() {
        let table = sample_report().to_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("model"));
        assert!(lines[0].contains("mean rmse"));
        assert!(lines[1].contains("AR(5)"));
        assert!(lines[2].contains("ARMA(5,5)"));
    }

    #[test]
    fn table_renders_sentinels_as_dash() {
        let table = sample_report().to_table();
        let empty_row = table.lines().nth(2).unwrap();
        assert!(empty_row.contains('-'));
        assert!(!empty_row.contains("NaN"));
    }

    #[test]
    fn json_contains_fields() {
        let json = sample_report().to_json().unwrap();
        assert!(json.contains("\"engine\": \"css\""));
        assert!(json.contains("\"metric\": \"rmse\""));
        assert!(json.contains("\"model\": \"AR(5)\""));
        assert!(json.contains("\"family\": \"ar\""));
        assert!(json.contains("\"trials\": 5"));
        assert!(json.contains("\"skipped\": 5"));
        assert!(json.contains("\"mean_error\": null"));
    }

    #[test]
    fn json_preserves_config_order() {
        let json = sample_report().to_json().unwrap();
        let first = json.find("AR(5)").unwrap();
        let second = json.find("ARMA(5,5)").unwrap();
        assert!(first < second);
    }

    #[test]
    fn accessors_round_trip() {
        let report = sample_report();
        assert_eq!(report.engine(), "css");
        assert_eq!(report.metric(), "rmse");
        assert_eq!(report.summaries().len(), 2);
    }
}
