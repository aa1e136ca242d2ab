//! Metrics report rendering.
//!
//! Reduces the engine's output into the plain-text report: one line per
//! latency sample in production order, the two-decimal average, then one
//! line per throughput bucket in the map's (unspecified) iteration
//! order.

use crate::engine::EngineOutput;
use crate::parser::model::LatencySample;

/// Arithmetic mean of the sample durations; `0.0` for an empty set.
pub fn average_latency_ms(samples: &[LatencySample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: i64 = samples.iter().map(|s| s.duration_ms).sum();
    total as f64 / samples.len() as f64
}

/// Render the full metrics report.
pub fn render(output: &EngineOutput) -> String {
    let mut report = String::new();

    for sample in &output.samples {
        report.push_str(&format!("Latency: {} ms\n", sample.duration_ms));
    }

    report.push_str(&format!(
        "Average Latency: {:.2} ms\n",
        average_latency_ms(&output.samples)
    ));

    for (minute, count) in &output.throughput {
        report.push_str(&format!(
            "Minute: {}, Throughput: {} orders/min\n",
            minute.format("%Y-%m-%d %H:%M"),
            count
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(id: &str, ms: i64) -> LatencySample {
        LatencySample {
            correlation_id: id.to_string(),
            duration_ms: ms,
        }
    }

    #[test]
    fn average_of_empty_set_is_zero() {
        assert_eq!(average_latency_ms(&[]), 0.0);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let samples = vec![sample("A", 10), sample("B", 20), sample("C", 30)];
        assert_eq!(average_latency_ms(&samples), 20.0);
    }

    #[test]
    fn empty_output_renders_zero_average_only() {
        let report = render(&EngineOutput::default());
        assert_eq!(report, "Average Latency: 0.00 ms\n");
    }

    #[test]
    fn samples_render_in_production_order() {
        let output = EngineOutput {
            samples: vec![sample("A", 10), sample("B", 20), sample("C", 30)],
            ..Default::default()
        };
        let report = render(&output);
        assert_eq!(
            report,
            "Latency: 10 ms\nLatency: 20 ms\nLatency: 30 ms\nAverage Latency: 20.00 ms\n"
        );
    }

    #[test]
    fn negative_sample_renders_signed() {
        let output = EngineOutput {
            samples: vec![sample("A", -250)],
            ..Default::default()
        };
        assert!(render(&output).contains("Latency: -250 ms\n"));
    }

    #[test]
    fn throughput_line_format() {
        let minute = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let mut output = EngineOutput::default();
        output.throughput.insert(minute, 7);

        let report = render(&output);
        assert!(report.contains("Minute: 2024-01-01 09:30, Throughput: 7 orders/min\n"));
    }
}
