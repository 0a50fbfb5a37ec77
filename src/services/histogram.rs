use plotters::prelude::*;
use thiserror::Error;

use crate::domain::duration_sample::{DurationSample, sorted_by_week};

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("histogram is empty")]
    Empty,
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Renders a weekly histogram as a bar chart PNG.
pub fn write_histogram_png(output_path: &str, samples: &[DurationSample]) -> Result<(), HistogramError> {
    if samples.is_empty() {
        return Err(HistogramError::Empty);
    }
    let samples = sorted_by_week(samples);

    let min_week = samples.first().map(|s| s.week).unwrap_or(0) - 1;
    let max_week = samples.last().map(|s| s.week).unwrap_or(0) + 1;
    let max_count = samples.iter().map(|s| s.frequency).max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Completion Distribution", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(min_week..max_week, 0..(max_count + max_count / 10 + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Week")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(samples.iter().map(|sample| {
            Rectangle::new([(sample.week, 0), (sample.week + 1, sample.frequency)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::histogram;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn write_histogram_png_creates_file() {
        let output_file = assert_fs::NamedTempFile::new("histogram.png").unwrap();
        let samples = histogram(&[(12, 40), (13, 70), (14, 73), (15, 65)]);

        write_histogram_png(output_file.path().to_str().unwrap(), &samples).unwrap();

        output_file.assert(predicate::path::exists());
        assert!(std::fs::metadata(output_file.path()).unwrap().len() > 0);
    }

    #[test]
    fn write_histogram_png_rejects_empty_histogram() {
        let error = write_histogram_png("unused.png", &[]).expect_err("expected empty error");
        assert!(matches!(error, HistogramError::Empty));
    }
}
