use plotters::prelude::*;
use thiserror::Error;

use crate::domain::path_frame::PathSimulationFrame;

#[derive(Error, Debug)]
pub enum FanPlotError {
    #[error("fan chart has no frames")]
    Empty,
    #[error("failed to render fan chart: {0}")]
    Plot(String),
}

/// Renders percentile bands as filled areas around the zero median, with
/// the overlay trajectories drawn as thin lines on top.
pub fn write_fan_chart_png(output_path: &str, frames: &[PathSimulationFrame]) -> Result<(), FanPlotError> {
    if frames.is_empty() {
        return Err(FanPlotError::Empty);
    }

    let max_week = frames.iter().map(|f| f.week).max().unwrap_or(0).max(1);
    let span = frames
        .iter()
        .map(PathSimulationFrame::max_deviation)
        .fold(1.0_f64, f64::max)
        * 1.1;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| FanPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Path Simulation (Fan Chart)", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_week, -span..span)
        .map_err(|e| FanPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Week")
        .y_desc("Deviation from median (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| FanPlotError::Plot(e.to_string()))?;

    let bands: [(fn(&PathSimulationFrame) -> (f64, f64), f64); 3] = [
        (|f| (f.p95_lower, f.p95_upper), 0.12),
        (|f| (f.p90_lower, f.p90_upper), 0.2),
        (|f| (f.p75_lower, f.p75_upper), 0.3),
    ];
    for (band, opacity) in bands {
        let upper: Vec<(u32, f64)> = frames.iter().map(|f| (f.week, band(f).1)).collect();
        let lower: Vec<(u32, f64)> = frames.iter().rev().map(|f| (f.week, band(f).0)).collect();
        let outline: Vec<(u32, f64)> = upper.into_iter().chain(lower).collect();
        chart
            .draw_series(std::iter::once(Polygon::new(
                outline,
                RGBColor(59, 130, 246).mix(opacity).filled(),
            )))
            .map_err(|e| FanPlotError::Plot(e.to_string()))?;
    }

    let overlay_count = frames.iter().map(|f| f.sample_paths.len()).min().unwrap_or(0);
    for path_index in 0..overlay_count {
        chart
            .draw_series(LineSeries::new(
                frames.iter().map(|f| (f.week, f.sample_paths[path_index])),
                RGBColor(120, 120, 120).mix(0.6).stroke_width(1),
            ))
            .map_err(|e| FanPlotError::Plot(e.to_string()))?;
    }

    chart
        .draw_series(LineSeries::new(
            frames.iter().map(|f| (f.week, f.median)),
            BLACK.stroke_width(2),
        ))
        .map_err(|e| FanPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| FanPlotError::Plot(e.to_string()))?;
    Ok(())
}
