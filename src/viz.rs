//! Chart rendering for sweep results using Plotters

use plotters::prelude::*;

use crate::sweep::{SweepFeature, SweepResult};

/// Chart dimensions in pixels
const CHART_SIZE: (u32, u32) = (800, 400);

/// Radius of the per-sample markers, in pixels
const MARKER_SIZE: i32 = 3;

/// German x-axis label for the swept feature
fn x_axis_label(feature: SweepFeature) -> &'static str {
    match feature {
        SweepFeature::Area => "Wohnfläche (qm)",
        SweepFeature::Rooms => "Zimmeranzahl",
    }
}

/// German feature name used in the default chart title
fn feature_display_name(feature: SweepFeature) -> &'static str {
    match feature {
        SweepFeature::Area => "Wohnfläche",
        SweepFeature::Rooms => "Zimmeranzahl",
    }
}

/// Render a sweep as a PNG line chart with per-sample markers
///
/// # Arguments
/// * `feature` - Swept feature, used for axis labeling and the default title
/// * `result` - Aligned sample/price series to draw
/// * `output_path` - Path of the PNG file to write
/// * `plot_title` - Optional title override; defaults to
///   "Einfluss von ... auf den Preis" for the swept feature
///
/// # Returns
/// * Result indicating success or failure
pub fn create_influence_chart(
    feature: SweepFeature,
    result: &SweepResult,
    output_path: &str,
    plot_title: Option<&str>,
) -> crate::Result<()> {
    let default_title = format!(
        "Einfluss von {} auf den Preis",
        feature_display_name(feature)
    );
    let title = plot_title.unwrap_or(&default_title);

    // Calculate plot bounds with some padding so edge markers stay visible
    let x_min = result.x_values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let x_max = result.x_values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let y_min = result.y_values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let y_max = result.y_values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let x_pad = (x_max - x_min) * 0.03;
    let y_pad = (y_max - y_min) * 0.05;

    // Create the drawing backend
    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )?;

    chart
        .configure_mesh()
        .x_desc(x_axis_label(feature))
        .y_desc("Vorhergesagter Preis")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    // Line through the samples, plus a circle marker on each one
    chart.draw_series(LineSeries::new(result.points(), &BLUE))?;
    chart.draw_series(
        result
            .points()
            .map(|point| Circle::new(point, MARKER_SIZE, BLUE.filled())),
    )?;

    root.present()?;
    println!("Influence chart saved to: {}", output_path);

    Ok(())
}

/// Print a short console summary of a sweep
pub fn print_sweep_summary(feature: SweepFeature, result: &SweepResult) {
    let y_min = result.y_values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let y_max = result.y_values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    println!("\n=== Sweep Summary ===");
    println!("Swept feature: {:?}", feature);
    println!("Samples: {}", result.len());
    println!("Predicted price range: {:.2} to {:.2}", y_min, y_max);
}
