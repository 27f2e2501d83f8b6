use anyhow::{Context, Result};
use charming::{
    component::{Axis, Legend, Title},
    element::AxisType,
    series::Scatter,
    Chart, HtmlRenderer,
};
use std::path::Path;

use crate::plot::{PLOT_HEIGHT, PLOT_WIDTH};

/// Generates and saves a scatter chart of the projected profile using charming.
/// Pixel coordinates grow downward; Y is flipped here so depth reads
/// correctly on the chart.
pub fn save_profile_chart(path: &Path, title_text: &str, plotted: &[[f64; 2]]) -> Result<()> {
    let data: Vec<Vec<f64>> = plotted
        .iter()
        .map(|p| vec![p[0], PLOT_HEIGHT - p[1]])
        .collect();

    let chart = Chart::new()
        .title(Title::new().text(title_text).left("center"))
        .legend(Legend::new().show(false))
        .x_axis(Axis::new().type_(AxisType::Value).name("Along profile (px)"))
        .y_axis(Axis::new().type_(AxisType::Value).name("Elevation (px)"))
        .series(Scatter::new().symbol_size(4).data(data));

    let mut renderer = HtmlRenderer::new(title_text, PLOT_WIDTH as u64, PLOT_HEIGHT as u64);
    renderer
        .save(&chart, path)
        .context("Failed to save profile chart to file")?;

    Ok(())
}
