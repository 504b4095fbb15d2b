use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::core::ballistics::{LaunchParameters, TimeSeries};
use crate::core::window::plot_bounds;
use crate::error::{ProjectileError, render_error};

pub const PLOT_SIZE_PX: (u32, u32) = (1000, 600);
pub const X_AXIS_LABEL: &str = "Horizontal Distance (m)";
pub const Y_AXIS_LABEL: &str = "Vertical Height (m)";

pub fn plot_title(params: LaunchParameters) -> String {
    format!(
        "Projectile (v0={} m/s, θ={}°)",
        params.initial_speed_mps, params.launch_angle_deg
    )
}

pub fn plot_trajectory(
    series: &TimeSeries,
    title: &str,
    path: &Path,
) -> Result<PathBuf, ProjectileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let points = series.positions();
    let bounds = plot_bounds(&points);

    let root = BitMapBackend::new(path, PLOT_SIZE_PX).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x_range(), bounds.y_range())
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(points, BLUE.stroke_width(2)))
        .map_err(render_error)?
        .label("Trajectory")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    log::info!("Saved trajectory plot to {}", path.display());

    Ok(path.to_path_buf())
}
