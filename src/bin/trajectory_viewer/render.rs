use macroquad::prelude::*;
use projectile_motion::core::window::AxisBounds;
use projectile_motion::output::animation::AnimationFrame;

use crate::constants::{
    GRID_COLOR, MARKER_COLOR, MARKER_RADIUS_PX, TEXT_COLOR, TRAIL_COLOR, TRAIL_THICKNESS_PX,
    X_GRID_LINES, Y_GRID_LINES,
};

#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn world_to_screen(&self, point: (f64, f64), bounds: AxisBounds) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let tx = ((point.0 - bounds.x_min) / (bounds.x_max - bounds.x_min)) as f32;
        let ty = ((point.1 - bounds.y_min) / (bounds.y_max - bounds.y_min)) as f32;
        vec2(self.left + tx * plot_w, self.bottom - ty * plot_h)
    }
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_grid(area: PlotArea) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, GRID_COLOR);
    }
}

pub(crate) fn draw_axis_labels(area: PlotArea, bounds: AxisBounds, x_desc: &str, y_desc: &str) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f64 / X_GRID_LINES as f64;
        let x = area.left + t as f32 * (area.right - area.left);
        let value = bounds.x_min + t * (bounds.x_max - bounds.x_min);
        let label = format_axis_value(value, bounds.x_max);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            f32::from(tick_font_size),
            TEXT_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f64 / Y_GRID_LINES as f64;
        let y = area.bottom - t as f32 * (area.bottom - area.top);
        let value = bounds.y_min + t * (bounds.y_max - bounds.y_min);
        let label = format_axis_value(value, bounds.y_max);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            f32::from(tick_font_size),
            TEXT_COLOR,
        );
    }

    draw_text(x_desc, area.right - 220.0, area.bottom + 52.0, 20.0, TEXT_COLOR);
    draw_text(y_desc, area.left + 10.0, area.top - 10.0, 20.0, TEXT_COLOR);
}

pub(crate) fn draw_frame(frame: &AnimationFrame<'_>, area: PlotArea, bounds: AxisBounds) {
    let mut screen_points = frame
        .trail
        .iter()
        .map(|point| area.world_to_screen(*point, bounds));

    if let Some(mut prev) = screen_points.next() {
        for cur in screen_points {
            draw_line(prev.x, prev.y, cur.x, cur.y, TRAIL_THICKNESS_PX, TRAIL_COLOR);
            prev = cur;
        }
    }

    if let Some(marker) = frame.marker {
        let pos = area.world_to_screen(marker, bounds);
        draw_circle(pos.x, pos.y, MARKER_RADIUS_PX, MARKER_COLOR);
    }
}
