use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::window::{AxisBounds, animation_bounds};
use crate::error::{ProjectileError, render_error};
use crate::output::plot::{X_AXIS_LABEL, Y_AXIS_LABEL};

pub const FRAME_INTERVAL_MS: u32 = 50;
pub const ANIMATION_SIZE_PX: (u32, u32) = (800, 500);
pub const ANIMATION_TITLE: &str = "Projectile Motion Animation";

/// Drawable state for one frame: the path flown so far and the current position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame<'a> {
    pub index: usize,
    pub trail: &'a [(f64, f64)],
    pub marker: Option<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryAnimation {
    points: Vec<(f64, f64)>,
    bounds: AxisBounds,
}

impl TrajectoryAnimation {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        let bounds = animation_bounds(&points);
        Self { points, bounds }
    }

    pub fn frame_count(&self) -> usize {
        self.points.len()
    }

    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    /// Indices past the last frame wrap around, so playback loops.
    pub fn frame(&self, index: usize) -> AnimationFrame<'_> {
        if self.points.is_empty() {
            return AnimationFrame {
                index: 0,
                trail: &[],
                marker: None,
            };
        }

        let index = index % self.points.len();
        AnimationFrame {
            index,
            trail: &self.points[..index],
            marker: Some(self.points[index]),
        }
    }
}

/// Wall-clock to frame-index bookkeeping for live playback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    frame: usize,
    accumulated_ms: f64,
    paused: bool,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            frame: 0,
            accumulated_ms: 0.0,
            paused: false,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn advance(&mut self, dt_s: f64, frame_count: usize) -> usize {
        if self.paused || frame_count == 0 {
            return self.frame;
        }

        self.accumulated_ms += dt_s.max(0.0) * 1000.0;
        let interval = f64::from(FRAME_INTERVAL_MS);
        while self.accumulated_ms >= interval {
            self.accumulated_ms -= interval;
            self.frame = (self.frame + 1) % frame_count;
        }
        self.frame
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the GIF canvas; every rendered frame is appended to the file.
pub struct GifRenderer {
    root: DrawingArea<BitMapBackend<'static>, Shift>,
    bounds: AxisBounds,
    frames_written: usize,
    path: PathBuf,
}

impl GifRenderer {
    pub fn create(path: &Path, bounds: AxisBounds) -> Result<Self, ProjectileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let backend = BitMapBackend::gif(path.to_path_buf(), ANIMATION_SIZE_PX, FRAME_INTERVAL_MS)
            .map_err(render_error)?;

        Ok(Self {
            root: backend.into_drawing_area(),
            bounds,
            frames_written: 0,
            path: path.to_path_buf(),
        })
    }

    pub fn render_frame(&mut self, frame: &AnimationFrame<'_>) -> Result<(), ProjectileError> {
        self.root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&self.root)
            .caption(ANIMATION_TITLE, ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(55)
            .build_cartesian_2d(self.bounds.x_range(), self.bounds.y_range())
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(
                frame.trail.iter().copied(),
                BLUE.stroke_width(2),
            ))
            .map_err(render_error)?;

        if let Some(marker) = frame.marker {
            chart
                .draw_series(std::iter::once(Circle::new(marker, 5, RED.filled())))
                .map_err(render_error)?;
        }

        self.root.present().map_err(render_error)?;
        self.frames_written += 1;
        Ok(())
    }

    pub fn finish(self) -> PathBuf {
        log::info!(
            "Saved {}-frame animation to {}",
            self.frames_written,
            self.path.display()
        );
        self.path
    }
}

pub fn render_animation(
    animation: &TrajectoryAnimation,
    path: &Path,
) -> Result<PathBuf, ProjectileError> {
    let mut renderer = GifRenderer::create(path, animation.bounds())?;
    for index in 0..animation.frame_count() {
        renderer.render_frame(&animation.frame(index))?;
    }
    Ok(renderer.finish())
}

#[cfg(test)]
mod tests {
    use super::{
        ANIMATION_SIZE_PX, FRAME_INTERVAL_MS, GifRenderer, Playback, TrajectoryAnimation,
        render_animation,
    };
    use crate::core::ballistics::{LaunchParameters, generate};

    fn short_arc() -> TrajectoryAnimation {
        TrajectoryAnimation::new(vec![
            (0.0, 0.0),
            (1.0, 1.5),
            (2.0, 2.0),
            (3.0, 1.5),
            (4.0, 0.0),
        ])
    }

    fn gif_dimensions(bytes: &[u8]) -> (u32, u32) {
        let width = u16::from_le_bytes([bytes[6], bytes[7]]);
        let height = u16::from_le_bytes([bytes[8], bytes[9]]);
        (u32::from(width), u32::from(height))
    }

    fn animation() -> TrajectoryAnimation {
        TrajectoryAnimation::new(generate(LaunchParameters::new(20.0, 45.0)).positions())
    }

    #[test]
    fn one_frame_per_sample() {
        assert_eq!(animation().frame_count(), 100);
    }

    #[test]
    fn frame_reveals_points_before_marker() {
        let animation = animation();

        let first = animation.frame(0);
        assert!(first.trail.is_empty());
        assert_eq!(first.marker, Some((0.0, 0.0)));

        let tenth = animation.frame(10);
        assert_eq!(tenth.trail.len(), 10);
        assert_eq!(tenth.marker, Some(animation.frame(99).trail[10]));
    }

    #[test]
    fn frames_wrap_for_looping() {
        let animation = animation();
        assert_eq!(animation.frame(100).index, 0);
        assert_eq!(animation.frame(205).index, 5);
    }

    #[test]
    fn bounds_have_ten_percent_headroom() {
        let bounds = animation().bounds();
        assert!((bounds.x_max - 40.7747 * 1.1).abs() < 0.01);
        assert_eq!(bounds.x_min, 0.0);
    }

    #[test]
    fn backward_launch_bounds_cover_negative_x() {
        let bounds =
            TrajectoryAnimation::new(generate(LaunchParameters::new(20.0, 135.0)).positions())
                .bounds();
        assert!((bounds.x_min + 40.7747 * 1.1).abs() < 0.01);
        assert_eq!(bounds.x_max, 0.0);
    }

    #[test]
    fn gif_renderer_writes_one_frame_per_point() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("short.gif");
        let animation = short_arc();

        let mut renderer = GifRenderer::create(&path, animation.bounds()).expect("gif canvas");
        for index in 0..animation.frame_count() {
            renderer
                .render_frame(&animation.frame(index))
                .expect("frame should render");
        }
        assert_eq!(renderer.frames_written, animation.frame_count());

        let written = renderer.finish();
        let bytes = std::fs::read(&written).expect("read back");
        assert!(bytes.starts_with(b"GIF89a"));
        assert_eq!(gif_dimensions(&bytes), ANIMATION_SIZE_PX);
    }

    #[test]
    fn render_animation_writes_a_gif() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("arc.gif");

        let written = render_animation(&short_arc(), &path).expect("animation should render");

        assert_eq!(written, path);
        let bytes = std::fs::read(&path).expect("read back");
        assert!(bytes.starts_with(b"GIF89a"));
    }

    #[test]
    fn stationary_launch_still_renders() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("stationary.gif");
        let mut points = generate(LaunchParameters::new(0.0, 45.0)).positions();
        points.truncate(5);
        let animation = TrajectoryAnimation::new(points);
        assert_eq!(animation.bounds().x_max, 1.0);

        render_animation(&animation, &path).expect("animation should render");

        let bytes = std::fs::read(&path).expect("read back");
        assert!(bytes.starts_with(b"GIF89a"));
    }

    #[test]
    fn empty_animation_has_no_marker() {
        let animation = TrajectoryAnimation::new(Vec::new());
        assert_eq!(animation.frame_count(), 0);
        assert_eq!(animation.frame(3).marker, None);
    }

    #[test]
    fn playback_steps_on_the_frame_interval() {
        let mut playback = Playback::new();
        let interval_s = f64::from(FRAME_INTERVAL_MS) / 1000.0;

        assert_eq!(playback.advance(interval_s * 0.5, 100), 0);
        assert_eq!(playback.advance(interval_s * 0.6, 100), 1);
        assert_eq!(playback.advance(interval_s * 3.0, 100), 4);
    }

    #[test]
    fn paused_playback_holds_its_frame() {
        let mut playback = Playback::new();
        playback.advance(0.2, 100);
        let held = playback.frame();

        playback.toggle_pause();
        assert_eq!(playback.advance(1.0, 100), held);

        playback.restart();
        assert_eq!(playback.frame(), 0);
        assert!(!playback.is_paused());
    }

    #[test]
    fn playback_loops_back_to_start() {
        let mut playback = Playback::new();
        assert_eq!(playback.advance(0.05 * 101.0 + 0.001, 100), 1);
    }
}
