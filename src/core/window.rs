pub const ANIMATION_HEADROOM: f64 = 1.1;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_RATIO: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    pub fn x_range(&self) -> std::ops::Range<f64> {
        self.x_min..self.x_max
    }

    pub fn y_range(&self) -> std::ops::Range<f64> {
        self.y_min..self.y_max
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

fn min_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}

fn drawable_upper(bound: f64) -> f64 {
    if bound.is_finite() && bound > MIN_SPAN_RATIO {
        bound
    } else {
        1.0
    }
}

/// Animation axes start at the origin and stop 10% past the largest coordinate.
/// A flight that only travels backwards (angle past 90°) mirrors the x axis instead.
pub fn animation_bounds(points: &[(f64, f64)]) -> AxisBounds {
    let max_x = max_of(points.iter().map(|p| p.0));
    let min_x = min_of(points.iter().map(|p| p.0));
    let max_y = max_of(points.iter().map(|p| p.1));

    let (x_min, x_max) = if max_x <= MIN_SPAN_RATIO && min_x < -MIN_SPAN_RATIO {
        (min_x * ANIMATION_HEADROOM, 0.0)
    } else {
        (0.0, drawable_upper(max_x * ANIMATION_HEADROOM))
    };

    AxisBounds {
        x_min,
        x_max,
        y_min: 0.0,
        y_max: drawable_upper(max_y * ANIMATION_HEADROOM),
    }
}

fn padded_span(min: f64, max: f64, ratio: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span <= MIN_SPAN_RATIO * max.abs().max(1.0) {
        return (min - 0.5, min + 0.5);
    }
    let pad = span * ratio;
    (min - pad, max + pad)
}

/// Static plot axes cover the full data extent with a small margin.
pub fn plot_bounds(points: &[(f64, f64)]) -> AxisBounds {
    let (x_min, x_max) = padded_span(
        min_of(points.iter().map(|p| p.0)),
        max_of(points.iter().map(|p| p.0)),
        X_PADDING_RATIO,
    );
    let (y_min, y_max) = padded_span(
        min_of(points.iter().map(|p| p.1)),
        max_of(points.iter().map(|p| p.1)),
        Y_PADDING_RATIO,
    );

    AxisBounds {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}
