pub const EARTH_GRAVITY_MPS2: f64 = 9.81;
pub const SAMPLE_COUNT: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub initial_speed_mps: f64,
    pub launch_angle_deg: f64,
    pub gravity_mps2: f64,
}

impl LaunchParameters {
    pub fn new(initial_speed_mps: f64, launch_angle_deg: f64) -> Self {
        Self {
            initial_speed_mps,
            launch_angle_deg,
            gravity_mps2: EARTH_GRAVITY_MPS2,
        }
    }

    pub fn with_gravity(self, gravity_mps2: f64) -> Self {
        Self {
            gravity_mps2,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
}

/// Uniformly sampled flight from launch to return at launch height.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    samples: Vec<TrajectorySample>,
}

impl TimeSeries {
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn flight_time_s(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time_s)
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time_s).collect()
    }

    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x_m, s.y_m)).collect()
    }
}

pub fn velocity_components(params: LaunchParameters) -> (f64, f64) {
    let theta = params.launch_angle_deg.to_radians();
    let vx = params.initial_speed_mps * theta.cos();
    let vy = params.initial_speed_mps * theta.sin();
    (vx, vy)
}

pub fn position_at_time(params: LaunchParameters, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Time to return to launch height. Anything not strictly positive
/// (including NaN) collapses to 0 so the series degenerates to t = 0.
pub fn flight_time(params: LaunchParameters) -> f64 {
    let (_, vy) = velocity_components(params);
    let t_flight = (2.0 * vy) / params.gravity_mps2;
    if t_flight > 0.0 { t_flight } else { 0.0 }
}

/// `count` evenly spaced values over `[start, end]`, endpoint included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + (i as f64 * step)
                    }
                })
                .collect()
        }
    }
}

pub fn generate(params: LaunchParameters) -> TimeSeries {
    let t_flight = flight_time(params);
    if t_flight == 0.0 {
        log::debug!(
            "Degenerate launch (v0={}, angle={}): flight time clamped to 0",
            params.initial_speed_mps,
            params.launch_angle_deg
        );
    }

    let (vx, vy0) = velocity_components(params);
    let samples = linspace(0.0, t_flight, SAMPLE_COUNT)
        .into_iter()
        .map(|t| {
            let (x, y) = position_at_time(params, t);
            TrajectorySample {
                time_s: t,
                x_m: x,
                y_m: y,
                vx_mps: vx,
                vy_mps: vy0 - (params.gravity_mps2 * t),
            }
        })
        .collect();

    TimeSeries { samples }
}
