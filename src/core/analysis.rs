use crate::core::ballistics::TimeSeries;

/// One exported row: the raw sample plus its derived speed and acceleration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisRecord {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub speed_mps: f64,
    pub acceleration_mps2: f64,
}

impl AnalysisRecord {
    pub const COLUMNS: [&'static str; 7] = [
        "Time",
        "X_position",
        "Y_position",
        "X_velocity",
        "Y_velocity",
        "Velocity",
        "Acceleration",
    ];

    pub fn values(&self) -> [f64; 7] {
        [
            self.time_s,
            self.x_m,
            self.y_m,
            self.vx_mps,
            self.vy_mps,
            self.speed_mps,
            self.acceleration_mps2,
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SummaryStatistics {
    pub max_height_m: f64,
    pub range_m: f64,
    pub flight_time_s: f64,
    pub impact_speed_mps: f64,
}

impl SummaryStatistics {
    pub fn labeled(&self) -> [(&'static str, f64); 4] {
        [
            ("Max Height", self.max_height_m),
            ("Range", self.range_m),
            ("Flight Time", self.flight_time_s),
            ("Impact Velocity", self.impact_speed_mps),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub records: Vec<AnalysisRecord>,
    pub summary: SummaryStatistics,
}

/// Derivative of `values` with respect to `coords`: central differences inside,
/// one-sided at the ends. A zero coordinate step yields 0 instead of dividing.
pub fn gradient(values: &[f64], coords: &[f64]) -> Vec<f64> {
    let n = values.len().min(coords.len());
    if n < 2 {
        return vec![0.0; n];
    }

    let slope = |hi: usize, lo: usize| {
        let dt = coords[hi] - coords[lo];
        if dt == 0.0 {
            0.0
        } else {
            (values[hi] - values[lo]) / dt
        }
    };

    (0..n)
        .map(|i| {
            if i == 0 {
                slope(1, 0)
            } else if i == n - 1 {
                slope(n - 1, n - 2)
            } else {
                slope(i + 1, i - 1)
            }
        })
        .collect()
}

pub fn analyze(series: &TimeSeries) -> Analysis {
    let samples = series.samples();
    let times = series.times();
    let speeds: Vec<f64> = samples
        .iter()
        .map(|s| s.vx_mps.hypot(s.vy_mps))
        .collect();
    let accelerations = gradient(&speeds, &times);

    let records: Vec<AnalysisRecord> = samples
        .iter()
        .zip(speeds.iter().zip(accelerations.iter()))
        .map(|(s, (&speed, &accel))| AnalysisRecord {
            time_s: s.time_s,
            x_m: s.x_m,
            y_m: s.y_m,
            vx_mps: s.vx_mps,
            vy_mps: s.vy_mps,
            speed_mps: speed,
            acceleration_mps2: accel,
        })
        .collect();

    let summary = match (records.first(), records.last()) {
        (Some(first), Some(last)) => SummaryStatistics {
            // All-NaN heights report NaN, not the fold seed.
            max_height_m: records[1..]
                .iter()
                .fold(first.y_m, |acc, r| acc.max(r.y_m)),
            range_m: last.x_m,
            flight_time_s: last.time_s,
            impact_speed_mps: last.speed_mps,
        },
        _ => SummaryStatistics::default(),
    };

    log::debug!(
        "Analyzed {} samples: max height {:.4} m, range {:.4} m",
        records.len(),
        summary.max_height_m,
        summary.range_m
    );

    Analysis { records, summary }
}
