use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const TABLE_FILE: &str = "projectile_data.csv";
pub const PLOT_FILE: &str = "projectile_trajectory.png";
pub const ANIMATION_FILE: &str = "projectile_motion_animation.gif";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Nests outputs under `run-YYYYMMDD-HHMMSS` so repeated runs don't overwrite.
    pub fn timestamped<Tz: TimeZone>(base: &Path, at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self::new(base.join(format!("run-{}", at.format("%Y%m%d-%H%M%S"))))
    }

    pub fn table(&self) -> PathBuf {
        self.dir.join(TABLE_FILE)
    }

    pub fn plot(&self) -> PathBuf {
        self.dir.join(PLOT_FILE)
    }

    pub fn animation(&self) -> PathBuf {
        self.dir.join(ANIMATION_FILE)
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
