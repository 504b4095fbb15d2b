use clap::Parser;
use macroquad::prelude::*;
use projectile_motion::core::ballistics::{EARTH_GRAVITY_MPS2, LaunchParameters, generate};
use projectile_motion::error::{ProjectileError, parse_f64};
use projectile_motion::output::animation::{ANIMATION_TITLE, Playback, TrajectoryAnimation};
use projectile_motion::output::plot::{X_AXIS_LABEL, Y_AXIS_LABEL, plot_title};

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, RIGHT_MARGIN, TEXT_COLOR, TITLE_Y, TOP_MARGIN,
};
use crate::render::{PlotArea, draw_axis_labels, draw_frame, draw_grid};

/// Play back a projectile trajectory in a window.
#[derive(Debug, Parser)]
#[command(allow_negative_numbers = true)]
struct ViewerArgs {
    /// Initial speed in m/s
    speed: String,

    /// Launch angle in degrees
    angle: String,

    /// Gravitational acceleration in m/s^2
    #[arg(long, default_value_t = EARTH_GRAVITY_MPS2)]
    gravity: f64,
}

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: ANIMATION_TITLE.to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn launch_parameters(args: &ViewerArgs) -> Result<LaunchParameters, ProjectileError> {
    let speed = parse_f64(&args.speed, "velocity")?;
    let angle = parse_f64(&args.angle, "angle")?;
    Ok(LaunchParameters::new(speed, angle).with_gravity(args.gravity))
}

pub(crate) async fn run() {
    let args = ViewerArgs::parse();
    let params = match launch_parameters(&args) {
        Ok(params) => params,
        Err(err) => {
            log::debug!("{err}");
            println!("⚠️ Please enter valid numeric values for velocity and angle.");
            return;
        }
    };

    let title = plot_title(params);
    let animation = TrajectoryAnimation::new(generate(params).positions());
    let bounds = animation.bounds();
    let mut playback = Playback::new();
    log::info!("Playing {} frames for {title}", animation.frame_count());

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            playback.toggle_pause();
        }
        if is_key_pressed(KeyCode::R) {
            playback.restart();
        }

        let index = playback.advance(f64::from(get_frame_time()), animation.frame_count());
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_width() - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_height() - BOTTOM_MARGIN,
        };

        clear_background(BACKGROUND);
        draw_text(&title, LEFT_MARGIN, TITLE_Y, 30.0, TEXT_COLOR);
        let status = if playback.is_paused() {
            "Paused  [Space] resume  [R] restart  [Esc] quit"
        } else {
            "[Space] pause  [R] restart  [Esc] quit"
        };
        draw_text(status, LEFT_MARGIN, TITLE_Y + 28.0, 18.0, TEXT_COLOR);

        draw_grid(area);
        draw_axis_labels(area, bounds, X_AXIS_LABEL, Y_AXIS_LABEL);
        draw_frame(&animation.frame(index), area, bounds);

        next_frame().await;
    }
}
