//! Headless walkthrough of a multi-thumb slider.
//!
//! Replays a scripted pointer session against a [`SliderModel`] and logs
//! what a host would redraw after each gesture. Run with
//! `RUST_LOG=tessera_multi_slider=trace` to see every model operation.

mod session;

use tessera_multi_slider::{ConfigError, SliderConfig, SliderModel, TrackBounds};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::session::{Gesture, Session};

/// Layout of the demo control: 128 px wide with 28 px thumbs.
const TRACK: TrackBounds = TrackBounds::new(14.0, 114.0);

pub fn desktop_main() {
    init_tracing_desktop();
    run().unwrap_or_else(|err| error!("Demo failed to run: {err}"));
}

fn run() -> Result<(), ConfigError> {
    let config = SliderConfig::default()
        .snaps(vec![1.0, 0.75, 0.5, 0.25, 0.0])
        .can_thumbs_cross(false)
        .max_thumbs(3)
        .is_continuous(true);
    config.validate()?;

    let mut slider = SliderModel::with_config(config);
    slider.set_track(TRACK);
    slider.add_thumb_with_id("low", 0.2, "#3478f6");
    slider.add_thumb_with_id("high", 0.85, "#f63478");
    slider.add_thumb(0.6, "#34f678");
    if slider.add_thumb(0.1, "#000000").is_none() {
        info!("fourth thumb rejected, slider holds {}", slider.len());
    }

    let mut session = Session::new(slider);
    session.play(&[
        Gesture::Press { x: 99.0, y: 16.0 },
        Gesture::Move { x: 70.0 },
        Gesture::Move { x: 20.0 },
        Gesture::Release,
        Gesture::Press { x: 34.0, y: 10.0 },
        Gesture::Move { x: 60.0 },
        Gesture::Cancel,
        Gesture::Press { x: 66.0, y: 40.0 },
        Gesture::Release,
    ]);
    session.report();
    Ok(())
}

fn init_tracing_desktop() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("off,example=info,tessera_multi_slider=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}
