//! Headless configurator run.
//!
//! Drives the configurator with synthetic frames: visits the requested
//! views one after another, switches the crown layout halfway through, and
//! logs where the camera and crowns end up.
//!
//! ```text
//! RUST_LOG=info cargo run -p simulator -- --views face,knob,default --knob triple-crown
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use glam::Vec3;

use configurator::app::FrameScheduler;
use configurator::utils::FrameClock;
use configurator::watch::watch_hotspots;
use configurator::{
    CameraRig, ComponentKind, Configurator, ConfiguratorSettings, OrbitControls, Stage, ViewId,
    mount,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "simulator")]
#[command(about = "Headless watch configurator frame loop", long_about = None)]
struct Cli {
    /// Comma-separated views to visit in order
    #[arg(long, value_delimiter = ',', default_value = "face,knob,default")]
    views: Vec<String>,

    /// Knob option selected after the first view settles
    #[arg(long, default_value = "double-crown")]
    knob: String,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Optional JSON settings file
    #[arg(long)]
    settings: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => ConfiguratorSettings::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ConfiguratorSettings::default(),
    };
    let views = cli
        .views
        .iter()
        .map(|name| name.parse::<ViewId>())
        .collect::<configurator::Result<Vec<_>>>()?;

    let transition = Duration::from_secs_f64(settings.transition_ms / 1000.0);
    let configurator = Rc::new(RefCell::new(Configurator::new(settings)?));
    let stage = Rc::new(RefCell::new(Stage::new(Some(OrbitControls::new(
        Vec3::new(8.0, 8.0, 8.0),
        Vec3::ZERO,
    )))));

    let hotspots = watch_hotspots();
    let mut scheduler = FrameScheduler::new();
    let mut clock = FrameClock::new();
    mount(&configurator, &stage, &mut scheduler);

    let frame_delta = Duration::from_secs_f64(1.0 / f64::from(cli.fps.max(1)));
    let frames_per_view = (transition.as_secs_f64() / frame_delta.as_secs_f64()).ceil() as u32 + 1;

    for (index, view) in views.into_iter().enumerate() {
        let now_ms = clock.frame().time_ms;
        {
            let mut stage = stage.borrow_mut();
            let rig = stage.rig.as_mut().map(|rig| rig as &mut dyn CameraRig);
            let mut configurator = configurator.borrow_mut();
            let outcome = match hotspots.iter().find(|h| h.view() == view) {
                Some(hotspot) => {
                    log::info!("Clicking hotspot '{}'", hotspot.label);
                    configurator.click_hotspot(hotspot.kind, rig, now_ms)?
                }
                None => configurator.close_panel(rig, now_ms)?,
            };
            log::info!("Request '{view}': {outcome:?}");
        }

        for _ in 0..frames_per_view {
            let frame = clock.advance(frame_delta, Local::now().time());
            scheduler.dispatch(&frame);
        }

        if index == 0 {
            configurator
                .borrow_mut()
                .select_option(ComponentKind::Knob, &cli.knob)?;
        }

        let stage = stage.borrow();
        let configurator = configurator.borrow();
        if let Some(rig) = &stage.rig {
            log::info!(
                "Camera at {:?} looking at {:?}; panel {:?}; crowns {:?}",
                rig.position(),
                rig.target(),
                configurator.open_panel(),
                configurator.crowns().phases(),
            );
        }
    }

    let total = configurator.borrow().total_price();
    log::info!("Total price: €{total:.2}");

    configurator.borrow_mut().teardown(&mut scheduler);
    log::info!("Subscriptions left: {}", scheduler.len());
    Ok(())
}
