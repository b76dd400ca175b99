use std::{cell::RefCell, path::PathBuf, rc::Rc};

use clap::{Parser, Subcommand};
use sketches_core::{
    AppConfig, AudioActivation, FramePlan, OrientationFrame, OrientationMonitor, Pointer, Result,
    SimulatedTrack, TouchTracker, ZoneAudioController,
};
use tracing_subscriber::EnvFilter;

/// Envelope samples consumed per rendered frame in the scripted demo.
const SAMPLES_PER_FRAME: usize = 64;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::MouseZones { config } => run_mouse_zones(config.as_deref()),
        Commands::Orientation => run_orientation(),
        Commands::Touch => run_touch(),
    }
}

/// Drives the dual-zone audio controller through a scripted session:
/// activate, hover the top half, cross the midline, pause, resume.
fn run_mouse_zones(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };
    tracing::info!(
        height = config.canvas.height,
        volume = config.audio.volume,
        "starting mouse zones demo"
    );

    let top = Rc::new(RefCell::new(SimulatedTrack::tone(4_096, 64.0)?));
    let bottom = Rc::new(RefCell::new(SimulatedTrack::tone(4_096, 48.0)?));
    let activation: Box<dyn AudioActivation> = Box::new(|| -> Result<()> {
        tracing::info!("audio context activated");
        Ok(())
    });

    let mut controller = ZoneAudioController::new(
        Rc::clone(&top),
        Rc::clone(&bottom),
        activation,
        &config.audio,
    )?;

    enum Step {
        Release { y: f32 },
        Frames { y: f32, count: usize },
    }

    let height = config.canvas.height;
    let script = [
        Step::Release { y: 100.0 },
        Step::Frames { y: 100.0, count: 30 },
        Step::Frames { y: 700.0, count: 30 },
        Step::Release { y: 700.0 },
        Step::Frames { y: 700.0, count: 10 },
        Step::Release { y: 700.0 },
        Step::Frames { y: 700.0, count: 30 },
    ];

    let mut frame_index = 0_usize;
    for step in script {
        match step {
            Step::Release { y } => {
                controller.on_release(Pointer::new(y, height))?;
                tracing::info!(
                    y,
                    started = controller.started(),
                    paused = controller.paused(),
                    zone = ?controller.active_zone(),
                    "release"
                );
            }
            Step::Frames { y, count } => {
                for _ in 0..count {
                    controller.on_pointer_update(Pointer::new(y, height))?;
                    top.borrow_mut().advance(SAMPLES_PER_FRAME);
                    bottom.borrow_mut().advance(SAMPLES_PER_FRAME);

                    let plan = FramePlan::compose(&controller, &config.viz);
                    tracing::debug!(frame = frame_index, plan = ?plan.instructions(), "frame");
                    frame_index += 1;
                }
                let plan = FramePlan::compose(&controller, &config.viz);
                tracing::info!(
                    frame = frame_index,
                    y,
                    zone = ?controller.active_zone(),
                    plan = ?plan.instructions(),
                    "pointer settled"
                );
            }
        }
    }

    Ok(())
}

/// Replays a short tilt session through the orientation monitor.
fn run_orientation() -> Result<()> {
    tracing::info!("starting orientation demo");

    let mut monitor = OrientationMonitor::new();
    report(&monitor, OrientationFrame::default());

    // The first tap answers the platform permission prompt.
    monitor.grant_permission();
    tracing::info!("sensor permission granted");

    let samples = [
        OrientationFrame::default(),
        OrientationFrame {
            rotation_x: -32.7,
            rotation_y: 3.1,
            rotation_z: 45.0,
        },
        OrientationFrame {
            rotation_x: 4.0,
            rotation_y: 26.5,
            rotation_z: 181.9,
        },
    ];
    for frame in samples {
        report(&monitor, frame);
    }

    Ok(())
}

fn report(monitor: &OrientationMonitor, frame: OrientationFrame) {
    for line in monitor.report(frame).lines() {
        tracing::info!("{line}");
    }
}

/// Replays a mixed touch/mouse session through the touch tracker.
fn run_touch() -> Result<()> {
    tracing::info!("starting touch demo");

    let mut tracker = TouchTracker::new();
    let session: [(&str, fn(&mut TouchTracker)); 5] = [
        ("touch started", TouchTracker::touch_started),
        ("touch ended", TouchTracker::touch_ended),
        ("mouse pressed", TouchTracker::mouse_pressed),
        ("mouse released", TouchTracker::mouse_released),
        ("touch started", TouchTracker::touch_started),
    ];

    for (name, event) in session {
        event(&mut tracker);
        let summary = tracker.summary();
        tracing::info!(
            event = name,
            label = summary.label(),
            touches = summary.touches,
            "touch state"
        );
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive sketch demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scripted dual-zone audio sketch.
    MouseZones {
        /// Optional JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the scripted device-orientation readout sketch.
    Orientation,
    /// Run the scripted touch-state sketch.
    Touch,
}
