use anyhow::Result;
use std::time::{Duration, Instant};
use tiltstick_config::AppConfig;
use tiltstick_core::{
    parse_command, AxisMapper, AxisSample, AxisSink, Command, OrientationSource, Tracker,
};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

mod sim;

/// Axis sink that logs what a device transport would send.
///
/// Real gamepad/HID transports implement [`AxisSink`] outside this repo;
/// a sink whose device is not ready just drops the sample.
struct LogSink;

impl AxisSink for LogSink {
    fn emit(&mut self, sample: AxisSample) {
        debug!(x = sample.x, y = sample.y, z = sample.z, "Axis output");
    }
}

/// Read control lines from stdin and forward recognized commands.
async fn command_reader(tx: mpsc::UnboundedSender<Command>) {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match parse_command(&line) {
            Some(cmd) => {
                if tx.send(cmd).is_err() {
                    break;
                }
            }
            None => {
                if !line.trim().is_empty() {
                    warn!(line = line.trim(), "Ignoring unknown command");
                }
            }
        }
    }
}

/// Fixed-rate driver: poll the source, run the pipeline, emit, and handle
/// control commands, all on one task so the tracker has a single owner.
async fn run_loop(
    mut source: impl OrientationSource,
    mut sink: impl AxisSink,
    mut tracker: Tracker,
    mut command_rx: mpsc::UnboundedReceiver<Command>,
    config: &AppConfig,
) {
    let tick = Duration::from_secs_f64(1.0 / config.update_rate_hz.max(1) as f64);
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let report_gap = Duration::from_millis(config.diagnostics.interval_ms);
    let mut last_report = Instant::now() - report_gap;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                // A dry poll or a degenerate sample both mean this tick
                // simply emits nothing.
                let Some(sample) = source.try_get_orientation() else { continue };
                let Some(axes) = tracker.process(sample.quaternion) else { continue };
                sink.emit(axes);

                if config.diagnostics.enabled && last_report.elapsed() >= report_gap {
                    if let Some(angles) = tracker.centered_angles(sample.quaternion) {
                        info!(
                            yaw = angles.yaw,
                            pitch = angles.pitch,
                            roll = angles.roll,
                            x = axes.x,
                            y = axes.y,
                            z = axes.z,
                            accuracy = %sample.accuracy,
                            "Status"
                        );
                        last_report = Instant::now();
                    }
                }
            }
            Some(cmd) = command_rx.recv() => {
                match cmd {
                    Command::Recenter => {
                        info!("Recenter requested");
                        if let Err(e) = tracker.recenter(&mut source).await {
                            warn!(?e, "Recenter failed, keeping previous offset");
                        }
                        // Requests that queued while we were sampling are
                        // satisfied by the recenter that just finished.
                        while command_rx.try_recv().is_ok() {}
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tiltstick=info,tiltstick_core=info".into()),
        )
        .init();

    info!("tiltstick orientation bridge starting");

    let config = tiltstick_config::load_config().unwrap_or_else(|e| {
        warn!(?e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    let mapper = AxisMapper::new(config.axis.out_min, config.axis.out_max);
    let mut tracker = Tracker::new(
        mapper,
        config.recenter.samples,
        Duration::from_millis(config.recenter.interval_ms),
    );

    // Sensor bring-up is outside this program; the simulated source stands
    // in so the pipeline runs end to end without hardware.
    let mut source = sim::SimulatedSensor::new();

    // Establish the zero reference before the first emitted sample.
    if let Err(e) = tracker.recenter(&mut source).await {
        warn!(?e, "Startup recenter failed, starting from a zero offset");
    }

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    tokio::spawn(command_reader(command_tx));
    info!("Listening for 'reset' / 'resetview' on stdin");

    run_loop(source, LogSink, tracker, command_rx, &config).await;
    Ok(())
}
