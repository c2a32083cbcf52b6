use std::env;

use anyhow::Result;
use thiserror::Error;

use responsive_runtime::{
    DeviceClass, FpsSampler, LayoutPlan, QualityState, ResponsiveTracker, ScrollFrame,
};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

fn run() -> Result<()> {
    let options = CliOptions::parse()?;
    let (mut tracker, plan) = ResponsiveTracker::new(options.width, options.height);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&tracker.breakpoint())?);
    } else {
        print_layout(&tracker, &plan);
    }

    if let Some(top) = options.scroll {
        let frame = tracker.scroll(top);
        print_scroll(&frame, tracker.state().device);
    }

    if let Some((count, interval_ms)) = options.frames {
        simulate_frames(count, interval_ms);
    }

    Ok(())
}

fn print_layout(tracker: &ResponsiveTracker, plan: &LayoutPlan) {
    let state = tracker.state();
    println!(
        "Viewport {}x{} classified as {}",
        state.width,
        state.height,
        state.device.label()
    );
    println!(" - data-device: {}", plan.device_attr);
    for op in &plan.class_ops {
        println!(
            " - {} {}{}",
            op.region.as_str(),
            if op.add { '+' } else { '-' },
            op.class
        );
    }
    if let Some(scale) = plan.mobile_scale {
        println!(" - --mobile-scale: {scale}");
    }
    println!(" - --vh: {}px", plan.viewport_unit_px);
    if let Some(duration) = plan.animation_duration {
        println!(" - animation-duration on breakpoint change: {duration}");
    }
}

fn print_scroll(frame: &ScrollFrame, device: DeviceClass) {
    println!("Scroll to {}px ({})", frame.top, frame.direction.as_str());
    match (frame.background_offset, frame.hero_offset) {
        (Some(background), Some(hero)) => {
            println!(" - background offset: {background}px");
            println!(" - hero offset: {hero}px");
        }
        _ => println!(" - parallax: skipped on {}", device.as_str()),
    }
    println!(" - scrolled: {}", frame.scrolled);
}

/// Replays evenly spaced frame callbacks through the sampler, the way the
/// browser frame loop would feed it.
fn simulate_frames(count: u32, interval_ms: f64) {
    let mut sampler = FpsSampler::new(0.0);
    let mut quality = QualityState::new();
    for frame in 1..=count {
        if let Some(reading) = sampler.frame(f64::from(frame) * interval_ms) {
            quality.observe(reading);
        }
    }
    println!("Simulated {count} frames at {interval_ms}ms intervals");
    println!(" - fps: {}", sampler.fps());
    println!(
        " - low-performance: {}",
        if quality.low_performance() {
            "engaged"
        } else {
            "off"
        }
    );
}

#[derive(Debug, Error)]
enum CliError {
    #[error(
        "usage: responsive-runtime <WIDTH>x<HEIGHT> [--scroll PX] [--frames COUNT@MS] [--json]"
    )]
    Usage,
    #[error("invalid viewport size {0:?}: expected WIDTHxHEIGHT")]
    InvalidSize(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

struct CliOptions {
    width: f64,
    height: f64,
    scroll: Option<f64>,
    frames: Option<(u32, f64)>,
    json: bool,
}

impl CliOptions {
    fn parse() -> Result<Self, CliError> {
        let mut args = env::args().skip(1);
        let Some(size) = args.next() else {
            return Err(CliError::Usage);
        };
        let (width, height) = parse_size(&size)?;

        let mut scroll = None;
        let mut frames = None;
        let mut json = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scroll" => {
                    let value = args.next().ok_or(CliError::MissingValue("--scroll"))?;
                    scroll = Some(value.parse().map_err(|_| CliError::InvalidValue {
                        flag: "--scroll",
                        value,
                    })?);
                }
                "--frames" => {
                    let value = args.next().ok_or(CliError::MissingValue("--frames"))?;
                    frames = Some(parse_frames(&value)?);
                }
                "--json" => json = true,
                other => return Err(CliError::UnknownArgument(other.to_string())),
            }
        }

        Ok(Self {
            width,
            height,
            scroll,
            frames,
            json,
        })
    }
}

fn parse_size(value: &str) -> Result<(f64, f64), CliError> {
    let invalid = || CliError::InvalidSize(value.to_string());
    let (width, height) = value.split_once('x').ok_or_else(invalid)?;
    let width = width.parse().map_err(|_| invalid())?;
    let height = height.parse().map_err(|_| invalid())?;
    Ok((width, height))
}

fn parse_frames(value: &str) -> Result<(u32, f64), CliError> {
    let invalid = || CliError::InvalidValue {
        flag: "--frames",
        value: value.to_string(),
    };
    let (count, interval) = value.split_once('@').ok_or_else(invalid)?;
    let count = count.parse().map_err(|_| invalid())?;
    let interval = interval.parse().map_err(|_| invalid())?;
    Ok((count, interval))
}
