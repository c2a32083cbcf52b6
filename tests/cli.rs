use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

fn cli() -> Command {
    Command::cargo_bin("responsive-runtime").expect("binary exists")
}

#[test]
fn desktop_viewport_reports_full_parallax() {
    cli()
        .args(["1440x900", "--scroll", "1000"])
        .assert()
        .success()
        .stdout(contains("Viewport 1440x900 classified as Desktop"))
        .stdout(contains(" - data-device: desktop"))
        .stdout(contains(" - hero image -mobile-optimized"))
        .stdout(contains(" - hero image -tablet-optimized"))
        .stdout(contains("Scroll to 1000px (down)"))
        .stdout(contains(" - background offset: 300px"))
        .stdout(contains(" - hero offset: 150px"))
        .stdout(contains(" - scrolled: true"));
}

#[test]
fn mobile_viewport_skips_parallax() {
    cli()
        .args(["375x667", "--scroll", "1000"])
        .assert()
        .success()
        .stdout(contains("classified as Mobile"))
        .stdout(contains(" - hero image +mobile-optimized"))
        .stdout(contains(" - badge +mobile-badge"))
        .stdout(contains(" - parallax: skipped on mobile"))
        .stdout(contains(" - scrolled: true"));
}

#[test]
fn undersized_viewport_carries_scale_factor() {
    cli()
        .arg("300x500")
        .assert()
        .success()
        .stdout(contains("classified as Mobile"))
        .stdout(contains(" - --mobile-scale: 0.9375"));
}

#[test]
fn shallow_scroll_stays_unscrolled() {
    cli()
        .args(["1440x900", "--scroll", "100"])
        .assert()
        .success()
        .stdout(contains(" - scrolled: false"));
}

#[test]
fn slow_frame_simulation_engages_low_performance() {
    cli()
        .args(["1440x900", "--frames", "20@100"])
        .assert()
        .success()
        .stdout(contains("Simulated 20 frames at 100ms intervals"))
        .stdout(contains(" - fps: 10"))
        .stdout(contains(" - low-performance: engaged"));
}

#[test]
fn smooth_frame_simulation_leaves_quality_alone() {
    cli()
        .args(["1440x900", "--frames", "120@10"])
        .assert()
        .success()
        .stdout(contains(" - fps: 100"))
        .stdout(contains(" - low-performance: off"));
}

#[test]
fn json_output_carries_breakpoint_flags() {
    cli()
        .args(["1024x768", "--json"])
        .assert()
        .success()
        .stdout(contains("\"type\": \"Tablet\""))
        .stdout(contains("\"isTablet\": true"))
        .stdout(contains("\"isDesktop\": false"));
}

#[test]
fn malformed_size_is_rejected() {
    cli()
        .arg("wide")
        .assert()
        .failure()
        .stderr(contains("expected WIDTHxHEIGHT"));
}

#[test]
fn missing_size_prints_usage() {
    cli()
        .assert()
        .failure()
        .stderr(contains("usage: responsive-runtime"));
}
