//! End-to-end tests for the ascii-render binary.
//!
//! Each test writes a small PNG fixture into a temporary directory, runs the
//! built binary, and checks exit code, stdout, and stderr.

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const RAMP: &str = " .:-=+*#%@";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn white_rgb(&self) -> PathBuf {
        let path = self.path("white.png");
        RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    /// Runs the binary with an isolated (missing) config file.
    fn run(&self, args: &[&str]) -> Output {
        let config = self.path("no-config.toml");
        Command::new(env!("CARGO_BIN_EXE_ascii-render"))
            .args(args)
            .arg("--config")
            .arg(&config)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn s(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_white_image_lightest_glyph() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let out = fx.run(&[s(&input), "-w", "2", "-a", "1.0", "-c", RAMP]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "@@\n@@\n");
}

#[test]
fn test_white_image_inverted() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let out = fx.run(&[s(&input), "-w", "2", "-a", "1.0", "-c", RAMP, "--invert"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "  \n  \n");
}

#[test]
fn test_default_charset_on_black() {
    let fx = Fixture::new();
    let input = fx.path("black.png");
    GrayImage::from_pixel(4, 4, Luma([0])).save(&input).unwrap();
    let out = fx.run(&[s(&input), "-w", "4"]);
    assert!(out.status.success());
    // 4 * (4/4) / 0.5 = 8 rows
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "@@@@\n".repeat(8));
}

#[test]
fn test_transparent_pixels_render_as_black() {
    let fx = Fixture::new();
    let input = fx.path("clear.png");
    RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]))
        .save(&input)
        .unwrap();
    let out = fx.run(&[s(&input), "-w", "2", "-a", "1", "-c", RAMP]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "  \n  \n");
}

#[test]
fn test_empty_charset_fails_without_output() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let output = fx.path("out.txt");
    let out = fx.run(&[s(&input), "-c", "", "-o", s(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(!output.exists());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Charset must not be empty"), "{}", stderr);
}

#[test]
fn test_missing_input_names_path() {
    let fx = Fixture::new();
    let input = fx.path("does-not-exist.png");
    let out = fx.run(&[s(&input), "-w", "10"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("does-not-exist.png"), "{}", stderr);
}

#[test]
fn test_corrupt_input_fails() {
    let fx = Fixture::new();
    let input = fx.path("corrupt.png");
    std::fs::write(&input, b"\x89PNG\r\n\x1a\nnot really a png").unwrap();
    let out = fx.run(&[s(&input), "-w", "10"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr).unwrap().contains("corrupt.png"));
}

#[test]
fn test_failed_load_does_not_touch_output() {
    let fx = Fixture::new();
    let output = fx.path("keep.txt");
    std::fs::write(&output, "keep me\n").unwrap();
    let out = fx.run(&[s(&fx.path("missing.png")), "-o", s(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep me\n");
}

#[test]
fn test_output_file_written_and_truncated() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let output = fx.path("art.txt");
    std::fs::write(&output, "stale content from a previous run\n").unwrap();

    let out = fx.run(&[s(&input), "-w", "3", "-a", "1", "-c", RAMP, "-o", s(&output)]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "@@@\n@@@\n@@@\n");
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Wrote ASCII art to:"), "{}", stderr);
}

#[test]
fn test_output_default_width_for_files() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let output = fx.path("wide.txt");
    let out = fx.run(&[s(&input), "-a", "1", "-o", s(&output)]);
    assert!(out.status.success());
    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count(), 120);
    assert!(content.lines().all(|l| l.chars().count() == 120));
}

#[test]
fn test_unwritable_output_fails() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let output = fx.path("no-such-dir").join("out.txt");
    let out = fx.run(&[s(&input), "-o", s(&output)]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Failed to open output file"), "{}", stderr);
    assert!(stderr.contains("out.txt"), "{}", stderr);
}

#[test]
fn test_help_exits_zero() {
    let fx = Fixture::new();
    for flag in ["-h", "--help"] {
        let out = fx.run(&[flag]);
        assert_eq!(out.status.code(), Some(0));
        let stdout = String::from_utf8(out.stdout).unwrap();
        assert!(stdout.contains("--width"), "{}", stdout);
        assert!(stdout.contains("--charset"), "{}", stdout);
    }
}

#[test]
fn test_no_arguments_exits_one() {
    let out = Command::new(env!("CARGO_BIN_EXE_ascii-render"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
}

#[test]
fn test_missing_flag_value_exits_one() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    // The config flag appended by `run` would be taken as the width value,
    // so invoke directly.
    let out = Command::new(env!("CARGO_BIN_EXE_ascii-render"))
        .arg(&input)
        .arg("-w")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_config_file_supplies_defaults() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let config = fx.path("config.toml");
    std::fs::write(
        &config,
        "[render]\nwidth = 2\naspect = 1.0\ncharset = \"ab\"\ninvert = true\n",
    )
    .unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_ascii-render"))
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "aa\naa\n");
}

#[test]
fn test_malformed_config_exits_one() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let config = fx.path("config.toml");
    std::fs::write(&config, "[render\nwidth = ").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_ascii-render"))
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr).unwrap().contains("config.toml"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let fx = Fixture::new();
    let input = fx.path("gradient.png");
    let img = RgbImage::from_fn(37, 23, |x, y| {
        let v = ((x * 7 + y * 3) % 256) as u8;
        Rgb([v, v / 2, 255 - v])
    });
    img.save(&input).unwrap();

    let args = [s(&input), "-w", "29", "-a", "0.45", "-c", "MWNXK0Okxol:,. "];
    let first = fx.run(&args);
    let second = fx.run(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(!first.stdout.is_empty());
}

#[test]
fn test_oversized_grid_exits_one() {
    let fx = Fixture::new();
    let input = fx.white_rgb();
    let out = fx.run(&[s(&input), "-w", "100000", "-a", "0.05"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("exceeds the limit"), "{}", stderr);
}
