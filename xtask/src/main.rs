//! Custom cargo commands for versicle.
//!
//! Usage:
//!   cargo xtask verify          - Full suite (features matrix + clippy + contracts)
//!   cargo xtask test            - Run all tests
//!   cargo xtask check           - Quick check (check + test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask fuzz <target>   - Run one fuzz target (needs cargo-fuzz)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["verse_range", "strip_markers", "search_queries", "request_json"];

/// Feature sets the crate must build and pass tests under.
const FEATURE_MATRIX: &[&[&str]] = &[
    &[],
    &["--no-default-features"],
    &["--no-default-features", "--features", "sqlite"],
    &["--no-default-features", "--features", "parallel"],
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref(), args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify            Tests under every feature set, clippy, contract wiring
  test              Run all Rust tests
  check             Quick check (cargo check + test + clippy)
  bench             Run benchmarks
  fuzz <target> [seconds]
                    Run a fuzz target (default 60s). Targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("versicle Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Checking contract wiring...");
    check_contracts_wired()?;
    println!("✓ Every contract is called from library code\n");

    println!("[2/3] Running tests across feature sets...");
    for features in FEATURE_MATRIX {
        let mut cmd = vec!["test", "--quiet"];
        cmd.extend_from_slice(features);
        println!("  cargo {}", cmd.join(" "));
        run_cargo(&cmd)?;
    }
    println!("✓ All feature sets pass\n");

    println!("[3/3] Running clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one cargo-fuzz target for a bounded time
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target; one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target '{}'; one of: {}", target, FUZZ_TARGETS.join(", "));
    }
    let seconds: u32 = seconds
        .unwrap_or("60")
        .parse()
        .context("fuzz duration must be a whole number of seconds")?;

    let max_time = format!("-max_total_time={}", seconds);
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", &max_time])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no CARGO_MANIFEST_DIR and no current dir")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every `pub fn check_*` in contracts.rs must be called somewhere else in
/// src/, or it guards nothing.
fn check_contracts_wired() -> Result<()> {
    let src = project_root()?.join("src");
    let contracts = std::fs::read_to_string(src.join("contracts.rs"))
        .context("Failed to read contracts.rs")?;

    let names: Vec<&str> = contracts
        .lines()
        .filter_map(|line| line.trim().strip_prefix("pub fn check_"))
        .filter_map(|rest| rest.split('(').next())
        .collect();

    if names.is_empty() {
        bail!("no contracts found in contracts.rs");
    }

    for name in names {
        let needle = format!("check_{}(", name);
        let output = Command::new("grep")
            .args(["-rl", &needle, "--include=*.rs", "."])
            .current_dir(&src)
            .output()
            .context("Failed to run grep")?;
        let callers = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|path| !path.ends_with("contracts.rs"))
            .count();
        if callers == 0 {
            bail!("contract check_{} is never called outside contracts.rs", name);
        }
    }

    Ok(())
}
