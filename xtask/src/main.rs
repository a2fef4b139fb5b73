//! Build automation tasks for the segment-kit project.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

const DEMOS: [&str; 2] = ["blink_two", "showcase"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for segment-kit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, firmware lib and demos for both boards, docs
    CheckAll,
    /// Run the host test suite
    Test,
    /// Build the library for a board
    Build {
        #[arg(long, default_value = "pico1")]
        board: Board,
        /// Enable defmt tracing of every display operation
        #[arg(long)]
        trace: bool,
    },
    /// Build a demo
    Demo {
        /// Demo name (blink_two or showcase)
        name: String,
        #[arg(long, default_value = "pico1")]
        board: Board,
        #[arg(long)]
        trace: bool,
    },
    /// Build UF2 firmware file for flashing to Pico
    Uf2 {
        /// Demo name (blink_two or showcase)
        name: String,
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    Pico1,
    Pico2,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Pico1 => write!(f, "pico1"),
            Board::Pico2 => write!(f, "pico2"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Pico1 => "thumbv6m-none-eabi",
            Board::Pico2 => "thumbv8m.main-none-eabihf",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Test => run_host_tests(),
        Commands::Build { board, trace } => build_lib(board, trace),
        Commands::Demo { name, board, trace } => build_demo(&name, board, trace),
        Commands::Uf2 { name, board } => build_uf2(&name, board),
    }
}

fn check_all() -> ExitCode {
    println!("{}", "==> Running host tests...".cyan());
    if run_host_tests() != ExitCode::SUCCESS {
        return ExitCode::FAILURE;
    }

    for board in [Board::Pico1, Board::Pico2] {
        println!("\n{}", format!("==> Building library ({board})...").cyan());
        if build_lib(board, true) != ExitCode::SUCCESS {
            return ExitCode::FAILURE;
        }

        println!("\n{}", format!("==> Building demos ({board})...").cyan());
        for demo in DEMOS {
            println!("  {}", format!("- {demo}").bright_black());
            if build_demo(demo, board, false) != ExitCode::SUCCESS {
                return ExitCode::FAILURE;
            }
        }
    }

    println!("\n{}", "==> Building documentation...".cyan());
    let workspace_root = workspace_root();
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--target",
        Board::Pico2.target(),
        "--no-deps",
        "--features",
        &build_features(Board::Pico2, false),
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn run_host_tests() -> ExitCode {
    let workspace_root = workspace_root();
    let mut test_cmd = Command::new("cargo");
    test_cmd.current_dir(&workspace_root).arg("test");

    match host_target() {
        Some(target) => {
            println!(
                "  {}",
                format!("Using host target: {target}").bright_black()
            );
            test_cmd.arg("--target").arg(target);
        }
        None => {
            println!(
                "{}",
                "  Unable to detect host target; relying on cargo default.".bright_black()
            );
        }
    }

    test_cmd.args(["--no-default-features", "--features", "host"]);

    if run_command(&mut test_cmd) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_lib(board: Board, trace: bool) -> ExitCode {
    let workspace_root = workspace_root();
    let features = build_features(board, trace);
    println!(
        "{}",
        format!("Building library with features: {features}").cyan()
    );

    if run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--target",
        board.target(),
        "--features",
        &features,
        "--no-default-features",
    ])) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_demo(name: &str, board: Board, trace: bool) -> ExitCode {
    let workspace_root = workspace_root();
    let features = build_features(board, trace);
    println!(
        "{}",
        format!("Building demo '{name}' with features: {features}").cyan()
    );

    if run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--example",
        name,
        "--target",
        board.target(),
        "--features",
        &features,
        "--no-default-features",
    ])) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_uf2(name: &str, board: Board) -> ExitCode {
    let workspace_root = workspace_root();
    let target = board.target();
    let features = build_features(board, false);

    println!(
        "{}",
        format!("Building UF2 for demo '{name}' ({board})").cyan()
    );
    println!("  Features: {}", features.bright_black());
    println!("  Target: {}", target.bright_black());

    // Build in release mode for UF2
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--example",
        name,
        "--release",
        "--target",
        target,
        "--features",
        &features,
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    let elf_path = format!("target/{target}/release/examples/{name}");
    let uf2_path = format!("{name}.uf2");

    println!("\n{}", "Converting to UF2 format...".cyan());

    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(&workspace_root)
            .args([&elf_path, &uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        ExitCode::FAILURE
    }
}

fn build_features(board: Board, trace: bool) -> String {
    let mut features = vec![board.to_string(), "arm".to_string(), "defmt".to_string()];
    if trace {
        features.push("display-trace".to_string());
    }
    features.join(",")
}

fn workspace_root() -> std::path::PathBuf {
    // `cargo xtask` runs from the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if let Some(host) = line.strip_prefix("host: ") {
            return Some(host.trim().to_string());
        }
    }
    None
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
