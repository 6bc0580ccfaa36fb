use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use linebar::{BarConfig, ProgressBar, WidthMode};

/// Sweeps a progress bar from 0% to 100%.
#[derive(Debug, Parser)]
struct Cli {
    /// Bar body width in columns
    #[arg(long, default_value_t = BarConfig::DEFAULT_WIDTH)]
    width: i32,
    /// Glyph for the completed part
    #[arg(long, default_value_t = '=')]
    complete: char,
    /// Glyph for the pending part
    #[arg(long, default_value_t = ' ')]
    incomplete: char,
    /// Ignore the terminal width
    #[arg(long)]
    fixed: bool,
    /// Delay between steps in milliseconds
    #[arg(long, default_value_t = 30)]
    delay: u64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match BarConfig::builder()
        .width(cli.width)
        .complete_char(cli.complete)
        .incomplete_char(cli.incomplete)
        .build()
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    };

    let mode = if cli.fixed {
        WidthMode::Fixed
    } else {
        WidthMode::Adaptive
    };
    let pb = ProgressBar::new(config).with_width_mode(mode);

    for i in 0..=100 {
        pb.draw(i as f64 / 100.0);
        thread::sleep(Duration::from_millis(cli.delay));
    }
    pb.success();
}
