use std::thread;
use std::time::Duration;

use clap::Parser;
use linebar::{BarConfig, Messages, ProgressBar};

/// Pretends to process a list of files, failing on the one named by `--fail-on`.
#[derive(Debug, Parser)]
struct Cli {
    /// Files to process
    #[arg(default_values_t = vec![
        "file1.txt".to_string(),
        "file2.txt".to_string(),
        "file3.txt".to_string(),
        "file4.txt".to_string(),
        "file5.txt".to_string(),
    ])]
    files: Vec<String>,
    /// Name of the file whose processing fails
    #[arg(long)]
    fail_on: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("error processing {file}: failed to read file")]
struct ProcessError {
    file: String,
}

fn process_file(file: &str, fail_on: Option<&str>) -> Result<(), ProcessError> {
    thread::sleep(Duration::from_millis(300));
    if fail_on == Some(file) {
        return Err(ProcessError {
            file: file.to_string(),
        });
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = BarConfig::builder()
        .messages(Messages::new("could not process all files", "all files processed"))
        .build()
        .expect("default glyphs are valid");
    let pb = ProgressBar::new(config);

    pb.draw(0.0);
    for (i, file) in cli.files.iter().enumerate() {
        if let Err(err) = process_file(file, cli.fail_on.as_deref()) {
            pb.fail_with_error(&err);
            return;
        }
        pb.draw((i + 1) as f64 / cli.files.len() as f64);
    }
    pb.success();
}
