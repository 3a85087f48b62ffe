//! Dispatch parsed arguments to the rewrite or init command.
//!
//! # Returns
//! - `Ok(ExitStatus::Success)` when the file was rewritten
//! - `Ok(ExitStatus::Failure)` when the input could not be parsed
//! - `Err` on config or I/O errors

use std::{
    env, fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};

use super::{
    args::{Arguments, Command, RewriteArgs},
    exit_status::ExitStatus,
    paths::display_path,
    report,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::core::{FileOutcome, rewrite_file};

pub fn run(Arguments { command, rewrite }: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;

    match command {
        Some(Command::Init) => {
            init(&cwd)?;
            report::print_init_to(&mut io::stdout().lock());
            Ok(ExitStatus::Success)
        }
        None => run_rewrite(&rewrite, &cwd),
    }
}

fn init(cwd: &Path) -> Result<()> {
    let config_path = cwd.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    Ok(())
}

fn run_rewrite(args: &RewriteArgs, cwd: &Path) -> Result<ExitStatus> {
    let loaded = load_config(cwd)?;
    let mut config = loaded.config;
    if let Some(callee) = &args.callee {
        config.callee = callee.clone();
        config.validate()?;
    }
    let settings = config.rewrite_settings()?;
    let paths = args.resolve_paths(cwd, &config.output_suffix);

    // stdout is reserved for machine-readable output when --stdout or --keys is set
    let mut status: Box<dyn Write> = if args.stdout || args.keys {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    if args.verbose
        && let Some(path) = &loaded.path
    {
        report::print_config_path_to(&mut status, &display_path(cwd, path));
    }

    let output = (!args.stdout).then_some(paths.output.as_path());
    let input_display = display_path(cwd, &paths.input);

    match rewrite_file(&paths.input, output, &settings)? {
        FileOutcome::Skipped { reason } => {
            report::print_skipped_to(&mut io::stderr().lock(), &input_display, &reason);
            Ok(ExitStatus::Failure)
        }
        FileOutcome::Rewritten { output, source } => {
            if args.verbose {
                report::print_replacements_to(
                    &mut status,
                    &input_display,
                    &source.replacements,
                );
            }
            report::print_collisions_to(&mut io::stderr().lock(), &source.replacements);

            let output_display = output.as_deref().map(|path| display_path(cwd, path));
            report::print_rewritten_to(
                &mut status,
                &input_display,
                output_display.as_deref(),
                source.replacements.len(),
            );

            if args.stdout {
                write!(io::stdout().lock(), "{}", source.code)
                    .context("Failed to write to stdout")?;
            }
            if args.keys {
                report::print_key_catalog_to(&mut io::stdout().lock(), &source.replacements)?;
            }
            Ok(ExitStatus::Success)
        }
    }
}
