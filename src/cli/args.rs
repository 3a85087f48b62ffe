//! CLI argument definitions using clap.
//!
//! Without a subcommand the tool rewrites one file:
//!
//! ```text
//! cn2i18n [INPUT] [OUTPUT]
//! cn2i18n -i src/app.jsx -o dist/app.jsx
//! ```
//!
//! `--input`/`--output` take precedence over the positional arguments.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use super::paths::{DEFAULT_INPUT, default_output_path, resolve_path};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub rewrite: RewriteArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .cn2i18nrc.json configuration file
    Init,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RewriteArgs {
    /// Source file to rewrite [default: index.js]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the result [default: <input>.cache.<ext>]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Source file, used when --input is not given
    #[arg(value_name = "INPUT")]
    pub input_positional: Option<PathBuf>,

    /// Output file, used when --output is not given
    #[arg(value_name = "OUTPUT")]
    pub output_positional: Option<PathBuf>,

    /// Name of the inserted lookup function (overrides config file)
    #[arg(long)]
    pub callee: Option<String>,

    /// Print the rewritten source to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Print the generated keys and their source texts as JSON
    #[arg(long)]
    pub keys: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Absolute input and output paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RewriteArgs {
    /// Resolve input and output paths against `cwd`.
    ///
    /// Flags win over positional arguments. Without an output, the input's file
    /// name gets `.<suffix>` inserted before its extension.
    pub fn resolve_paths(&self, cwd: &Path, output_suffix: &str) -> ResolvedPaths {
        let input = self
            .input
            .as_deref()
            .or(self.input_positional.as_deref())
            .unwrap_or(Path::new(DEFAULT_INPUT));
        let input = resolve_path(cwd, input);

        let output = match self.output.as_deref().or(self.output_positional.as_deref()) {
            Some(output) => resolve_path(cwd, output),
            None => default_output_path(&input, output_suffix),
        };

        ResolvedPaths { input, output }
    }
}
