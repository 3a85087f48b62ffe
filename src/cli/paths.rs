use std::path::{Path, PathBuf};

/// Input used when none is given, relative to the working directory.
pub const DEFAULT_INPUT: &str = "index.js";

/// Resolve a relative path against `cwd`. Absolute paths are returned as is.
pub fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// `dir/name.ext` becomes `dir/name.<suffix>.ext`; `dir/name` becomes `dir/name.<suffix>`.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match input.extension() {
        Some(ext) => format!("{}.{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}.{}", stem, suffix),
    };

    input.with_file_name(file_name)
}

/// Path for display: relative to `cwd` when it is inside it.
pub fn display_path(cwd: &Path, path: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .display()
        .to_string()
}
