use anyhow::{Context, Result};
use swc_ecma_ast::EsVersion;
use swc_ecma_codegen::{Config, Emitter, text_writer::JsWriter};

use super::parsers::ParsedSource;

/// Print a parsed (and possibly rewritten) module back to source text.
///
/// Comments collected during parsing are re-emitted. Non-ASCII text is kept as is.
pub fn print_module(parsed: &ParsedSource) -> Result<String> {
    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(parsed.source_map.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: Config::default()
                .with_target(EsVersion::latest())
                .with_ascii_only(false),
            cm: parsed.source_map.clone(),
            comments: Some(&parsed.comments),
            wr: writer,
        };
        emitter
            .emit_module(&parsed.module)
            .context("Failed to print module")?;
    }

    String::from_utf8(buf).context("Printed module is not valid UTF-8")
}
