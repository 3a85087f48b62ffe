use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, Spanned, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// A parsed module together with what the printer needs to reproduce it.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub comments: SingleThreadedComments,
}

/// Pick parser syntax from the file extension.
///
/// `.ts` and `.tsx` parse as TypeScript (TSX for the latter). Everything else parses
/// as JavaScript with JSX enabled.
pub fn syntax_for_path(path: &Path) -> Syntax {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse source code into a module.
///
/// Recoverable syntax errors are treated as failures too, a file is only rewritten
/// when it parses cleanly.
pub fn parse_jsx_source(
    code: String,
    file_path: &Path,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.to_path_buf()).into(), code);

        let describe = |err: swc_ecma_parser::error::Error| {
            let loc = source_map.lookup_char_pos(err.span().lo);
            anyhow!(
                "Failed to parse {}:{}:{}: {}",
                file_path.display(),
                loc.line,
                loc.col_display + 1,
                err.kind().msg()
            )
        };

        let comments = SingleThreadedComments::default();
        let module = {
            let mut parser = Parser::new(
                syntax_for_path(file_path),
                StringInput::from(&*source_file),
                Some(&comments),
            );
            let module = parser.parse_module().map_err(describe)?;
            if let Some(err) = parser.take_errors().into_iter().next() {
                return Err(describe(err));
            }
            module
        };

        Ok(ParsedSource {
            module,
            source_map: source_map.clone(),
            comments,
        })
    })
}
