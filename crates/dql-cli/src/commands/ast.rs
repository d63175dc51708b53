//! Show the syntax tree of a DQL source.

use std::path::PathBuf;

use super::Fuel;
use super::source_loader::{SourceFile, load_sources};

pub struct AstArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: bool,
    pub fuel: Fuel,
}

/// Printed tree plus rendered diagnostics (empty when there are none).
pub struct AstOutput {
    pub tree: String,
    pub diagnostics: String,
}

pub fn run(args: AstArgs) {
    let sources = match load_sources(args.query_path.as_deref(), args.query_text.as_deref()) {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let show_headers = sources.len() > 1;
    for (i, source) in sources.iter().enumerate() {
        if show_headers {
            if i > 0 {
                println!();
            }
            println!("# {}", source.name);
        }

        match render(source, &args) {
            Ok(out) => {
                eprint!("{}", out.diagnostics);
                print!("{}", out.tree);
            }
            Err(e) => {
                eprintln!("error: {}: {}", source.name, e);
                std::process::exit(1);
            }
        }
    }
}

pub fn render(source: &SourceFile, args: &AstArgs) -> dql_lib::Result<AstOutput> {
    let query = args.fuel.parse(&source.text)?;

    let diagnostics = if query.diagnostics().is_empty() {
        String::new()
    } else {
        query
            .diagnostics()
            .filtered_printer(&source.text)
            .path(&source.name)
            .colored(args.color)
            .render()
            + "\n"
    };

    let tree = query
        .printer()
        .raw(args.raw)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();

    Ok(AstOutput { tree, diagnostics })
}
