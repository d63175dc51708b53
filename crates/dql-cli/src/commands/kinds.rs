//! Print the grammar descriptor's node kinds.

use dql_lib::language;

pub struct KindsArgs {
    pub json: bool,
}

pub fn run(args: KindsArgs) {
    match render(args.json) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// One kind per line: named kinds bare, anonymous kinds quoted.
pub fn render(json: bool) -> serde_json::Result<String> {
    let lang = language();
    if json {
        return lang.node_kinds_json().map(|s| s + "\n");
    }

    let mut out = String::new();
    for kind in lang.node_kinds() {
        let name = if kind.named {
            kind.name.to_string()
        } else {
            format!("\"{}\"", kind.name)
        };
        out.push_str(&format!("{:>3} {}", kind.id, name));
        if kind.extra {
            out.push_str(" (extra)");
        }
        if !kind.fields.is_empty() {
            out.push_str(&format!(" [{}]", kind.fields.join(", ")));
        }
        out.push('\n');
    }
    Ok(out)
}
