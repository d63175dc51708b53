mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{AstParams, CheckParams, KindsParams, build_cli};

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "dql_lib=debug,dql=debug",
        _ => "dql_lib=trace,dql=trace",
    };
    let filter = EnvFilter::try_from_env("DQL_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("kinds", m)) => {
            let params = KindsParams::from_matches(m);
            commands::kinds::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
