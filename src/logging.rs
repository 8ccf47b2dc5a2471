use tracing_subscriber::EnvFilter;

/// Log targets covered by the default filter, one per workspace crate.
const WORKSPACE_TARGETS: &[&str] = &[
    "metron",
    "metron_bench",
    "metron_dataset",
    "metron_model",
    "metron_score",
    "metron_synth",
];

/// Wires up the global `tracing` subscriber.
///
/// Repeated `-v` flags raise the level for every workspace crate, starting
/// from `warn` and climbing through `info` and `debug` to `trace`. A set
/// `RUST_LOG` variable bypasses the flag entirely.
pub fn init(verbosity: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(default_directives(verbosity)),
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let directives: Vec<String> = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.join(",")
}
