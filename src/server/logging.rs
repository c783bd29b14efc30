use std::io::Write;

use env_logger::{Builder, Env, Target};

/// Sets up the global logger: stdout, bare messages, `info` unless
/// `RUST_LOG` says otherwise. Calling it twice is harmless.
pub fn init_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}
