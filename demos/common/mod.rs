//! Shared setup for the hand advisor demos.

use hand_advisor::access::AccessPolicy;
use hand_advisor::advisor::Advisor;
use hand_advisor::i18n::Locale;
use hand_advisor::storage::{MemoryStore, StorageError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Flags every demo takes. Embed with `#[command(flatten)]`.
#[derive(clap::Args, Debug, Clone)]
pub struct DemoArgs {
    /// Locale code, pt-BR or en-US. Detected from the environment if unset
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Show the advisor's own logs (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

impl DemoArgs {
    /// Install logging and build an unlocked, in-memory advisor.
    pub fn start(&self) -> Result<Advisor<MemoryStore>, StorageError> {
        let level = match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        // RUST_LOG wins over -v
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,hand_advisor={level}")));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .init();

        let locale = self
            .locale
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_else(|| Locale::detect(None, Locale::system_language().as_deref()));
        Advisor::in_memory(AccessPolicy::Open, Some(locale))
    }
}
