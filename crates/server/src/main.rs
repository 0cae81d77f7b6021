use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use burnpin_common::{DEFAULT_HOST, DEFAULT_KEY_PREFIX, DEFAULT_PORT, DEFAULT_REDIS_URL};
use burnpin_server::{AppState, router};
use burnpin_storage::{Clipboard, Clock, KeyedTtlStore, MemoryStore, RedisStore, SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Memory,
    Redis,
}

#[derive(Parser, Debug)]
#[command(name = "burnpin-server", about = "burnpin — clipboard de leitura única por PIN")]
struct Args {
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
    #[arg(long, env = "BURNPIN_BACKEND", default_value = "memory", value_parser = parse_backend)]
    backend: Backend,
    #[arg(long, env = "REDIS_URL", default_value = DEFAULT_REDIS_URL)]
    redis_url: String,
    #[arg(long, default_value = DEFAULT_KEY_PREFIX)]
    key_prefix: String,
    /// Intervalo da varredura de entradas expiradas (0 = desligada, só backend memory)
    #[arg(long, default_value_t = 0)]
    sweep_interval_secs: u64,
}

fn parse_backend(s: &str) -> Result<Backend, String> {
    match s.to_lowercase().as_str() {
        "memory" => Ok(Backend::Memory),
        "redis" => Ok(Backend::Redis),
        _ => Err(format!("valor inválido: '{s}'. Use: memory, redis")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "burnpin_server=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let mut sweeper = None;
    let store: Arc<dyn KeyedTtlStore> = match args.backend {
        Backend::Memory => {
            let store = MemoryStore::new();
            if args.sweep_interval_secs > 0 {
                let every = Duration::from_secs(args.sweep_interval_secs);
                sweeper = Some(store.spawn_sweeper(clock.clone(), every));
                info!("varredura de expirados a cada {}s", args.sweep_interval_secs);
            }
            Arc::new(store)
        }
        Backend::Redis => {
            if args.sweep_interval_secs > 0 {
                warn!("--sweep-interval-secs ignorado: o Redis expira as chaves sozinho");
            }
            Arc::new(RedisStore::from_url(&args.redis_url, args.key_prefix.clone())?)
        }
    };

    let clipboard = Clipboard::new(store, clock);
    info!("backend: {}", clipboard.backend());

    let app = router(AppState::new(clipboard));

    let listener = TcpListener::bind(&addr).await?;
    info!("burnpin escutando em http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = sweeper {
        handle.abort();
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("falha ao escutar ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal recebido");
}
