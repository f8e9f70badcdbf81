use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use edgescribe::application::prompts::PromptTemplates;
use edgescribe::application::services::{
    InputValidator, ProtectedTermGuard, RateLimiter, ResponseCache, SummarizationService,
    SummaryPipeline, TranslationService,
};
use edgescribe::domain::build_vocabulary;
use edgescribe::infrastructure::cache::MemoryCacheStore;
use edgescribe::infrastructure::llm::ClientFactory;
use edgescribe::infrastructure::observability::{TracingConfig, init_tracing};
use edgescribe::infrastructure::rate_limit::InMemoryRateLimitStore;
use edgescribe::infrastructure::text_processing::SentenceChunker;
use edgescribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(TracingConfig::from(&settings.logging))?;
    tracing::info!(%environment, provider = settings.ai.provider.as_str(), "Starting edgescribe");

    let prompts = PromptTemplates::default();
    let clients = ClientFactory::create(&settings.ai, &prompts)?;

    let vocabulary = build_vocabulary(
        &settings.protected_terms.categories,
        &settings.protected_terms.extra,
    );
    let guard = Arc::new(ProtectedTermGuard::new(vocabulary.as_slice())?);
    tracing::info!(terms = guard.vocabulary_size(), "Protected vocabulary loaded");

    let rate_limit_store = Arc::new(InMemoryRateLimitStore::new());
    let rate_limiter = Arc::new(RateLimiter::new(
        rate_limit_store.clone(),
        settings.rate_limit.requests_per_window,
        settings.rate_limit.window(),
    ));

    let cache = Arc::new(if settings.cache.enabled {
        ResponseCache::new(
            Arc::new(MemoryCacheStore::new(settings.cache.capacity)),
            settings.cache.ttl(),
            settings.cache.write_policy,
        )
    } else {
        tracing::warn!("Response cache disabled");
        ResponseCache::disabled()
    });

    let summarizer = Arc::new(SummarizationService::new(
        clients.llm,
        Arc::new(SentenceChunker::new()),
        prompts,
        settings.summarization_config(),
    ));
    let translator = Arc::new(TranslationService::new(
        clients.translation,
        guard,
        settings.ai.timeout(),
    ));

    let pipeline = Arc::new(SummaryPipeline::new(
        InputValidator::new(settings.limits.max_text_length),
        rate_limiter,
        Arc::clone(&cache),
        summarizer,
        translator,
    ));

    let shutdown = CancellationToken::new();
    let window = settings.rate_limit.window();
    let sweeper = tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            let mut ticks = tokio::time::interval(window);
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = ticks.tick() => {
                        let now_ms = chrono::Utc::now().timestamp_millis();
                        let evicted = rate_limit_store.evict_idle(now_ms, window);
                        if evicted > 0 {
                            tracing::debug!(evicted, "Evicted idle rate-limit windows");
                        }
                    }
                }
            }
        }
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    let router = create_router(AppState::new(pipeline, settings));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown.cancel();
    sweeper.await.ok();
    cache.flush().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
