//! Run one idea through the studio against the live Gemini API.
//!
//! Usage: `vetrina [config.toml] ["video idea"]`
//!
//! Requires `GEMINI_API_KEY` (or a key in the config file).

use vetrina_gemini::GeminiClient;
use vetrina_studio::{Studio, StudioConfig, views};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if !path.is_empty() => StudioConfig::from_file(path)?,
        _ => StudioConfig::default(),
    };
    let idea = args
        .next()
        .unwrap_or_else(|| "a funny cooking tutorial for a giant pizza".to_string());

    let driver = GeminiClient::from_config(&config.gemini)?;
    let studio = Studio::new(driver);

    studio.generate_from_idea(&idea).await?;
    if let Some(message) = studio.last_error().await {
        eprintln!("{}", message);
        return Ok(());
    }

    let state = studio.snapshot().await;
    if let Some(video) = state.media.as_ref().and_then(|media| media.video()) {
        println!("Concept: {}", video.title());
        println!("  {}", video.description());
    }
    if let Some(content) = state.content.ready() {
        for (platform, entry) in content.iter() {
            println!("\n[{}] {}", platform, entry.title());
            println!("  {}", entry.description());
            println!(
                "  {}",
                entry
                    .hashtags()
                    .iter()
                    .map(|tag| format!("#{}", tag))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
    }

    studio.suggest_post_times().await?;
    let now = chrono::Utc::now();
    let scheduled = studio.schedule_all(now).await?;
    println!("\nScheduled {} posts:", scheduled.len());
    let state = studio.snapshot().await;
    for post in views::posts_by_time(&state.posts) {
        println!("  {} -> {}", post.id(), post.scheduled_at());
    }

    println!("Landed on the {} phase.", studio.phase().await);
    Ok(())
}
