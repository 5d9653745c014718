//! Resolve a remote model URL into a local cached copy.
//!
//! ```bash
//! cargo run --example fetch_preview -- https://example.com/assets/chair.usdz
//! ```

use pedestal::{PreviewResolver, ResolverOptions};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pedestal=debug".into()),
        )
        .init();

    let arg = std::env::args()
        .nth(1)
        .ok_or("usage: fetch_preview <url>")?;
    let url = Url::parse(&arg)?;

    let cache_dir = std::env::temp_dir().join("pedestal-previews");
    let options = ResolverOptions::new(&cache_dir).with_loading_hook(std::sync::Arc::new(|| {
        eprintln!("downloading...");
    }));

    let resolver = PreviewResolver::new(options)?;
    let handle = resolver.resolve(&url).await?;
    println!("{}", handle.local_path().display());
    Ok(())
}
