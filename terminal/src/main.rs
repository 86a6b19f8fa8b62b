use songsearch_fetch::{Fetcher, FetcherConfig};
use songsearch_protocol as proto;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Headline, then the collection indented under it.
fn render(items: &[proto::SearchResultItem], out: &mut impl Write) -> io::Result<()> {
    for item in items {
        writeln!(out, "{}", item.track_name)?;
        writeln!(out, "    {}", item.collection_name)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = FetcherConfig::default();
    let fetcher = Fetcher::new(&config).context("creating HTTP client")?;
    // failures are logged by the fetcher and show up as an empty list
    let items = fetcher.load(&config.term).await;
    info!(message = "search done", term = %config.term, items = items.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&items, &mut out).context("writing results")?;
    out.flush().context("writing results")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_order() {
        let items = vec![
            proto::SearchResultItem {
                track_id: 1,
                track_name: "Love Story".to_string(),
                collection_name: "Fearless".to_string(),
            },
            proto::SearchResultItem {
                track_id: 2,
                track_name: "Mine".to_string(),
                collection_name: "Speak Now".to_string(),
            },
        ];
        let mut out = Vec::new();
        render(&items, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Love Story\n    Fearless\nMine\n    Speak Now\n"
        );
    }

    #[test]
    fn renders_nothing_for_no_items() {
        let mut out = Vec::new();
        render(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
