//! Set browsing example walking a paged listing.
//!
//! Run with: cargo run --example browse_sets
//!
//! Works anonymously; set POKEMONTCG_API_KEY in a .env file for higher
//! rate limits.

use pokemon_tcg::TcgClient;
use pokemon_tcg::query::Direction;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let client = TcgClient::from_env();

    println!("Browsing sets, newest first...\n");

    let mut pages = client
        .sets()
        .order_by("releaseDate", Direction::Desc)
        .page_size(25)
        .pages();

    let mut shown = 0;
    while let Some(page) = pages.next().await {
        let page = page?;
        let pagination = page.pagination();
        println!(
            "-- page {}/{} ({} sets total)",
            pagination.page(),
            pagination.total_pages(),
            pagination.total_count()
        );

        for record in page.records() {
            if let Some(set) = record.as_ref().and_then(|r| r.as_set()) {
                println!(
                    "{:<12} {:<35} released {}",
                    set.id,
                    set.name,
                    set.release_date.as_deref().unwrap_or("?")
                );
            }
        }

        shown += page.len();
        if shown >= 50 {
            println!("\n...stopping after {shown} sets");
            break;
        }
    }

    Ok(())
}
