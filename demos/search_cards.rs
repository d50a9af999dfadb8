//! Card search example.
//!
//! Run with: cargo run --example search_cards
//!
//! Works anonymously; set POKEMONTCG_API_KEY in a .env file for higher
//! rate limits.

use pokemon_tcg::TcgClient;
use pokemon_tcg::query::Direction;
use pokemon_tcg::query::Predicate;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let client = TcgClient::from_env();

    println!("Searching for Grass and Lightning cards in set xy7...\n");

    let records = client
        .cards()
        .filter("types", Predicate::or(["grass", "lightning"]))
        .filter("set.id", "xy7")
        .order_by("hp", Direction::Desc)
        .page_size(10)
        .all()
        .await?;

    for record in &records {
        if let Some(card) = record.as_ref().and_then(|r| r.as_card()) {
            println!(
                "{:<10} {:<25} hp {:<4} {}",
                card.id,
                card.name,
                card.hp.as_deref().unwrap_or("-"),
                card.types.join("/")
            );
        }
    }

    let pagination = client
        .cards()
        .filter("types", Predicate::or(["grass", "lightning"]))
        .filter("set.id", "xy7")
        .pagination()
        .await?;

    println!("\n{} matching cards in total", pagination.total_count());

    println!("\nLooking up xy7-54 directly...");

    match client.cards().find("xy7-54").await? {
        Some(model) => {
            if let Some(card) = model.as_card() {
                println!(
                    "Found {} ({}), rarity: {}",
                    card.name,
                    card.id,
                    card.rarity.as_deref().unwrap_or("unknown")
                );
            }
        }
        None => println!("Record came back without a registered model"),
    }

    Ok(())
}
