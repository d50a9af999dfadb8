//! Card model

use rust_decimal::Decimal;
use serde::Deserialize;

use super::Legalities;
use super::Set;

/// A single card as returned by the `cards` resource.
///
/// Only `id` and `name` are guaranteed by the service; everything else
/// depends on the card (trainers have no attacks, old cards carry no
/// regulation mark) and on any `select` projection the caller applied.
/// List fields decode as empty when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier (e.g., "xy7-54").
    pub id: String,

    /// Display name of the card.
    pub name: String,

    /// Supertype: "Pokémon", "Trainer", or "Energy".
    pub supertype: Option<String>,

    /// Subtypes such as "Basic" or "VMAX".
    #[serde(default)]
    pub subtypes: Vec<String>,

    /// Level printed on older cards.
    pub level: Option<String>,

    /// Hit points, kept as printed (some promos carry "30+").
    pub hp: Option<String>,

    /// Energy types of the card.
    #[serde(default)]
    pub types: Vec<String>,

    /// Name of the card this one evolves from.
    pub evolves_from: Option<String>,

    /// Names of the cards this one can evolve into.
    #[serde(default)]
    pub evolves_to: Vec<String>,

    /// Rule box text (V rules, trainer effect text).
    #[serde(default)]
    pub rules: Vec<String>,

    /// Ancient Trait, on the cards that have one.
    pub ancient_trait: Option<AncientTrait>,

    #[serde(default)]
    pub abilities: Vec<Ability>,

    #[serde(default)]
    pub attacks: Vec<Attack>,

    #[serde(default)]
    pub weaknesses: Vec<Weakness>,

    #[serde(default)]
    pub resistances: Vec<Resistance>,

    /// Energy types required to retreat.
    #[serde(default)]
    pub retreat_cost: Vec<String>,

    pub converted_retreat_cost: Option<u32>,

    /// The set this printing belongs to.
    pub set: Option<Set>,

    /// Collector number within the set, kept as printed ("54", "TG12").
    pub number: Option<String>,

    pub artist: Option<String>,

    pub rarity: Option<String>,

    pub flavor_text: Option<String>,

    #[serde(default)]
    pub national_pokedex_numbers: Vec<u32>,

    pub legalities: Option<Legalities>,

    /// Tournament regulation mark ("D", "E", ...).
    pub regulation_mark: Option<String>,

    pub images: Option<CardImages>,

    /// TCGplayer listing and prices.
    pub tcgplayer: Option<TcgPlayer>,

    /// Cardmarket listing and prices.
    pub cardmarket: Option<CardMarket>,
}

/// An Ability, Poké-Power, or Poké-Body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    pub text: Option<String>,
    /// "Ability", "Poké-Power", or "Poké-Body".
    #[serde(rename = "type")]
    pub ability_type: Option<String>,
}

/// One attack printed on a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    /// Energy cost, one entry per attached energy.
    #[serde(default)]
    pub cost: Vec<String>,
    pub converted_energy_cost: Option<u32>,
    /// Damage as printed ("120", "60+", "30×").
    pub damage: Option<String>,
    pub text: Option<String>,
}

/// Weakness to an energy type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weakness {
    #[serde(rename = "type")]
    pub energy_type: String,
    /// Multiplier as printed ("×2", "+30").
    pub value: Option<String>,
}

/// Resistance to an energy type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resistance {
    #[serde(rename = "type")]
    pub energy_type: String,
    pub value: Option<String>,
}

/// Ancient Trait printed on some XY-era cards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncientTrait {
    pub name: String,
    pub text: Option<String>,
}

/// Image URLs for a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImages {
    /// URL of the small render.
    pub small: String,

    /// URL of the hi-res render.
    pub large: String,
}

/// TCGplayer market listing for a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgPlayer {
    pub url: String,
    /// When the prices were last refreshed ("YYYY/MM/DD").
    pub updated_at: String,
    pub prices: Option<TcgPlayerPrices>,
}

/// TCGplayer prices, one tier per finish the card exists in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgPlayerPrices {
    pub normal: Option<PriceTier>,
    pub holofoil: Option<PriceTier>,
    pub reverse_holofoil: Option<PriceTier>,
    #[serde(rename = "1stEditionHolofoil")]
    pub first_edition_holofoil: Option<PriceTier>,
    #[serde(rename = "1stEditionNormal")]
    pub first_edition_normal: Option<PriceTier>,
}

/// Price points for one finish, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    pub low: Option<Decimal>,
    pub mid: Option<Decimal>,
    pub high: Option<Decimal>,
    pub market: Option<Decimal>,
    pub direct_low: Option<Decimal>,
}

/// Cardmarket listing for a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarket {
    pub url: String,
    /// When the prices were last refreshed ("YYYY/MM/DD").
    pub updated_at: String,
    pub prices: Option<CardMarketPrices>,
}

/// Cardmarket price figures, in EUR.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarketPrices {
    pub average_sell_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub trend_price: Option<Decimal>,
    pub german_pro_low: Option<Decimal>,
    pub suggested_price: Option<Decimal>,
    pub reverse_holo_sell: Option<Decimal>,
    pub reverse_holo_low: Option<Decimal>,
    pub reverse_holo_trend: Option<Decimal>,
    pub low_price_ex_plus: Option<Decimal>,
    pub avg1: Option<Decimal>,
    pub avg7: Option<Decimal>,
    pub avg30: Option<Decimal>,
    pub reverse_holo_avg1: Option<Decimal>,
    pub reverse_holo_avg7: Option<Decimal>,
    pub reverse_holo_avg30: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::Card;

    #[test]
    fn test_deserialize_full_card() {
        let body = r#"{
            "id": "xy7-54",
            "name": "Gardevoir",
            "supertype": "Pokémon",
            "subtypes": ["Stage 2"],
            "hp": "130",
            "types": ["Fairy"],
            "evolvesFrom": "Kirlia",
            "abilities": [{
                "name": "Bright Heal",
                "text": "Once during your turn, you may heal 20 damage.",
                "type": "Ability"
            }],
            "attacks": [{
                "name": "Telekinesis",
                "cost": ["Colorless", "Colorless", "Colorless"],
                "convertedEnergyCost": 3,
                "damage": "",
                "text": "This attack does 30 damage to 1 of your opponent's Pokemon."
            }],
            "weaknesses": [{"type": "Metal", "value": "×2"}],
            "retreatCost": ["Colorless", "Colorless"],
            "convertedRetreatCost": 2,
            "number": "54",
            "artist": "TOKIYA",
            "rarity": "Rare Holo",
            "nationalPokedexNumbers": [282],
            "images": {
                "small": "https://images.pokemontcg.io/xy7/54.png",
                "large": "https://images.pokemontcg.io/xy7/54_hires.png"
            },
            "tcgplayer": {
                "url": "https://prices.pokemontcg.io/tcgplayer/xy7-54",
                "updatedAt": "2021/08/04",
                "prices": {
                    "holofoil": {"low": 1.0, "mid": 2.49, "high": 12.0, "market": 2.08}
                }
            }
        }"#;

        let card: Card = serde_json::from_str(body).unwrap();
        assert_eq!(card.id, "xy7-54");
        assert_eq!(card.supertype.as_deref(), Some("Pokémon"));
        assert_eq!(card.attacks[0].converted_energy_cost, Some(3));
        assert_eq!(card.weaknesses[0].energy_type, "Metal");
        assert_eq!(card.national_pokedex_numbers, vec![282]);

        let prices = card.tcgplayer.unwrap().prices.unwrap();
        let holofoil = prices.holofoil.unwrap();
        assert_eq!(holofoil.market, Some(Decimal::new(208, 2)));
        assert!(prices.normal.is_none());
    }

    #[test]
    fn test_deserialize_selected_projection() {
        // A select=id,name response carries nothing else.
        let card: Card = serde_json::from_str(r#"{"id": "base1-4", "name": "Charizard"}"#).unwrap();
        assert_eq!(card.name, "Charizard");
        assert!(card.types.is_empty());
        assert!(card.attacks.is_empty());
        assert!(card.tcgplayer.is_none());
    }

    #[test]
    fn test_first_edition_price_keys() {
        let body = r#"{
            "id": "base1-4",
            "name": "Charizard",
            "tcgplayer": {
                "url": "https://prices.pokemontcg.io/tcgplayer/base1-4",
                "updatedAt": "2021/08/04",
                "prices": {
                    "1stEditionHolofoil": {"low": 1200.0, "market": 2102.5}
                }
            }
        }"#;

        let card: Card = serde_json::from_str(body).unwrap();
        let prices = card.tcgplayer.unwrap().prices.unwrap();
        let tier = prices.first_edition_holofoil.unwrap();
        assert_eq!(tier.market, Some(Decimal::new(21025, 1)));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert!(serde_json::from_str::<Card>(r#"{"id": "xy7-54"}"#).is_err());
    }
}
