//! Set model

use serde::Deserialize;

/// A card expansion, e.g. Base or Sword & Shield.
///
/// Every card embeds the set it was printed in, and the `sets` resource
/// exposes these as standalone records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    /// Set identifier (e.g., "swsh1").
    pub id: String,

    /// Display name of the set.
    pub name: String,

    /// The series the set belongs to (e.g., "Sword & Shield").
    pub series: Option<String>,

    /// Number of cards printed on the cards themselves.
    pub printed_total: Option<u32>,

    /// Total number of cards in the set, including secret rares.
    pub total: Option<u32>,

    /// Play legality per format.
    pub legalities: Option<Legalities>,

    /// Code used by the Pokémon TCG Online client.
    pub ptcgo_code: Option<String>,

    /// Release date, as the service formats it ("YYYY/MM/DD").
    pub release_date: Option<String>,

    /// When the set record was last updated.
    pub updated_at: Option<String>,

    /// Symbol and logo images.
    pub images: Option<SetImages>,
}

/// Image URLs for a set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetImages {
    /// URL of the set symbol.
    pub symbol: String,

    /// URL of the set logo.
    pub logo: String,
}

/// Per-format play legality ("Legal", "Banned", absent when unrated).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legalities {
    pub unlimited: Option<String>,
    pub standard: Option<String>,
    pub expanded: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Set;

    #[test]
    fn test_deserialize_set() {
        let body = r#"{
            "id": "swsh1",
            "name": "Sword & Shield",
            "series": "Sword & Shield",
            "printedTotal": 202,
            "total": 216,
            "legalities": { "unlimited": "Legal", "standard": "Legal", "expanded": "Legal" },
            "ptcgoCode": "SSH",
            "releaseDate": "2020/02/07",
            "updatedAt": "2020/08/14 09:35:00",
            "images": {
                "symbol": "https://images.pokemontcg.io/swsh1/symbol.png",
                "logo": "https://images.pokemontcg.io/swsh1/logo.png"
            }
        }"#;

        let set: Set = serde_json::from_str(body).unwrap();
        assert_eq!(set.id, "swsh1");
        assert_eq!(set.printed_total, Some(202));
        assert_eq!(set.legalities.unwrap().standard.as_deref(), Some("Legal"));
        assert_eq!(set.images.unwrap().logo, "https://images.pokemontcg.io/swsh1/logo.png");
    }

    #[test]
    fn test_deserialize_minimal_set() {
        let set: Set = serde_json::from_str(r#"{"id": "base1", "name": "Base"}"#).unwrap();
        assert_eq!(set.name, "Base");
        assert!(set.series.is_none());
        assert!(set.images.is_none());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = serde_json::from_str::<Set>(r#"{"name": "Base"}"#);
        assert!(result.is_err());
    }
}
