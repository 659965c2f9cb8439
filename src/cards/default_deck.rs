//! Built-in card set.
//!
//! Twelve four-card chains from Hungarian history, enough to deal a full
//! table of eight and still leave a draw pile.

use super::definition::{Card, CardKind};

/// (chain id, person, location, event, date label, year)
const CHAINS: [(&str, &str, &str, &str, &str, i32); 12] = [
    ("honfoglalas", "Árpád", "Verecke Pass", "Conquest of the Carpathian Basin", "895", 895),
    ("koronazas", "Saint Stephen", "Esztergom", "Coronation of the first king", "1000", 1000),
    ("tatarjaras", "Béla IV", "Muhi", "Mongol invasion", "1241", 1241),
    ("nandorfehervar", "John Hunyadi", "Belgrade", "Siege of Belgrade", "1456", 1456),
    ("mohacs", "Louis II", "Mohács", "Battle of Mohács", "1526", 1526),
    ("eger", "István Dobó", "Eger", "Siege of Eger", "1552", 1552),
    ("rakoczi", "Francis II Rákóczi", "Szatmár", "Peace of Szatmár", "1711", 1711),
    ("forradalom", "Sándor Petőfi", "Pilvax Café", "Revolution of 15 March", "1848", 1848),
    ("kiegyezes", "Ferenc Deák", "Vienna", "Austro-Hungarian Compromise", "1867", 1867),
    ("millennium", "Francis Joseph", "City Park", "Millennium Exhibition", "1896", 1896),
    ("trianon", "Albert Apponyi", "Grand Trianon", "Treaty of Trianon", "1920", 1920),
    ("szabadsagharc56", "Imre Nagy", "Corvin Passage", "Uprising of 1956", "1956", 1956),
];

/// The built-in card set in a fixed, unshuffled order.
#[must_use]
pub fn builtin_cards() -> Vec<Card> {
    CHAINS
        .iter()
        .flat_map(|&(chain, person, location, event, date, year)| {
            [
                Card::new(format!("{chain}-1"), CardKind::Person, person, chain)
                    .with_description("Person"),
                Card::new(format!("{chain}-2"), CardKind::Location, location, chain)
                    .with_description("Location"),
                Card::new(format!("{chain}-3"), CardKind::Event, event, chain)
                    .with_description("Event"),
                Card::new(format!("{chain}-4"), CardKind::Date, date, chain)
                    .with_description("Date")
                    .with_year(year),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_builtin_size_covers_full_table() {
        let cards = builtin_cards();
        assert_eq!(cards.len(), 48);
        assert!(cards.len() > crate::core::config::MAX_PLAYERS * crate::core::config::STARTING_HAND);
    }

    #[test]
    fn test_builtin_ids_unique() {
        let cards = builtin_cards();
        let ids: FxHashSet<_> = cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_every_chain_has_one_of_each_kind() {
        let cards = builtin_cards();
        for group in cards.chunks(4) {
            let chain = &group[0].chain;
            assert!(group.iter().all(|c| &c.chain == chain));
            let kinds: Vec<_> = group.iter().map(|c| c.kind).collect();
            assert_eq!(kinds, CardKind::ALL.to_vec());
        }
    }
}
