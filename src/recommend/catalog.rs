// catalog format: a JSON array of seed records
//
// [
//   { "name": "상추", "taste": 7, "popularity": 9, "health": 8, "difficulty": 2 },
//   ...
// ]
//
// every attribute is scored in [0, 10]; names identify seeds and must be unique.
// the catalog is parsed and checked once at startup and never changes afterwards.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const ATTRIBUTE_MIN: f32 = 0.0;
pub const ATTRIBUTE_MAX: f32 = 10.0;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Seed {
    pub name: String,
    pub taste: f32,
    pub popularity: f32,
    pub health: f32,
    pub difficulty: f32,
}

impl Seed {
    // attribute order is fixed: taste, popularity, health, difficulty
    pub fn vector(&self) -> [f32; 4] {
        [self.taste, self.popularity, self.health, self.difficulty]
    }
}

pub fn load_default() -> Result<Vec<Seed>> {
    parse(include_str!("../../seeds.json"))
}

pub fn parse(json: &str) -> Result<Vec<Seed>> {
    let seeds: Vec<Seed> = serde_json::from_str(json)?;
    validate(&seeds)?;
    Ok(seeds)
}

fn validate(seeds: &[Seed]) -> Result<()> {
    let mut names = HashSet::new();
    for seed in seeds {
        if seed.name.is_empty() {
            return Err(anyhow::anyhow!("seed with empty name"));
        }
        if !names.insert(seed.name.as_str()) {
            return Err(anyhow::anyhow!("duplicate seed name: {}", seed.name));
        }
        for value in seed.vector() {
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
                return Err(anyhow::anyhow!(
                    "seed {} attribute out of range: {}",
                    seed.name,
                    value
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_parses_and_validates() {
        let seeds = load_default().unwrap();
        assert!(seeds.len() >= 12);
        let lettuce = seeds.iter().find(|s| s.name == "상추").unwrap();
        assert_eq!(lettuce.vector(), [7.0, 9.0, 8.0, 2.0]);
    }

    #[test]
    fn vector_order_is_taste_popularity_health_difficulty() {
        let seed = Seed {
            name: "테스트".to_string(),
            taste: 1.0,
            popularity: 2.0,
            health: 3.0,
            difficulty: 4.0,
        };
        assert_eq!(seed.vector(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn out_of_range_attribute_is_rejected() {
        let too_high = r#"[{ "name": "무", "taste": 11, "popularity": 5, "health": 5, "difficulty": 5 }]"#;
        assert!(parse(too_high).is_err());
        let negative = r#"[{ "name": "무", "taste": -1, "popularity": 5, "health": 5, "difficulty": 5 }]"#;
        assert!(parse(negative).is_err());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let json = r#"[
            { "name": "상추", "taste": 5, "popularity": 5, "health": 5, "difficulty": 5 },
            { "name": "상추", "taste": 6, "popularity": 6, "health": 6, "difficulty": 6 }
        ]"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let json = r#"[{ "name": "", "taste": 5, "popularity": 5, "health": 5, "difficulty": 5 }]"#;
        assert!(parse(json).is_err());
    }
}
