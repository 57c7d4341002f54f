use super::catalog::Seed;
use super::matching::{rank, ScoredSeed, UserPreferences};
use crate::advisor::Advisor;
use anyhow::Result;
use std::time::Instant;

#[derive(Clone)]
pub struct Gardener {
    catalog: Vec<Seed>,
    advisor: Advisor,
}

impl Gardener {
    pub fn new(catalog: Vec<Seed>) -> Self {
        let gardener = Self {
            catalog,
            advisor: Advisor::new(),
        };
        info!("gardener init: {} seeds ready", gardener.catalog.len());
        gardener
    }

    pub fn recommend(&self, preferences: &UserPreferences, limit: usize) -> Vec<ScoredSeed> {
        let start = Instant::now();
        let top = rank(preferences, &self.catalog, limit);
        let elapsed = start.elapsed().as_secs_f64();
        if let Some(best) = top.first() {
            info!(
                "match preferences spends {}s, top: {} ({:.2})",
                elapsed, best.seed.name, best.similarity
            );
        }
        top
    }

    pub async fn advise(&self, seed_name: &str) -> Result<String> {
        self.advisor.advise(seed_name).await
    }

    pub async fn illustrate(&self, seed_name: &str) -> Result<Option<String>> {
        self.advisor.illustrate(seed_name).await
    }

    pub fn seed_names(&self) -> Vec<String> {
        self.catalog.iter().map(|seed| seed.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::catalog;

    fn prefs(taste: f32, popularity: f32, health: f32, difficulty: f32) -> UserPreferences {
        UserPreferences {
            taste,
            popularity,
            health,
            difficulty,
        }
    }

    #[test]
    fn recommend_caps_at_catalog_size() {
        let gardener = Gardener::new(catalog::load_default().unwrap());
        let top = gardener.recommend(&prefs(5.0, 5.0, 5.0, 5.0), 100);
        assert_eq!(top.len(), gardener.seed_names().len());
    }

    #[test]
    fn seed_names_match_catalog_order() {
        let catalog = catalog::load_default().unwrap();
        let names: Vec<String> = catalog.iter().map(|s| s.name.clone()).collect();
        let gardener = Gardener::new(catalog);
        assert_eq!(gardener.seed_names(), names);
    }
}
