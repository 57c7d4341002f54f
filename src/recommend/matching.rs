use super::catalog::Seed;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct UserPreferences {
    pub taste: f32,
    pub popularity: f32,
    pub health: f32,
    pub difficulty: f32,
}

impl UserPreferences {
    pub fn vector(&self) -> [f32; 4] {
        [self.taste, self.popularity, self.health, self.difficulty]
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScoredSeed {
    #[serde(flatten)]
    pub seed: Seed,
    pub similarity: f32,
}

impl PartialOrd for ScoredSeed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.similarity.partial_cmp(&other.similarity)
    }
}

impl Ord for ScoredSeed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for ScoredSeed {
    fn eq(&self, other: &Self) -> bool {
        self.similarity == other.similarity
    }
}

impl Eq for ScoredSeed {}

pub fn rank(preferences: &UserPreferences, catalog: &[Seed], limit: usize) -> Vec<ScoredSeed> {
    let user_vector = preferences.vector();
    let mut scored = catalog
        .iter()
        .map(|seed| ScoredSeed {
            similarity: cosine_similarity(&user_vector, &seed.vector()),
            seed: seed.clone(),
        })
        .collect::<Vec<_>>();

    // stable sort: equal scores keep catalog order
    scored.sort_by(|a, b| b.cmp(a));
    scored.truncate(limit);
    scored
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = dot_product(a, b);
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);

    // zero-magnitude vectors have no direction, score them 0
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn magnitude(a: &[f32]) -> f32 {
    a.iter().map(|x| x * x).sum::<f32>().sqrt()
}
