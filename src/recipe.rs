//! # Recipe Entity Module
//!
//! A recipe moves through an explicit lifecycle:
//!
//! `Unfetched` (id only) → `Fetched` (raw service data) → `Parsed`
//! (structured ingredients) → `Ready` (servings and cook time resolved).
//!
//! Every operation names the phases it accepts and is a no-op outside them,
//! so callers branch on [`Recipe::phase`] instead of probing fields for
//! emptiness. Once `Ready`, ingredient counts stay proportional to the
//! serving count through every [`Recipe::update_servings`] call.

use crate::api::{FetchError, RecipeSource};
use crate::ingredient::Ingredient;
use crate::ingredient_parser;

/// Servings assumed when the source does not publish a usable number
pub const DEFAULT_SERVINGS: u32 = 4;

/// Minutes of cooking time estimated per started batch of three ingredients
const MINUTES_PER_BATCH: u32 = 15;

/// Lifecycle phase of a [`Recipe`], in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Only the id is known
    Unfetched,
    /// Raw data loaded from the source
    Fetched,
    /// Ingredient lines parsed into structured records
    Parsed,
    /// Servings and cook time resolved; scaling is allowed
    Ready,
}

/// Direction of a one-step serving adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// One recipe and everything derived from it
#[derive(Debug, Clone)]
pub struct Recipe {
    id: String,
    title: String,
    author: String,
    image_url: String,
    ingredient_lines: Vec<String>,
    ingredients: Vec<Ingredient>,
    servings: Option<u32>,
    cook_time_minutes: Option<u32>,
    phase: Phase,
}

impl Recipe {
    /// Create an unfetched recipe holding only its identifier
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: String::new(),
            author: String::new(),
            image_url: String::new(),
            ingredient_lines: Vec::new(),
            ingredients: Vec::new(),
            servings: None,
            cook_time_minutes: None,
            phase: Phase::Unfetched,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Structured ingredients; empty before `Parsed`
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Resolved servings; `None` before `Ready` unless the source published them
    pub fn servings(&self) -> Option<u32> {
        self.servings
    }

    /// Resolved cook time in minutes; `None` before `Ready` unless published
    pub fn cook_time_minutes(&self) -> Option<u32> {
        self.cook_time_minutes
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Load the recipe from the source.
    ///
    /// On success the phase becomes `Fetched` and any previously parsed
    /// ingredients are discarded. On failure nothing changes.
    pub async fn fetch(&mut self, source: &dyn RecipeSource) -> Result<(), FetchError> {
        let data = source.recipe(&self.id).await?;
        self.title = data.title;
        self.author = data.author;
        self.image_url = data.image_url;
        self.ingredient_lines = data.ingredient_lines;
        self.servings = data.servings;
        self.cook_time_minutes = data.cook_time_minutes;
        self.ingredients.clear();
        self.phase = Phase::Fetched;
        Ok(())
    }

    /// Parse the raw ingredient lines. Only valid in `Fetched`.
    pub fn parse_ingredients(&mut self) {
        if self.phase != Phase::Fetched {
            return;
        }
        self.ingredients = ingredient_parser::parse_ingredient_lines(&self.ingredient_lines);
        self.phase = Phase::Parsed;
    }

    /// Resolve the cook time. Valid from `Parsed`.
    ///
    /// A source-published time wins; otherwise the estimate is
    /// [`MINUTES_PER_BATCH`] minutes per started batch of three ingredients.
    pub fn calc_time(&mut self) {
        if self.phase < Phase::Parsed {
            return;
        }
        if self.cook_time_minutes.is_none() {
            let batches = (self.ingredients.len() as u32).div_ceil(3);
            self.cook_time_minutes = Some(batches * MINUTES_PER_BATCH);
        }
        self.advance_if_resolved();
    }

    /// Resolve the servings. Valid from `Parsed`.
    ///
    /// Source-published servings win when positive; otherwise
    /// [`DEFAULT_SERVINGS`].
    pub fn calc_servings(&mut self) {
        if self.phase < Phase::Parsed {
            return;
        }
        self.servings = match self.servings {
            Some(n) if n > 0 => Some(n),
            _ => Some(DEFAULT_SERVINGS),
        };
        self.advance_if_resolved();
    }

    /// Adjust servings by one and rescale every ingredient count in step.
    ///
    /// Only valid in `Ready`. Decreasing below one serving is rejected.
    /// Returns whether anything changed.
    pub fn update_servings(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        let old_servings = match self.servings {
            Some(n) => n,
            None => return false,
        };
        let new_servings = match direction {
            Direction::Increase => old_servings + 1,
            Direction::Decrease => {
                if old_servings <= 1 {
                    return false;
                }
                old_servings - 1
            }
        };

        let factor = f64::from(new_servings) / f64::from(old_servings);
        for ingredient in &mut self.ingredients {
            if let Some(count) = ingredient.count {
                ingredient.count = Some(count * factor);
            }
        }
        self.servings = Some(new_servings);
        true
    }

    fn advance_if_resolved(&mut self) {
        if self.phase == Phase::Parsed
            && self.servings.is_some()
            && self.cook_time_minutes.is_some()
        {
            self.phase = Phase::Ready;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RecipeData, RecipeSummary};
    use async_trait::async_trait;

    struct StubSource {
        data: RecipeData,
    }

    #[async_trait]
    impl RecipeSource for StubSource {
        async fn search(&self, _query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
            Ok(Vec::new())
        }

        async fn recipe(&self, _id: &str) -> Result<RecipeData, FetchError> {
            Ok(self.data.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RecipeSource for FailingSource {
        async fn search(&self, _query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
            Err(FetchError::Status(500))
        }

        async fn recipe(&self, _id: &str) -> Result<RecipeData, FetchError> {
            Err(FetchError::Status(404))
        }
    }

    fn setup_source(servings: Option<u32>, cook_time: Option<u32>, lines: &[&str]) -> StubSource {
        StubSource {
            data: RecipeData {
                title: "Pasta".to_string(),
                author: "chef".to_string(),
                image_url: "http://img/1.jpg".to_string(),
                servings,
                cook_time_minutes: cook_time,
                ingredient_lines: lines.iter().map(|l| l.to_string()).collect(),
            },
        }
    }

    async fn setup_ready_recipe(source: &StubSource) -> Recipe {
        let mut recipe = Recipe::new("r1");
        recipe.fetch(source).await.unwrap();
        recipe.parse_ingredients();
        recipe.calc_time();
        recipe.calc_servings();
        recipe
    }

    #[test]
    fn test_new_recipe_is_unfetched() {
        let recipe = Recipe::new("r1");
        assert_eq!(recipe.phase(), Phase::Unfetched);
        assert_eq!(recipe.id(), "r1");
        assert!(recipe.ingredients().is_empty());
        assert_eq!(recipe.servings(), None);
    }

    #[tokio::test]
    async fn test_fetch_populates_and_advances() {
        let source = setup_source(None, None, &["2 cups flour", "1 tsp salt"]);
        let mut recipe = Recipe::new("r1");
        recipe.fetch(&source).await.unwrap();

        assert_eq!(recipe.phase(), Phase::Fetched);
        assert_eq!(recipe.title(), "Pasta");
        assert_eq!(recipe.author(), "chef");
        assert!(recipe.ingredients().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_phase_unchanged() {
        let mut recipe = Recipe::new("missing");
        let result = recipe.fetch(&FailingSource).await;

        assert!(result.is_err());
        assert_eq!(recipe.phase(), Phase::Unfetched);
    }

    #[test]
    fn test_parse_is_noop_before_fetch() {
        let mut recipe = Recipe::new("r1");
        recipe.parse_ingredients();
        assert_eq!(recipe.phase(), Phase::Unfetched);
        assert!(recipe.ingredients().is_empty());
    }

    #[tokio::test]
    async fn test_parse_builds_structured_ingredients() {
        let source = setup_source(None, None, &["2 cups flour", "salt to taste"]);
        let mut recipe = Recipe::new("r1");
        recipe.fetch(&source).await.unwrap();
        recipe.parse_ingredients();

        assert_eq!(recipe.phase(), Phase::Parsed);
        assert_eq!(recipe.ingredients().len(), 2);
        assert_eq!(recipe.ingredients()[0].count, Some(2.0));
        assert_eq!(recipe.ingredients()[0].unit, "cup");
        assert_eq!(recipe.ingredients()[1].count, None);
    }

    #[tokio::test]
    async fn test_calc_time_estimates_from_ingredient_count() {
        // 7 ingredients: three started batches of three, 45 minutes
        let lines: Vec<&str> = vec!["a", "b", "c", "d", "e", "f", "g"];
        let source = setup_source(None, None, &lines);
        let recipe = setup_ready_recipe(&source).await;

        assert_eq!(recipe.cook_time_minutes(), Some(45));
    }

    #[tokio::test]
    async fn test_calc_time_prefers_source_value() {
        let source = setup_source(None, Some(25), &["a", "b", "c", "d", "e", "f", "g"]);
        let recipe = setup_ready_recipe(&source).await;

        assert_eq!(recipe.cook_time_minutes(), Some(25));
    }

    #[tokio::test]
    async fn test_calc_servings_defaults_to_four() {
        let source = setup_source(None, None, &["a"]);
        let recipe = setup_ready_recipe(&source).await;

        assert_eq!(recipe.servings(), Some(DEFAULT_SERVINGS));
    }

    #[tokio::test]
    async fn test_calc_servings_rejects_zero_from_source() {
        let source = setup_source(Some(0), None, &["a"]);
        let recipe = setup_ready_recipe(&source).await;

        assert_eq!(recipe.servings(), Some(DEFAULT_SERVINGS));
    }

    #[tokio::test]
    async fn test_calc_servings_prefers_source_value() {
        let source = setup_source(Some(6), None, &["a"]);
        let recipe = setup_ready_recipe(&source).await;

        assert_eq!(recipe.servings(), Some(6));
    }

    #[tokio::test]
    async fn test_ready_requires_both_calcs() {
        let source = setup_source(None, None, &["a"]);
        let mut recipe = Recipe::new("r1");
        recipe.fetch(&source).await.unwrap();
        recipe.parse_ingredients();
        recipe.calc_time();
        assert_eq!(recipe.phase(), Phase::Parsed);

        recipe.calc_servings();
        assert_eq!(recipe.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_update_servings_scales_counts() {
        let source = setup_source(Some(4), None, &["2 cups flour", "salt to taste"]);
        let mut recipe = setup_ready_recipe(&source).await;

        assert!(recipe.update_servings(Direction::Increase));
        assert_eq!(recipe.servings(), Some(5));
        assert!((recipe.ingredients()[0].count.unwrap() - 2.5).abs() < 1e-9);
        // countless lines stay countless
        assert_eq!(recipe.ingredients()[1].count, None);
    }

    #[tokio::test]
    async fn test_update_servings_floors_at_one() {
        let source = setup_source(Some(1), None, &["2 cups flour"]);
        let mut recipe = setup_ready_recipe(&source).await;

        assert!(!recipe.update_servings(Direction::Decrease));
        assert_eq!(recipe.servings(), Some(1));
        assert_eq!(recipe.ingredients()[0].count, Some(2.0));
    }

    #[test]
    fn test_update_servings_requires_ready() {
        let mut recipe = Recipe::new("r1");
        assert!(!recipe.update_servings(Direction::Increase));
        assert_eq!(recipe.phase(), Phase::Unfetched);
    }

    #[tokio::test]
    async fn test_counts_stay_proportional_across_updates() {
        let source = setup_source(Some(4), None, &["3 cups stock"]);
        let mut recipe = setup_ready_recipe(&source).await;

        recipe.update_servings(Direction::Increase);
        recipe.update_servings(Direction::Increase);
        recipe.update_servings(Direction::Decrease);
        // 4 -> 5 -> 6 -> 5 servings: 3 * 5/4
        assert_eq!(recipe.servings(), Some(5));
        assert!((recipe.ingredients()[0].count.unwrap() - 3.75).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_refetch_discards_parsed_state() {
        let source = setup_source(Some(4), Some(30), &["2 cups flour"]);
        let mut recipe = setup_ready_recipe(&source).await;
        assert_eq!(recipe.phase(), Phase::Ready);

        recipe.fetch(&source).await.unwrap();
        assert_eq!(recipe.phase(), Phase::Fetched);
        assert!(recipe.ingredients().is_empty());
    }
}
