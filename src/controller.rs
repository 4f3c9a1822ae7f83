//! # Application Controller Module
//!
//! The coordination core. [`App`] owns the whole application state and binds
//! user intents to entity operations and render calls. Handlers run on a
//! single-threaded cooperative scheduler and suspend only while fetching, so
//! state borrows never cross an await point.
//!
//! Overlapping fetches into the same state slot (two rapid searches, or a
//! navigation racing another navigation) are fenced with per-slot sequence
//! numbers: each dispatch bumps its slot's sequence, and a response arriving
//! after a newer dispatch is discarded without touching state or the screen.
//! The last dispatched request wins, never the last response to arrive.
//!
//! Only the controller talks to the user about failures; entities report
//! through `Result`s and sentinel values.

use std::cell::{Cell, Ref, RefCell};

use tracing::{debug, error, info, warn};

use crate::api::RecipeSource;
use crate::likes::Likes;
use crate::recipe::{Direction, Recipe};
use crate::search::Search;
use crate::shopping_list::ShoppingList;
use crate::storage::KeyValueStore;
use crate::view::{Region, View};

/// Message shown when a search cannot be completed
const SEARCH_ALERT: &str = "Something went wrong with the search";

/// Message shown when a recipe cannot be loaded
const RECIPE_ALERT: &str = "Error processing recipe!";

/// Everything the application knows at a point in time.
///
/// The entity containers are present from startup; only the search and the
/// shown recipe are optional, because neither exists before the user asks
/// for them.
pub struct AppState {
    /// Most recent completed search
    pub search: Option<Search>,
    /// Recipe currently shown
    pub recipe: Option<Recipe>,
    /// Session shopping list
    pub list: ShoppingList,
    /// Persisted favorites
    pub likes: Likes,
}

/// The application: state plus the collaborators every handler needs
pub struct App<S: RecipeSource, V: View> {
    state: RefCell<AppState>,
    source: S,
    view: V,
    page_size: usize,
    search_seq: Cell<u64>,
    recipe_seq: Cell<u64>,
}

impl<S: RecipeSource, V: View> App<S, V> {
    /// Assemble the application around its collaborators
    pub fn new(source: S, view: V, likes_store: Box<dyn KeyValueStore>, page_size: usize) -> Self {
        Self {
            state: RefCell::new(AppState {
                search: None,
                recipe: None,
                list: ShoppingList::new(),
                likes: Likes::new(likes_store),
            }),
            source,
            view,
            page_size,
            search_seq: Cell::new(0),
            recipe_seq: Cell::new(0),
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Restore persisted favorites and initialize their indicators
    pub fn startup(&self) {
        let mut state = self.state.borrow_mut();
        state.likes.read_storage();
        self.view.toggle_like_menu(state.likes.num_likes());
        for like in state.likes.iter() {
            self.view.render_like(like);
        }
        info!(likes = state.likes.num_likes(), "Application started");
    }

    /// Run the search the view currently holds; empty queries are ignored
    pub async fn control_search(&self) {
        let query = self.view.get_query();
        if query.is_empty() {
            return;
        }

        let seq = self.search_seq.get() + 1;
        self.search_seq.set(seq);

        info!(query = %query, "Searching recipes");
        let mut search = Search::new(&query);
        self.view.show_loading(Region::SearchResults);

        let outcome = search.fetch(&self.source).await;

        if self.search_seq.get() != seq {
            info!(query = %query, "Discarding stale search response");
            return;
        }

        match outcome {
            Ok(()) => {
                info!(query = %query, results = search.results().len(), "Search completed");
                self.view.render_results(search.page_slice(1, self.page_size), 1);
                self.view.clear_loading();
                self.state.borrow_mut().search = Some(search);
            }
            Err(err) => {
                warn!(query = %query, error = %err, "Search failed");
                self.view.alert(SEARCH_ALERT);
                self.view.clear_loading();
            }
        }
    }

    /// Re-render the stored results at the given page; no fetch involved
    pub fn control_page(&self, page: usize) {
        let state = self.state.borrow();
        if let Some(search) = &state.search {
            self.view.render_results(search.page_slice(page, self.page_size), page);
        }
    }

    /// Load and show the recipe the view's location points at.
    ///
    /// Always fetches in full, even when the id matches the recipe already
    /// shown. On failure nothing stays rendered and no recipe is kept.
    pub async fn control_recipe(&self) {
        let id = self.view.location_id();
        if id.is_empty() {
            return;
        }

        let seq = self.recipe_seq.get() + 1;
        self.recipe_seq.set(seq);

        info!(recipe_id = %id, "Loading recipe");
        self.view.clear_recipe();
        self.view.show_loading(Region::Recipe);
        if self.state.borrow().search.is_some() {
            self.view.highlight_selected(&id);
        }

        let mut recipe = Recipe::new(&id);
        let outcome = recipe.fetch(&self.source).await;

        if self.recipe_seq.get() != seq {
            info!(recipe_id = %id, "Discarding stale recipe response");
            return;
        }

        match outcome {
            Ok(()) => {
                recipe.parse_ingredients();
                recipe.calc_time();
                recipe.calc_servings();

                let liked = self.state.borrow().likes.is_liked(&id);
                self.view.clear_loading();
                self.view.render_recipe(&recipe, liked);
                self.state.borrow_mut().recipe = Some(recipe);
            }
            Err(err) => {
                error!(recipe_id = %id, error = %err, "Recipe fetch failed");
                self.view.alert(RECIPE_ALERT);
                self.view.clear_loading();
                self.state.borrow_mut().recipe = None;
            }
        }
    }

    /// Adjust the shown recipe's servings by one step.
    ///
    /// Needs a fully prepared recipe; decreasing is refused at one serving.
    /// Re-renders only the servings figure and ingredient quantities.
    pub fn control_servings(&self, direction: Direction) {
        let mut state = self.state.borrow_mut();
        let recipe = match state.recipe.as_mut() {
            Some(recipe) if recipe.is_ready() => recipe,
            _ => return,
        };
        if direction == Direction::Decrease && recipe.servings().is_some_and(|n| n <= 1) {
            return;
        }
        if recipe.update_servings(direction) {
            self.view.update_servings_ingredients(recipe);
        }
    }

    /// Copy every ingredient of the shown recipe into the shopping list.
    ///
    /// Items are snapshots at their current scaled quantities, not live
    /// references into the recipe.
    pub fn control_add_to_list(&self) {
        let mut state = self.state.borrow_mut();
        let AppState { recipe, list, .. } = &mut *state;
        let recipe = match recipe.as_ref() {
            Some(recipe) if recipe.is_ready() => recipe,
            _ => return,
        };
        for ingredient in recipe.ingredients() {
            let item = list.add_item(ingredient.count, &ingredient.unit, &ingredient.name);
            self.view.render_item(item);
        }
        info!(
            recipe_id = %recipe.id(),
            items = recipe.ingredients().len(),
            "Added ingredients to shopping list"
        );
    }

    /// Flip the shown recipe's membership in the favorites
    pub fn control_like(&self) {
        let mut state = self.state.borrow_mut();
        let AppState { recipe, likes, .. } = &mut *state;
        let recipe = match recipe.as_ref() {
            Some(recipe) => recipe,
            None => return,
        };

        if !likes.is_liked(recipe.id()) {
            if let Some(like) = likes.add_like(
                recipe.id(),
                recipe.title(),
                recipe.author(),
                recipe.image_url(),
            ) {
                self.view.toggle_like_btn(true);
                self.view.render_like(&like);
            }
        } else {
            likes.delete_like(recipe.id());
            self.view.toggle_like_btn(false);
            self.view.delete_like(recipe.id());
        }
        self.view.toggle_like_menu(likes.num_likes());
    }

    /// Delete one shopping list item, mirroring the change in the view
    pub fn control_delete_item(&self, id: &str) {
        let deleted = self.state.borrow_mut().list.delete_item(id);
        if deleted {
            self.view.delete_item(id);
        } else {
            debug!(item_id = %id, "Ignoring delete for unknown shopping list item");
        }
    }

    /// Overwrite one shopping list item's count.
    ///
    /// Non-finite or negative counts and unknown ids are ignored without
    /// user-visible feedback.
    pub fn control_update_count(&self, id: &str, count: f64) {
        if !count.is_finite() || count < 0.0 {
            debug!(item_id = %id, count, "Ignoring invalid count update");
            return;
        }
        if !self.state.borrow_mut().list.update_count(id, count) {
            debug!(item_id = %id, "Ignoring count update for unknown shopping list item");
        }
    }
}
