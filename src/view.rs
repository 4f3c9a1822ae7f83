//! # View Module
//!
//! The render surface the controller drives. Implementations are synchronous
//! and infallible from the controller's point of view; whatever can go wrong
//! while rendering stays inside the implementation.
//!
//! The module also ships [`RecordingView`], a double that records every call
//! in order so tests can assert exact render sequences.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::api::RecipeSummary;
use crate::likes::Like;
use crate::recipe::Recipe;
use crate::shopping_list::ShoppingItem;

/// Screen region a loading indicator can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchResults,
    Recipe,
}

/// Every render call the application core makes
pub trait View {
    /// Current search query as entered by the user; empty when none
    fn get_query(&self) -> String;

    /// Recipe id the user navigated to; empty when none
    fn location_id(&self) -> String;

    /// Show one page of search results, replacing any previous page
    fn render_results(&self, results: &[RecipeSummary], page: usize);

    /// Show a fully prepared recipe
    fn render_recipe(&self, recipe: &Recipe, liked: bool);

    /// Refresh only the servings figure and the ingredient quantities
    fn update_servings_ingredients(&self, recipe: &Recipe);

    /// Remove whatever recipe is currently shown
    fn clear_recipe(&self);

    /// Mark one result row as the selected recipe
    fn highlight_selected(&self, id: &str);

    /// Show a newly added shopping list item
    fn render_item(&self, item: &ShoppingItem);

    /// Remove a shopping list item from display
    fn delete_item(&self, id: &str);

    /// Flip the like button between liked and not-liked
    fn toggle_like_btn(&self, liked: bool);

    /// Show a favorite in the likes menu
    fn render_like(&self, like: &Like);

    /// Remove a favorite from the likes menu
    fn delete_like(&self, id: &str);

    /// Show or hide the likes menu indicator for the given count
    fn toggle_like_menu(&self, num_likes: usize);

    /// Show a loading indicator in a region
    fn show_loading(&self, region: Region);

    /// Remove the loading indicator
    fn clear_loading(&self);

    /// Tell the user something went wrong
    fn alert(&self, message: &str);
}

/// One recorded render call
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    RenderResults { ids: Vec<String>, page: usize },
    RenderRecipe { id: String, liked: bool },
    UpdateServingsIngredients { servings: Option<u32> },
    ClearRecipe,
    HighlightSelected { id: String },
    RenderItem { item_id: String, name: String },
    DeleteItem { item_id: String },
    ToggleLikeBtn { liked: bool },
    RenderLike { id: String },
    DeleteLike { id: String },
    ToggleLikeMenu { count: usize },
    ShowLoading { region: Region },
    ClearLoading,
    Alert { message: String },
}

/// [`View`] double that records calls and replays queued user inputs.
///
/// Clones share the same call log and input queues, so a test keeps one
/// handle while the application owns another.
#[derive(Clone, Default)]
pub struct RecordingView {
    calls: Arc<Mutex<Vec<ViewCall>>>,
    queries: Arc<Mutex<VecDeque<String>>>,
    locations: Arc<Mutex<VecDeque<String>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the query the next `get_query` call returns
    pub fn push_query(&self, query: &str) {
        self.queries.lock().unwrap().push_back(query.to_string());
    }

    /// Queue the id the next `location_id` call returns
    pub fn push_location(&self, id: &str) {
        self.locations.lock().unwrap().push_back(id.to_string());
    }

    /// Snapshot of every call recorded so far, in order
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drop the recorded calls, keeping queued inputs
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: ViewCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl View for RecordingView {
    fn get_query(&self) -> String {
        self.queries.lock().unwrap().pop_front().unwrap_or_default()
    }

    fn location_id(&self) -> String {
        self.locations.lock().unwrap().pop_front().unwrap_or_default()
    }

    fn render_results(&self, results: &[RecipeSummary], page: usize) {
        self.record(ViewCall::RenderResults {
            ids: results.iter().map(|summary| summary.id.clone()).collect(),
            page,
        });
    }

    fn render_recipe(&self, recipe: &Recipe, liked: bool) {
        self.record(ViewCall::RenderRecipe {
            id: recipe.id().to_string(),
            liked,
        });
    }

    fn update_servings_ingredients(&self, recipe: &Recipe) {
        self.record(ViewCall::UpdateServingsIngredients {
            servings: recipe.servings(),
        });
    }

    fn clear_recipe(&self) {
        self.record(ViewCall::ClearRecipe);
    }

    fn highlight_selected(&self, id: &str) {
        self.record(ViewCall::HighlightSelected { id: id.to_string() });
    }

    fn render_item(&self, item: &ShoppingItem) {
        self.record(ViewCall::RenderItem {
            item_id: item.id.clone(),
            name: item.name.clone(),
        });
    }

    fn delete_item(&self, id: &str) {
        self.record(ViewCall::DeleteItem {
            item_id: id.to_string(),
        });
    }

    fn toggle_like_btn(&self, liked: bool) {
        self.record(ViewCall::ToggleLikeBtn { liked });
    }

    fn render_like(&self, like: &Like) {
        self.record(ViewCall::RenderLike {
            id: like.id.clone(),
        });
    }

    fn delete_like(&self, id: &str) {
        self.record(ViewCall::DeleteLike { id: id.to_string() });
    }

    fn toggle_like_menu(&self, num_likes: usize) {
        self.record(ViewCall::ToggleLikeMenu { count: num_likes });
    }

    fn show_loading(&self, region: Region) {
        self.record(ViewCall::ShowLoading { region });
    }

    fn clear_loading(&self) {
        self.record(ViewCall::ClearLoading);
    }

    fn alert(&self, message: &str) {
        self.record(ViewCall::Alert {
            message: message.to_string(),
        });
    }
}
