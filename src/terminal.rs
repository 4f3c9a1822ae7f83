//! # Terminal View Module
//!
//! The terminal implementation of [`View`]. It plays the part a rendered
//! page plays elsewhere: the command loop stages typed inputs with
//! [`TerminalView::set_query`] / [`TerminalView::set_location`] before
//! dispatching a handler, and render calls print to stdout. Alerts go to
//! stderr.
//!
//! A terminal is append-only, so the "clear" calls have nothing to erase
//! and stay silent.

use std::cell::RefCell;

use crate::api::RecipeSummary;
use crate::ingredient::format_count;
use crate::likes::Like;
use crate::recipe::Recipe;
use crate::shopping_list::ShoppingItem;
use crate::view::{Region, View};

/// [`View`] rendering to the terminal, holding the latest typed inputs
#[derive(Default)]
pub struct TerminalView {
    query: RefCell<String>,
    location: RefCell<String>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the query the next search reads
    pub fn set_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
    }

    /// Stage the recipe id the next navigation reads
    pub fn set_location(&self, id: &str) {
        *self.location.borrow_mut() = id.to_string();
    }
}

fn item_text(item: &ShoppingItem) -> String {
    let mut parts: Vec<String> = Vec::new();
    let count = format_count(item.count);
    if !count.is_empty() {
        parts.push(count);
    }
    if !item.unit.is_empty() {
        parts.push(item.unit.clone());
    }
    parts.push(item.name.clone());
    parts.join(" ")
}

impl View for TerminalView {
    fn get_query(&self) -> String {
        self.query.borrow().clone()
    }

    fn location_id(&self) -> String {
        self.location.borrow().clone()
    }

    fn render_results(&self, results: &[RecipeSummary], page: usize) {
        if results.is_empty() {
            println!("No results on page {page}.");
            return;
        }
        println!("Results, page {page}:");
        for summary in results {
            println!("  [{}] {} by {}", summary.id, summary.title, summary.author);
        }
    }

    fn render_recipe(&self, recipe: &Recipe, liked: bool) {
        let marker = if liked { " ♥" } else { "" };
        println!("== {}{} ==", recipe.title(), marker);
        println!("by {}", recipe.author());
        if let (Some(servings), Some(minutes)) = (recipe.servings(), recipe.cook_time_minutes()) {
            println!("{servings} servings, about {minutes} minutes");
        }
        for ingredient in recipe.ingredients() {
            println!("  - {ingredient}");
        }
    }

    fn update_servings_ingredients(&self, recipe: &Recipe) {
        if let Some(servings) = recipe.servings() {
            println!("Now {servings} servings:");
        }
        for ingredient in recipe.ingredients() {
            println!("  - {ingredient}");
        }
    }

    fn clear_recipe(&self) {}

    fn highlight_selected(&self, id: &str) {
        println!("(selected {id})");
    }

    fn render_item(&self, item: &ShoppingItem) {
        println!("  + {}  (item {})", item_text(item), item.id);
    }

    fn delete_item(&self, id: &str) {
        println!("  removed item {id}");
    }

    fn toggle_like_btn(&self, liked: bool) {
        if liked {
            println!("♥ Recipe liked.");
        } else {
            println!("Recipe unliked.");
        }
    }

    fn render_like(&self, like: &Like) {
        println!("  ♥ [{}] {} by {}", like.id, like.title, like.author);
    }

    fn delete_like(&self, id: &str) {
        println!("  removed like {id}");
    }

    fn toggle_like_menu(&self, num_likes: usize) {
        println!("{num_likes} liked recipes.");
    }

    fn show_loading(&self, region: Region) {
        match region {
            Region::SearchResults => println!("Searching..."),
            Region::Recipe => println!("Loading recipe..."),
        }
    }

    fn clear_loading(&self) {}

    fn alert(&self, message: &str) {
        eprintln!("!! {message}");
    }
}
