//! # Souschef
//!
//! A recipe application core: search recipes, view one with scaled
//! servings, collect ingredients on a shopping list, and keep favorites
//! persisted across sessions.
//!
//! The crate is the whole application except its surfaces: rendering, the
//! recipe service and durable storage sit behind the [`view::View`],
//! [`api::RecipeSource`] and [`storage::KeyValueStore`] traits, so the
//! terminal binary and the test doubles drive the same core.

pub mod api;
pub mod config;
pub mod controller;
pub mod ingredient;
pub mod ingredient_parser;
pub mod likes;
pub mod recipe;
pub mod search;
pub mod shopping_list;
pub mod storage;
pub mod terminal;
pub mod units;
pub mod view;
