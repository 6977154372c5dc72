//! Word categories and secret word selection.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::WordError;

/// Category the secret word is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Every category pooled together.
    #[default]
    Mixed,
    /// A single named category of the word bank.
    Named(String),
}

impl Category {
    /// Creates a named category.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    /// Returns the raw category key (`"mixed"` for [`Category::Mixed`]).
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Mixed => "mixed",
            Self::Named(name) => name,
        }
    }
}

/// Displays the category as a topic label, with its first letter capitalized.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => {
                for upper in first.to_uppercase() {
                    write!(f, "{upper}")?;
                }
                f.write_str(chars.as_str())
            }
            None => Ok(()),
        }
    }
}

/// The word shown to regular players, with the category it was drawn under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    /// The word itself.
    pub word: String,
    /// The requested category; stays [`Category::Mixed`] for mixed rounds.
    pub category: Category,
}

/// Ordered word lists keyed by category name.
///
/// Duplicate words, within or across categories, are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    categories: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl WordBank {
    /// Creates an empty word bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, replacing the words of an existing one with the same name.
    ///
    /// # Example
    ///
    /// ```
    /// use impostor::WordBank;
    ///
    /// let bank = WordBank::new().with_category("colors", ["Red", "Blue"]);
    /// assert_eq!(bank.words("colors").map(<[_]>::len), Some(2));
    /// ```
    #[must_use]
    pub fn with_category<I, S>(mut self, name: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if let Some(&position) = self.index.get(name) {
            self.categories[position].1 = words;
        } else {
            self.index.insert(name.to_string(), self.categories.len());
            self.categories.push((name.to_string(), words));
        }
        self
    }

    /// Returns the category names in insertion order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the words of a category.
    #[must_use]
    pub fn words(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&position| self.categories[position].1.as_slice())
    }

    /// Returns whether `category` can be selected from this bank.
    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        match category {
            Category::Mixed => true,
            Category::Named(name) => self.index.contains_key(name.as_str()),
        }
    }

    /// Total number of words across all categories, duplicates included.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.categories.iter().map(|(_, words)| words.len()).sum()
    }

    /// Picks the secret word for a round.
    ///
    /// A named category draws uniformly from its own list. [`Category::Mixed`]
    /// draws uniformly from every list laid end to end, so a word listed twice
    /// is twice as likely.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::UnknownCategory`] if a named category is missing
    /// and [`WordError::EmptyDataset`] if the pool has no words.
    pub fn select<R: Rng + ?Sized>(
        &self,
        category: &Category,
        rng: &mut R,
    ) -> Result<SecretWord, WordError> {
        let word = match category {
            Category::Mixed => {
                let total = self.total_words();
                if total == 0 {
                    return Err(WordError::EmptyDataset);
                }
                let pick = rng.random_range(0..total);
                self.categories
                    .iter()
                    .flat_map(|(_, words)| words.iter())
                    .nth(pick)
                    .ok_or(WordError::EmptyDataset)?
            }
            Category::Named(name) => {
                let words = self.words(name).ok_or(WordError::UnknownCategory)?;
                if words.is_empty() {
                    return Err(WordError::EmptyDataset);
                }
                &words[rng.random_range(0..words.len())]
            }
        };

        Ok(SecretWord {
            word: word.clone(),
            category: category.clone(),
        })
    }

    /// The built-in word bank: five categories of twenty words each.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with_category(
                "movies",
                [
                    "Titanic",
                    "Avatar",
                    "The Matrix",
                    "Inception",
                    "Frozen",
                    "The Godfather",
                    "Star Wars",
                    "Jurassic Park",
                    "Lion King",
                    "Avengers",
                    "Harry Potter",
                    "Shrek",
                    "Home Alone",
                    "Spider-Man",
                    "Frozen",
                    "Forrest Gump",
                    "Gladiator",
                    "Interstellar",
                    "Joker",
                    "Coco",
                ],
            )
            .with_category(
                "objects",
                [
                    "Chair",
                    "Laptop",
                    "Umbrella",
                    "Toothbrush",
                    "Bicycle",
                    "Headphones",
                    "Clock",
                    "Mirror",
                    "Wallet",
                    "Backpack",
                    "Camera",
                    "Guitar",
                    "Spoon",
                    "Pillow",
                    "Key",
                    "Shoe",
                    "Book",
                    "Candle",
                    "Remote",
                    "Glasses",
                ],
            )
            .with_category(
                "places",
                [
                    "Paris",
                    "School",
                    "Hospital",
                    "Beach",
                    "Library",
                    "Space Station",
                    "Zoo",
                    "Museum",
                    "Cinema",
                    "Gym",
                    "Airport",
                    "Restaurant",
                    "Park",
                    "Supermarket",
                    "Hotel",
                    "Bank",
                    "Farm",
                    "Stadium",
                    "Castle",
                    "Subway",
                ],
            )
            .with_category(
                "animals",
                [
                    "Dog",
                    "Cat",
                    "Elephant",
                    "Lion",
                    "Penguin",
                    "Giraffe",
                    "Shark",
                    "Eagle",
                    "Monkey",
                    "Kangaroo",
                    "Tiger",
                    "Bear",
                    "Zebra",
                    "Dolphin",
                    "Panda",
                    "Owl",
                    "Snake",
                    "Wolf",
                    "Rabbit",
                    "Crocodile",
                ],
            )
            .with_category(
                "food",
                [
                    "Pizza",
                    "Sushi",
                    "Burger",
                    "Ice Cream",
                    "Pasta",
                    "Taco",
                    "Salad",
                    "Chocolate",
                    "Apple",
                    "Bread",
                    "Steak",
                    "Fries",
                    "Soup",
                    "Cake",
                    "Cheese",
                    "Popcorn",
                    "Sandwich",
                    "Rice",
                    "Cookie",
                    "Egg",
                ],
            )
    }
}
