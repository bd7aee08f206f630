use std::fmt;

use serde::Deserialize;

/// Identifier of an item.
///
/// Tags are trimmed and lowercased on construction, so `"Twig"` and `" twig"`
/// name the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct ItemTag(String);

impl ItemTag {
    /// Create a normalised tag.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_lowercase())
    }

    /// The normalised tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The indefinite article to print before this tag.
    pub fn article(&self) -> &'static str {
        indefinite_article(&self.0)
    }
}

/// `"an"` before a word starting with a vowel, `"a"` otherwise.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

impl fmt::Display for ItemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemTag {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// An ordered bag of item tags.
///
/// Every entity that holds items embeds its own `Inventory` by value; cloning
/// the entity clones the bag, so two entities never share one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<ItemTag>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `tag` is present.
    pub fn contains(&self, tag: &str) -> bool {
        let tag = ItemTag::new(tag);
        self.items.contains(&tag)
    }

    /// Append an item to the end of the bag. Duplicates are allowed.
    pub fn push(&mut self, tag: impl Into<ItemTag>) {
        self.items.push(tag.into());
    }

    /// Remove the first occurrence of `tag`. Returns whether anything was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let tag = ItemTag::new(tag);
        if let Some(pos) = self.items.iter().position(|t| *t == tag) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemTag> {
        self.items.iter()
    }

    /// Number of items, counting duplicates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Into<ItemTag>> FromIterator<T> for Inventory {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The inventory capability.
///
/// Implemented by every entity that carries items (locations and players).
/// Only the two accessors are required; the item operations come for free.
pub trait Holder {
    /// The entity's own inventory.
    fn inventory(&self) -> &Inventory;

    /// Mutable access to the entity's own inventory.
    fn inventory_mut(&mut self) -> &mut Inventory;

    /// True if the entity holds at least one `tag`.
    fn has_item(&self, tag: &str) -> bool {
        self.inventory().contains(tag)
    }

    /// Append `tag` to the entity's items.
    fn add_item(&mut self, tag: impl Into<ItemTag>) {
        self.inventory_mut().push(tag);
    }

    /// Remove one `tag` (the first one). Returns whether a removal happened.
    fn remove_item(&mut self, tag: &str) -> bool {
        self.inventory_mut().remove(tag)
    }
}
