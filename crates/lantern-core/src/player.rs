use crate::inventory::{Holder, Inventory};

/// A player character. Apart from what it carries it has no state.
///
/// Each player owns its inventory, so several players can coexist without
/// sharing items.
#[derive(Debug, Clone, Default)]
pub struct Player {
    inventory: Inventory,
}

impl Player {
    /// Create a player with empty hands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player already carrying `items`.
    pub fn carrying<T: Into<crate::ItemTag>>(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            inventory: items.into_iter().collect(),
        }
    }
}

impl Holder for Player {
    fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_do_not_share_inventories() {
        let mut alice = Player::new();
        let bob = Player::new();
        alice.add_item("lamp");
        assert!(alice.has_item("lamp"));
        assert!(!bob.has_item("lamp"));
    }

    #[test]
    fn carrying_seeds_items() {
        let mut p = Player::carrying(["sword", "rope"]);
        assert!(p.has_item("Sword"));
        assert!(p.remove_item("rope"));
        assert!(!p.remove_item("rope"));
        assert_eq!(p.inventory().len(), 1);
    }
}
