//! Obstacles and pickups scrolling toward the player.
//!
//! Each kind lives in its own ordered collection so policies can query and
//! clear a category directly instead of filtering one mixed list by tag.

use super::body::{Aabb, Edge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Ends the run on contact.
    Tree,
    /// Eaten on contact; grants multi-jump in variant A.
    Food,
    /// Flips gravity for a while.
    Bolt,
    /// Clears every tree on screen (variant B).
    Kong,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Tree,
        ItemKind::Food,
        ItemKind::Bolt,
        ItemKind::Kong,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Food => "food",
            Self::Bolt => "bolt",
            Self::Kong => "kong",
        }
    }

    /// Gap between the floor surface and the item, in pixels.
    pub fn floor_offset(&self) -> f64 {
        match self {
            Self::Tree => 0.0,
            Self::Food => 10.0,
            Self::Bolt => 5.0,
            Self::Kong => 0.0,
        }
    }

    /// Sprite size. Trees have a random height and are sized at spawn.
    pub fn sprite_size(&self) -> Option<(f64, f64)> {
        match self {
            Self::Tree => None,
            Self::Food => Some((32.0, 32.0)),
            Self::Bolt => Some((28.0, 40.0)),
            Self::Kong => Some((56.0, 56.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub bounds: Aabb,
    /// Leftward speed in pixels per second, fixed at spawn.
    pub velocity: f64,
    /// Floor edge the item was placed against.
    pub anchor: Edge,
    pub flip_y: bool,
}

impl Item {
    /// The point the item was positioned by: bottom-left when anchored to the
    /// bottom floor, top-left when anchored to the top.
    pub fn anchor_point(&self) -> (f64, f64) {
        match self.anchor {
            Edge::Bottom => (self.bounds.x, self.bounds.bottom()),
            Edge::Top => (self.bounds.x, self.bounds.y),
        }
    }
}

/// All live items, one ordered list per kind.
#[derive(Debug, Clone, Default)]
pub struct Items {
    trees: Vec<Item>,
    foods: Vec<Item>,
    bolts: Vec<Item>,
    kongs: Vec<Item>,
    next_id: u64,
}

impl Items {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        kind: ItemKind,
        bounds: Aabb,
        velocity: f64,
        anchor: Edge,
        flip_y: bool,
    ) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.list_mut(kind).push(Item {
            id,
            kind,
            bounds,
            velocity,
            anchor,
            flip_y,
        });
        id
    }

    pub fn of(&self, kind: ItemKind) -> &[Item] {
        match kind {
            ItemKind::Tree => &self.trees,
            ItemKind::Food => &self.foods,
            ItemKind::Bolt => &self.bolts,
            ItemKind::Kong => &self.kongs,
        }
    }

    fn list_mut(&mut self, kind: ItemKind) -> &mut Vec<Item> {
        match kind {
            ItemKind::Tree => &mut self.trees,
            ItemKind::Food => &mut self.foods,
            ItemKind::Bolt => &mut self.bolts,
            ItemKind::Kong => &mut self.kongs,
        }
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.of(kind).len()
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        !self.of(kind).is_empty()
    }

    pub fn get(&self, kind: ItemKind, id: ItemId) -> Option<&Item> {
        self.of(kind).iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, kind: ItemKind, id: ItemId) -> Option<&mut Item> {
        self.list_mut(kind).iter_mut().find(|item| item.id == id)
    }

    pub fn remove(&mut self, kind: ItemKind, id: ItemId) -> Option<Item> {
        let list = self.list_mut(kind);
        let index = list.iter().position(|item| item.id == id)?;
        Some(list.remove(index))
    }

    /// Remove every item of one kind, returning them in spawn order.
    pub fn take(&mut self, kind: ItemKind) -> Vec<Item> {
        std::mem::take(self.list_mut(kind))
    }

    pub fn clear(&mut self, kind: ItemKind) {
        self.list_mut(kind).clear();
    }

    pub fn clear_all(&mut self) {
        for kind in ItemKind::ALL {
            self.clear(kind);
        }
    }

    pub fn len(&self) -> usize {
        ItemKind::ALL.iter().map(|&kind| self.count(kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.trees
            .iter()
            .chain(&self.foods)
            .chain(&self.bolts)
            .chain(&self.kongs)
    }

    /// Ids of the items of `kind` overlapping `bounds`.
    pub fn overlapping(&self, kind: ItemKind, bounds: &Aabb) -> Vec<ItemId> {
        self.of(kind)
            .iter()
            .filter(|item| item.bounds.overlaps(bounds))
            .map(|item| item.id)
            .collect()
    }

    /// Scroll everything left by its own velocity.
    pub fn advance(&mut self, dt: f64) {
        for kind in ItemKind::ALL {
            for item in self.list_mut(kind) {
                item.bounds.x -= item.velocity * dt;
            }
        }
    }

    /// Drop items that have fully left the screen on the left. Returns how
    /// many were removed.
    pub fn remove_offscreen(&mut self) -> usize {
        let before = self.len();
        for kind in ItemKind::ALL {
            self.list_mut(kind).retain(|item| item.bounds.right() > 0.0);
        }
        before - self.len()
    }
}
