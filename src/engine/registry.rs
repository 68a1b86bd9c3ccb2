use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryId(u64);

/// One-way "has entered the viewport" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFlag(bool);

impl RevealFlag {
    pub fn is_revealed(self) -> bool {
        self.0
    }

    /// Returns true only on the false -> true transition.
    pub fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }
}

pub struct RevealEntry<B> {
    pub surface: B,
    pub flag: RevealFlag,
}

struct Entries<L, B> {
    next_id: Cell<u64>,
    layers: Vec<(EntryId, L)>,
    blocks: Vec<(EntryId, RevealEntry<B>)>,
}

/// Parallax layers and reveal blocks, built once by the page root and shared
/// with every section through context. Cloning shares the same entries.
pub struct Registry<L, B> {
    entries: Rc<RefCell<Entries<L, B>>>,
}

impl<L, B> Clone for Registry<L, B> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<L, B> PartialEq for Registry<L, B> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<L, B> Default for Registry<L, B> {
    fn default() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Entries {
                next_id: Cell::new(0),
                layers: Vec::new(),
                blocks: Vec::new(),
            })),
        }
    }
}

impl<L, B> Registry<L, B> {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> EntryId {
        let entries = self.entries.borrow();
        let id = entries.next_id.get();
        entries.next_id.set(id + 1);
        EntryId(id)
    }

    pub fn add_layer(&self, layer: L) -> EntryId {
        let id = self.next_id();
        self.entries.borrow_mut().layers.push((id, layer));
        id
    }

    pub fn remove_layer(&self, id: EntryId) {
        self.entries.borrow_mut().layers.retain(|(lid, _)| *lid != id);
    }

    pub fn add_block(&self, surface: B) -> EntryId {
        let id = self.next_id();
        self.entries.borrow_mut().blocks.push((
            id,
            RevealEntry {
                surface,
                flag: RevealFlag::default(),
            },
        ));
        id
    }

    pub fn remove_block(&self, id: EntryId) {
        self.entries.borrow_mut().blocks.retain(|(bid, _)| *bid != id);
    }

    pub fn layer_count(&self) -> usize {
        self.entries.borrow().layers.len()
    }

    pub fn block_count(&self) -> usize {
        self.entries.borrow().blocks.len()
    }

    #[cfg(test)]
    pub fn is_revealed(&self, id: EntryId) -> bool {
        self.entries
            .borrow()
            .blocks
            .iter()
            .find(|(bid, _)| *bid == id)
            .map_or(false, |(_, entry)| entry.flag.is_revealed())
    }

    /// Visits layers in registration order. `f` must not touch the registry.
    pub fn for_each_layer(&self, mut f: impl FnMut(&L)) {
        for (_, layer) in self.entries.borrow().layers.iter() {
            f(layer);
        }
    }

    /// Visits blocks in registration order. `f` must not touch the registry.
    pub fn for_each_block(&self, mut f: impl FnMut(&mut RevealEntry<B>)) {
        for (_, entry) in self.entries.borrow_mut().blocks.iter_mut() {
            f(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_flag_transitions_once() {
        let mut flag = RevealFlag::default();
        assert!(!flag.is_revealed());
        assert!(flag.reveal());
        assert!(!flag.reveal());
        assert!(flag.is_revealed());
    }

    #[test]
    fn entries_register_and_unregister() {
        let registry: Registry<&str, &str> = Registry::new();
        let hero = registry.add_layer("hero-glow");
        registry.add_layer("story-glow");
        let card = registry.add_block("feature-card");
        assert_eq!(registry.layer_count(), 2);
        assert_eq!(registry.block_count(), 1);

        registry.remove_layer(hero);
        registry.remove_block(card);
        assert_eq!(registry.layer_count(), 1);
        assert_eq!(registry.block_count(), 0);
        assert!(!registry.is_revealed(card));
    }

    #[test]
    fn clones_share_entries() {
        let registry: Registry<u8, u8> = Registry::new();
        let shared = registry.clone();
        shared.add_block(1);
        assert_eq!(registry.block_count(), 1);
        assert!(registry == shared);
        assert!(registry != Registry::new());
    }

    #[test]
    fn visits_layers_in_registration_order() {
        let registry: Registry<u8, ()> = Registry::new();
        for i in 0..4 {
            registry.add_layer(i);
        }
        let mut seen = Vec::new();
        registry.for_each_layer(|l| seen.push(*l));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
