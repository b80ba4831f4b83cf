use crate::mvi::{Reducer, UiState};
use crate::optimistic::item::{Item, ItemId};
use crate::optimistic::mutation::Mutation;

/// Ordered item collection, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    items: Vec<Item>,
}

impl UiState for Collection {}

impl Collection {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }
}

impl From<Vec<Item>> for Collection {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Folds mutations into a collection.
///
/// `Add` appends; `Delete` removes the first item with a matching id and is
/// a no-op when there is none.
pub struct CollectionReducer;

impl Reducer for CollectionReducer {
    type State = Collection;
    type Intent = Mutation;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut items = state.items;
        match intent {
            Mutation::Add(item) => items.push(item),
            Mutation::Delete(id) => {
                if let Some(pos) = items.iter().position(|item| item.id == id) {
                    items.remove(pos);
                }
            }
        }
        Collection { items }
    }
}
