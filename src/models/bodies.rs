use std::collections::BTreeMap;
use std::slice;

use crate::models::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BodyId(pub u32);

/// Ids are sequential and never reused. Iteration is in creation order.
#[derive(Debug, Clone, Default)]
pub struct Bodies {
    items: Vec<Body>,
    index: BTreeMap<BodyId, usize>,
    next_id: u32,
}

impl Bodies {
    pub fn new() -> Bodies {
        Default::default()
    }

    pub fn insert<F>(&mut self, make: F) -> BodyId
    where
        F: FnOnce(BodyId) -> Body,
    {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        let body = make(id);
        debug_assert_eq!(body.id(), id);
        self.index.insert(id, self.items.len());
        self.items.push(body);
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        match self.index.get(&id) {
            Some(&i) => Some(&mut self.items[i]),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<Body> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<Body> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.items
    }

    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        assert!(i < j, "pair_mut expects i < j");
        let (left, right) = self.items.as_mut_slice().split_at_mut(j);
        (&mut left[i], &mut right[0])
    }

    pub fn hit_test<P: HasPoint>(&self, point: P) -> Option<BodyId> {
        let point = point.point();
        self.items
            .iter()
            .find(|body| body.contains(point))
            .map(|body| body.id())
    }
}

impl<'a> IntoIterator for &'a Bodies {
    type Item = &'a Body;
    type IntoIter = slice::Iter<'a, Body>;

    fn into_iter(self) -> slice::Iter<'a, Body> {
        self.items.iter()
    }
}
