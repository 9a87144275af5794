//! Team membership.
//!
//! A [`Team`] is a cheap, clonable handle to one shared roster of living
//! heroes. Every hero keeps a handle to the team it fights for and removes
//! itself when it falls; the battle loop holds another handle to see who is
//! still standing.

use std::cell::RefCell;
use std::rc::Rc;

use super::common::HeroId;
use super::hero::Hero;

/// Ordered roster of living heroes.
///
/// Clones share the same roster. Equality is identity: two handles are equal
/// when they point at the same roster.
#[derive(Clone, Debug, Default)]
pub struct Team {
    members: Rc<RefCell<Vec<HeroId>>>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a living hero to the roster. Returns false if it was already a
    /// member, is defeated, or was built for a different team (it could not
    /// leave this roster when it falls).
    pub fn enlist(&self, hero: &Hero) -> bool {
        if !hero.is_alive() || !hero.team().same_roster(self) || self.contains(hero.id()) {
            return false;
        }
        self.members.borrow_mut().push(hero.id());
        true
    }

    /// Removes a member. Removing an absent member is a no-op returning false.
    pub fn remove(&self, id: HeroId) -> bool {
        let mut members = self.members.borrow_mut();
        match members.iter().position(|member| *member == id) {
            Some(index) => {
                members.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: HeroId) -> bool {
        self.members.borrow().contains(&id)
    }

    /// Snapshot of the roster in enlistment order.
    ///
    /// Iterate the snapshot rather than the live roster when members may fall
    /// during the iteration.
    pub fn members(&self) -> Vec<HeroId> {
        self.members.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    /// Whether both handles refer to the same roster.
    pub fn same_roster(&self, other: &Team) -> bool {
        Rc::ptr_eq(&self.members, &other.members)
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.same_roster(other)
    }
}

impl Eq for Team {}
