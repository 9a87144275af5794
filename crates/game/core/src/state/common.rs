use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_HERO_ID: AtomicU32 = AtomicU32::new(1);

/// Unique identifier for a hero, allocated at construction.
///
/// Identifiers are never reused within a process, so a stale id held by a
/// team or a back-reference can never point at a different hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeroId(pub u32);

impl HeroId {
    /// Allocates the next unused identifier.
    pub fn next() -> Self {
        Self(NEXT_HERO_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Non-owning reference to one skill instance: the hero that owns it and its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SkillRef {
    pub owner: HeroId,
    pub slot: usize,
}

impl SkillRef {
    pub const fn new(owner: HeroId, slot: usize) -> Self {
        Self { owner, slot }
    }
}

impl fmt::Display for SkillRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/skill[{}]", self.owner, self.slot)
    }
}
