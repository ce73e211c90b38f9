//! Entity trait: identity + continuity across state changes.

use std::collections::HashSet;

use crate::error::{DomainError, DomainResult};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Fail with an invariant violation naming the first repeated id.
pub fn ensure_unique_ids<'a, E, I>(entities: I) -> DomainResult<()>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    for entity in entities {
        let id = Entity::id(entity);
        if !seen.insert(id) {
            return Err(DomainError::invariant(format!("duplicate id {id}")));
        }
    }
    Ok(())
}
