//! Stable author-identity assignment.

use indexmap::IndexMap;

use crate::types::{AuthorId, RawName};

/// The Author Identity Registry: a run-scoped mapping from trimmed author
/// names to densely-assigned integer ids.
///
/// Ids are handed out in first-seen order starting at the configured base
/// and are never reused or removed, so for a fixed corpus and iteration
/// order two runs produce identical mappings. `resolve` takes `&mut self`:
/// the registry is single-writer by contract and must be populated in one
/// sequential pass (the time-sorted corpus order used by the assembler).
#[derive(Clone, Debug)]
pub struct IdentityResolver {
    names_to_ids: IndexMap<RawName, AuthorId>,
    base: AuthorId,
}

impl IdentityResolver {
    /// Create an empty registry whose first id will be `base`.
    pub fn new(base: AuthorId) -> Self {
        Self {
            names_to_ids: IndexMap::new(),
            base,
        }
    }

    /// Return the id for `name`, assigning the next sequential id on first
    /// sight. The name is trimmed before lookup, so raw strings differing
    /// only in surrounding whitespace share one identity.
    pub fn resolve(&mut self, name: &str) -> AuthorId {
        let trimmed = name.trim();
        if let Some(id) = self.names_to_ids.get(trimmed) {
            return *id;
        }
        let id = self.base + self.names_to_ids.len();
        self.names_to_ids.insert(trimmed.to_string(), id);
        id
    }

    /// Look up a name without registering it.
    pub fn get(&self, name: &str) -> Option<AuthorId> {
        self.names_to_ids.get(name.trim()).copied()
    }

    /// Number of distinct identities registered so far.
    pub fn size(&self) -> usize {
        self.names_to_ids.len()
    }

    /// First id handed out by this registry.
    pub fn base(&self) -> AuthorId {
        self.base
    }

    /// Export the full registry in first-seen order.
    pub fn export(&self) -> Vec<(RawName, AuthorId)> {
        self.names_to_ids
            .iter()
            .map(|(name, id)| (name.clone(), *id))
            .collect()
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new(crate::constants::timeline::DEFAULT_ID_BASE)
    }
}
