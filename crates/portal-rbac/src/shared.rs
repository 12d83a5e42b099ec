//! Replaceable authorizer snapshots.
//!
//! Policy is swapped whole: readers take an `Arc` to the current snapshot and
//! keep using it, so a reload never exposes a half-updated mapping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::authorize::Authorizer;

/// Process-wide handle to the current [`Authorizer`].
#[derive(Debug)]
pub struct SharedAuthorizer {
    current: RwLock<Arc<Authorizer>>,
    generation: AtomicU64,
}

impl SharedAuthorizer {
    pub fn new(authorizer: Authorizer) -> Self {
        Self {
            current: RwLock::new(Arc::new(authorizer)),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<Authorizer> {
        // The lock only guards an Arc swap, so a poisoned lock still holds a
        // complete snapshot.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publishes a new snapshot and returns the previous one.
    pub fn replace(&self, authorizer: Authorizer) -> Arc<Authorizer> {
        let next = Arc::new(authorizer);
        let previous = {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, next)
        };
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        info!(generation, "Authorization policy replaced");
        previous
    }

    /// Number of replacements since construction.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl Default for SharedAuthorizer {
    fn default() -> Self {
        Self::new(Authorizer::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::Permission;
    use crate::registry::{RoleRegistry, StandardGrants};
    use crate::roles::Role;
    use crate::routes::RouteMap;

    fn locked_down() -> Authorizer {
        Authorizer::new(RoleRegistry::new(), RouteMap::standard()).without_audit()
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let shared = SharedAuthorizer::new(Authorizer::standard().without_audit());
        let old = shared.snapshot();

        let previous = shared.replace(locked_down());

        assert!(Arc::ptr_eq(&old, &previous));
        assert!(old.has_permission(Role::User, Permission::DashboardView));
        assert!(!shared.snapshot().has_permission(Role::User, Permission::DashboardView));
        assert_eq!(shared.generation(), 1);
    }

    #[test]
    fn test_readers_see_whole_snapshots() {
        let full = || {
            let registry = RoleRegistry::new()
                .with_role(Role::User, StandardGrants::admin());
            Authorizer::new(registry, RouteMap::standard()).without_audit()
        };
        let shared = SharedAuthorizer::new(full());

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..500 {
                        let snapshot = shared.snapshot();
                        let count = snapshot.role_permissions(Role::User).len();
                        assert!(count == 0 || count == Permission::ALL.len());
                    }
                });
            }

            for i in 0..50 {
                if i % 2 == 0 {
                    shared.replace(locked_down());
                } else {
                    shared.replace(full());
                }
            }
        });

        assert_eq!(shared.generation(), 50);
    }
}
