//! In-memory authorized-user list with owner-only mutation.
//!
//! Membership lives for the lifetime of the process and starts as just the
//! owner; there is no persistence, so a restart resets the list. Reads are
//! open to any caller while mutation is gated on the owner identifier —
//! that asymmetry is inherited behavior, kept as-is.

use std::sync::RwLock;

/// Outcome of an `authorize` request by the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantOutcome {
    Granted,
    AlreadyAuthorized,
}

/// Outcome of an `unauthorize` request by the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeOutcome {
    Revoked,
    NotAuthorized,
    /// The owner entry is permanent and can never be revoked.
    OwnerImmune,
}

/// A mutation request from anyone but the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerOnly;

/// Access-control service owning the authorized-user set.
///
/// Constructed once at startup and shared behind an `Arc`; the lock is
/// held only for the duration of each membership operation.
pub struct AccessControl {
    owner: i64,
    users: RwLock<Vec<i64>>,
}

impl AccessControl {
    pub fn new(owner: i64) -> Self {
        Self {
            owner,
            users: RwLock::new(vec![owner]),
        }
    }

    pub fn owner(&self) -> i64 {
        self.owner
    }

    pub fn is_owner(&self, user_id: i64) -> bool {
        user_id == self.owner
    }

    /// Membership test against the current authorized set.
    pub fn is_authorized(&self, user_id: i64) -> bool {
        self.users
            .read()
            .expect("access list lock poisoned")
            .contains(&user_id)
    }

    /// Add `target` to the authorized set. Owner-only.
    pub fn authorize(&self, requester: i64, target: i64) -> Result<GrantOutcome, OwnerOnly> {
        if requester != self.owner {
            return Err(OwnerOnly);
        }

        let mut users = self.users.write().expect("access list lock poisoned");
        if users.contains(&target) {
            Ok(GrantOutcome::AlreadyAuthorized)
        } else {
            users.push(target);
            Ok(GrantOutcome::Granted)
        }
    }

    /// Remove `target` from the authorized set. Owner-only; the owner
    /// entry itself is immune.
    pub fn unauthorize(&self, requester: i64, target: i64) -> Result<RevokeOutcome, OwnerOnly> {
        if requester != self.owner {
            return Err(OwnerOnly);
        }

        if target == self.owner {
            return Ok(RevokeOutcome::OwnerImmune);
        }

        let mut users = self.users.write().expect("access list lock poisoned");
        match users.iter().position(|&id| id == target) {
            Some(idx) => {
                users.remove(idx);
                Ok(RevokeOutcome::Revoked)
            }
            None => Ok(RevokeOutcome::NotAuthorized),
        }
    }

    /// Current membership in insertion order. No gate: anyone may list.
    pub fn list(&self) -> Vec<i64> {
        self.users
            .read()
            .expect("access list lock poisoned")
            .clone()
    }

    /// Number of authorized users. The `/stats` gate lives at the handler.
    pub fn count(&self) -> usize {
        self.users
            .read()
            .expect("access list lock poisoned")
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: i64 = 6390511215;

    #[test]
    fn test_owner_is_authorized_at_startup() {
        let acl = AccessControl::new(OWNER);
        assert!(acl.is_authorized(OWNER));
        assert!(!acl.is_authorized(42));
        assert_eq!(acl.count(), 1);
    }

    #[test]
    fn test_owner_can_grant_and_revoke() {
        let acl = AccessControl::new(OWNER);
        assert_eq!(acl.authorize(OWNER, 42), Ok(GrantOutcome::Granted));
        assert!(acl.is_authorized(42));

        assert_eq!(acl.unauthorize(OWNER, 42), Ok(RevokeOutcome::Revoked));
        assert!(!acl.is_authorized(42));
    }

    #[test]
    fn test_non_owner_mutation_is_rejected_and_does_not_mutate() {
        let acl = AccessControl::new(OWNER);
        assert_eq!(acl.authorize(42, 43), Err(OwnerOnly));
        assert!(!acl.is_authorized(43));

        acl.authorize(OWNER, 42).unwrap();
        assert_eq!(acl.unauthorize(42, 42), Err(OwnerOnly));
        assert!(acl.is_authorized(42));
    }

    #[test]
    fn test_duplicate_grant_is_reported_and_idempotent() {
        let acl = AccessControl::new(OWNER);
        acl.authorize(OWNER, 42).unwrap();
        assert_eq!(
            acl.authorize(OWNER, 42),
            Ok(GrantOutcome::AlreadyAuthorized)
        );
        assert_eq!(acl.count(), 2);
    }

    #[test]
    fn test_revoking_absent_user_is_reported_and_no_op() {
        let acl = AccessControl::new(OWNER);
        assert_eq!(
            acl.unauthorize(OWNER, 42),
            Ok(RevokeOutcome::NotAuthorized)
        );
        assert_eq!(acl.count(), 1);
    }

    #[test]
    fn test_owner_cannot_be_revoked() {
        let acl = AccessControl::new(OWNER);
        assert_eq!(
            acl.unauthorize(OWNER, OWNER),
            Ok(RevokeOutcome::OwnerImmune)
        );
        assert!(acl.is_authorized(OWNER));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let acl = AccessControl::new(OWNER);
        acl.authorize(OWNER, 7).unwrap();
        acl.authorize(OWNER, 3).unwrap();
        acl.authorize(OWNER, 11).unwrap();
        assert_eq!(acl.list(), vec![OWNER, 7, 3, 11]);
    }
}
