//! Self-or-admin authorization rules for account lifecycle operations.
//!
//! All decisions here are pure functions of the acting and target
//! accounts; a failed check surfaces as `Unauthorized` and the checked
//! operation must not proceed.

use staykey_core::error::AppError;
use staykey_entity::account::{Account, Role};

/// Enforces role- and ownership-based authorization on account operations.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationPolicy;

impl AuthorizationPolicy {
    /// Creates a new policy instance.
    pub fn new() -> Self {
        Self
    }

    /// Whether the actor may read or modify the target account.
    ///
    /// True iff the actor is the target or the actor is an admin.
    pub fn can_modify(&self, actor: &Account, target: &Account) -> bool {
        actor.id == target.id || actor.role.is_admin()
    }

    /// Checks `can_modify`, returning `Unauthorized` when denied.
    pub fn require_can_modify(&self, actor: &Account, target: &Account) -> Result<(), AppError> {
        if self.can_modify(actor, target) {
            Ok(())
        } else {
            Err(AppError::unauthorized(format!(
                "Account {} may not modify account {}",
                actor.id, target.id
            )))
        }
    }

    /// Whether the actor may assign roles. Admin only; an admin may change
    /// any account's role, including their own.
    pub fn can_assign_role(&self, actor: &Account) -> bool {
        actor.role.is_admin()
    }

    /// Checks `can_assign_role`, returning `Unauthorized` when denied.
    pub fn require_can_assign_role(&self, actor: &Account) -> Result<(), AppError> {
        if self.can_assign_role(actor) {
            Ok(())
        } else {
            Err(AppError::unauthorized(format!(
                "Role '{}' may not assign roles",
                actor.role
            )))
        }
    }

    /// Checks whether a role may be requested at account creation.
    ///
    /// Requesting a non-default role requires an admin actor. An absent
    /// actor can only create default-role accounts.
    pub fn require_creation_role(
        &self,
        requested: Role,
        actor: Option<&Account>,
    ) -> Result<(), AppError> {
        if requested == Role::default() {
            return Ok(());
        }
        match actor {
            Some(actor) if actor.role.is_admin() => Ok(()),
            Some(actor) => Err(AppError::unauthorized(format!(
                "Role '{}' may not request role '{requested}' at creation",
                actor.role
            ))),
            None => Err(AppError::unauthorized(format!(
                "An admin actor is required to request role '{requested}' at creation"
            ))),
        }
    }
}
