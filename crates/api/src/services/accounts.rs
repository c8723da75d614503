//! Back-office accounts: password login and the management screen.

use cardforge_core::error::CoreError;
use cardforge_core::roles::{authorize, Principal, Role};
use cardforge_core::types::DbId;
use cardforge_db::models::admin::{AdminResponse, CreateAdmin, UpdateAdmin};
use cardforge_db::repositories::AdminRepo;
use cardforge_db::DbPool;
use serde::Deserialize;

use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{is_unique_violation, AppError, AppResult};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Deserialize)]
pub struct NewAccount {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Check a username/password pair and return the account's principal.
///
/// Unknown usernames and wrong passwords fail identically.
pub async fn authenticate(pool: &DbPool, username: &str, password: &str) -> AppResult<Principal> {
    let account = AdminRepo::find_by_username(pool, username.trim())
        .await?
        .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    let valid = verify_password(password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::info!(username = %account.username, "Rejected login");
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }

    let role = Role::parse_account_role(&account.role).map_err(|_| {
        AppError::InternalError(format!("Account {} has role '{}'", account.id, account.role))
    })?;

    Ok(Principal::new(account.id.to_string(), account.username, role))
}

pub async fn list(pool: &DbPool, principal: Option<&Principal>) -> AppResult<Vec<AdminResponse>> {
    authorize(principal, Role::Admin)?;
    let accounts = AdminRepo::list(pool).await?;
    Ok(accounts.into_iter().map(AdminResponse::from).collect())
}

pub async fn create(
    pool: &DbPool,
    principal: Option<&Principal>,
    input: &NewAccount,
) -> AppResult<AdminResponse> {
    let principal = authorize(principal, Role::Admin)?;

    let username = required_username(&input.username)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| CoreError::validation("password", msg))?;
    let role = Role::parse_account_role(&input.role)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let dto = CreateAdmin {
        username: username.clone(),
        password_hash,
        role: role.as_str().to_string(),
    };
    let account = AdminRepo::create(pool, &dto)
        .await
        .map_err(|e| username_conflict(e, &username))?;

    tracing::info!(
        account_id = account.id,
        role = %role,
        admin = %principal.username,
        "Account created",
    );
    Ok(account.into())
}

/// Change an account's username and/or role. Passwords are not editable here.
pub async fn update(
    pool: &DbPool,
    principal: Option<&Principal>,
    account_id: DbId,
    input: &UpdateAdmin,
) -> AppResult<AdminResponse> {
    let principal = authorize(principal, Role::Admin)?;

    let username = input.username.as_deref().map(required_username).transpose()?;
    let role = input
        .role
        .as_deref()
        .map(Role::parse_account_role)
        .transpose()?
        .map(|r| r.as_str().to_string());

    let dto = UpdateAdmin {
        username: username.clone(),
        role,
    };
    let account = AdminRepo::update(pool, account_id, &dto)
        .await
        .map_err(|e| username_conflict(e, username.as_deref().unwrap_or_default()))?
        .ok_or_else(|| CoreError::not_found("Account", account_id))?;

    tracing::info!(account_id, admin = %principal.username, "Account updated");
    Ok(account.into())
}

fn required_username(value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("username", "must not be blank"));
    }
    Ok(trimmed.to_string())
}

fn username_conflict(err: sqlx::Error, username: &str) -> AppError {
    if is_unique_violation(&err) {
        CoreError::Conflict(format!("Username '{username}' is already taken")).into()
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn blank_username_is_rejected() {
        assert_matches!(
            required_username("   "),
            Err(CoreError::Validation { field, .. }) if field == "username"
        );
        assert_eq!(required_username("  mod ").unwrap(), "mod");
    }
}
