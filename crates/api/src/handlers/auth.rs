//! Handlers for registration and login.

use axum::extract::State;
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::roles::{ROLE_DOCTOR, ROLE_PATIENT};
use glyco_core::validation::{is_present, require_present};
use glyco_db::models::doctor::DoctorProfileFields;
use glyco_db::models::patient::PatientProfileFields;
use glyco_db::models::user::{CreateUser, UserInfo};
use glyco_db::repositories::{DoctorRepo, PatientRepo, SpecialtyRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::from_body;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Credential part of the `POST /register` body.
///
/// The same body also carries the profile fields for the chosen role, which
/// are read separately into [`PatientProfileFields`] or [`DoctorProfileFields`].
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile to create alongside the user row.
enum NewProfile {
    Patient(PatientProfileFields),
    Doctor(DoctorProfileFields),
    None,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create a user and, for patients and doctors, the matching profile row.
/// Both rows are written in one transaction.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<MessageResponse>> {
    let input: RegisterRequest = from_body(&body)?;

    require_present(
        &[
            is_present(&input.email),
            is_present(&input.password),
            is_present(&input.confirm_password),
            is_present(&input.name),
            is_present(&input.role),
        ],
        "All fields required",
    )?;

    let (Some(email), Some(password), Some(confirm), Some(name), Some(role)) = (
        input.email.as_deref().map(str::trim),
        input.password.as_deref(),
        input.confirm_password.as_deref(),
        input.name.as_deref().map(str::trim),
        input.role.as_deref().map(str::trim),
    ) else {
        return Err(CoreError::Validation("All fields required".into()).into());
    };

    if password != confirm {
        return Err(CoreError::Validation("Passwords do not match".into()).into());
    }

    validate_password_strength(password, state.config.password_min_length)
        .map_err(CoreError::Validation)?;

    input
        .validate()
        .map_err(|_| CoreError::Validation("Invalid email format".into()))?;

    let profile = match role {
        ROLE_PATIENT => NewProfile::Patient(from_body(&body)?),
        ROLE_DOCTOR => {
            let fields: DoctorProfileFields = from_body(&body)?;
            if fields.specialty_id.is_none() {
                return Err(CoreError::Validation("Specialty is required".into()).into());
            }
            NewProfile::Doctor(fields)
        }
        _ => NewProfile::None,
    };

    let mut tx = state.pool.begin().await?;

    if UserRepo::email_exists(&mut *tx, email).await? {
        return Err(CoreError::Conflict("Email already registered".into()).into());
    }

    if let NewProfile::Doctor(fields) = &profile {
        if let Some(specialty_id) = fields.specialty_id {
            if !SpecialtyRepo::exists(&mut *tx, specialty_id).await? {
                return Err(CoreError::Validation(format!(
                    "Unknown specialty_id {specialty_id}"
                ))
                .into());
            }
        }
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &mut *tx,
        &CreateUser {
            email: email.to_string(),
            password_hash,
            name: name.to_string(),
            role: role.to_string(),
        },
    )
    .await?;

    match &profile {
        NewProfile::Patient(fields) => PatientRepo::create(&mut *tx, user.id, fields).await?,
        NewProfile::Doctor(fields) => DoctorRepo::create(&mut *tx, user.id, fields).await?,
        NewProfile::None => {}
    }

    tx.commit().await?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");

    Ok(Json(MessageResponse::new("User registered successfully!")))
}

/// POST /login
///
/// Verify email and password and return the user record. No session or token
/// is issued.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<UserInfo>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid credentials".into()));

    let (Some(email), Some(password)) = (input.email.as_deref(), input.password.as_deref())
    else {
        return Err(invalid());
    };

    let user = UserRepo::find_by_email(&state.pool, email.trim())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(UserInfo::from(user)))
}
