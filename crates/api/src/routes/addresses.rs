//! Shipping address handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;

use serene_essence_core::UserId;

use crate::db::AddressRepository;
use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::models::{Address, NewAddress};
use crate::routes::{MessageResponse, non_blank};
use crate::state::AppState;

/// Body of `POST /save-address`.
///
/// `zip_code` and `phone_number` are stored as text but accepted as JSON
/// numbers too, since form libraries often coerce them.
#[derive(Debug, Deserialize)]
pub struct SaveAddressRequest {
    pub user_id: Option<UserId>,
    pub full_name: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone_number: Option<String>,
}

impl SaveAddressRequest {
    /// All fields, or `None` if any is absent or blank.
    fn into_new_address(self) -> Option<NewAddress> {
        Some(NewAddress {
            user_id: self.user_id?,
            full_name: non_blank(self.full_name)?,
            address_line: non_blank(self.address_line)?,
            city: non_blank(self.city)?,
            state: non_blank(self.state)?,
            zip_code: non_blank(self.zip_code)?,
            phone_number: non_blank(self.phone_number)?,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

/// Save a shipping address for a user.
#[instrument(skip(state, body))]
pub async fn save(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SaveAddressRequest>,
) -> Result<Json<MessageResponse>> {
    let address = body
        .into_new_address()
        .ok_or_else(|| AppError::BadRequest("Missing fields".to_string()))?;

    let id = AddressRepository::new(state.pool())
        .create(&address)
        .await
        .map_err(|e| AppError::internal("Address save failed", e))?;

    tracing::info!(address_id = %id, user_id = %address.user_id, "Address saved");
    Ok(Json(MessageResponse {
        message: "Address saved successfully",
    }))
}

/// List a user's saved addresses.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Json<Vec<Address>>> {
    let addresses = AddressRepository::new(state.pool())
        .list_for_user(user_id)
        .await
        .map_err(|e| AppError::internal("Could not fetch addresses", e))?;

    Ok(Json(addresses))
}
