//! Address repository.

use sqlx::PgPool;

use serene_essence_core::{AddressId, UserId};

use super::RepositoryError;
use crate::models::{Address, NewAddress};

/// Repository for saved shipping addresses.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an address and return its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails, including
    /// when `user_id` does not reference an existing user.
    pub async fn create(&self, address: &NewAddress) -> Result<AddressId, RepositoryError> {
        let (id,): (AddressId,) = sqlx::query_as(
            r"
            INSERT INTO addresses
                (user_id, full_name, address_line, city, state, zip_code, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(address.user_id)
        .bind(&address.full_name)
        .bind(&address.address_line)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip_code)
        .bind(&address.phone_number)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// List a user's addresses, oldest first. Unknown users have none.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let addresses = sqlx::query_as::<_, Address>(
            r"
            SELECT id, user_id, full_name, address_line, city, state, zip_code, phone_number
            FROM addresses
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(addresses)
    }
}
