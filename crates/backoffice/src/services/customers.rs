//! Customer service.

use shopdesk_core::{CustomerId, Email};

use crate::models::{CreateCustomerInput, Customer, UpdateCustomerInput};
use crate::store::SharedStore;

use super::{ServiceError, non_empty};

/// CRUD operations over customers.
///
/// Emails are unique across customers. Comparison is case-sensitive, so
/// `Ada@example.com` and `ada@example.com` are distinct addresses.
#[derive(Clone)]
pub struct CustomerService {
    store: SharedStore,
}

impl CustomerService {
    /// Create a service backed by the given store.
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All customers in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store lock is poisoned.
    pub fn list_all(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.store.read()?.customers.list())
    }

    /// Look up a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the id is absent.
    pub fn get_by_id(&self, id: CustomerId) -> Result<Customer, ServiceError> {
        self.store
            .read()?
            .customers
            .get(id)
            .ok_or_else(|| ServiceError::NotFound("Customer not found".to_owned()))
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Invalid` if a required field is missing or
    /// empty, the email is malformed, or the email is already taken.
    pub fn create(&self, input: CreateCustomerInput) -> Result<Customer, ServiceError> {
        let (Some(name), Some(surname), Some(email)) = (
            non_empty(input.name),
            non_empty(input.surname),
            non_empty(input.email),
        ) else {
            return Err(ServiceError::Invalid(
                "Name, surname, and email are required".to_owned(),
            ));
        };

        let email = Email::parse(&email)
            .map_err(|_| ServiceError::Invalid("Invalid email format".to_owned()))?;

        let mut store = self.store.write()?;
        if store.customers.iter().any(|c| c.email == email) {
            return Err(ServiceError::Invalid(
                "Customer with this email already exists".to_owned(),
            ));
        }

        Ok(store.customers.create(|id| Customer {
            id,
            name,
            surname,
            email,
        }))
    }

    /// Update a customer. Omitted fields keep their prior values.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Invalid` if no field is supplied or a supplied
    /// email is malformed or taken, and `ServiceError::NotFound` if the id
    /// is absent.
    pub fn update(
        &self,
        id: CustomerId,
        input: UpdateCustomerInput,
    ) -> Result<Customer, ServiceError> {
        if input.name.is_none() && input.surname.is_none() && input.email.is_none() {
            return Err(ServiceError::Invalid(
                "At least one field must be provided for update".to_owned(),
            ));
        }

        let email = input
            .email
            .as_deref()
            .map(|raw| {
                Email::parse(raw)
                    .map_err(|_| ServiceError::Invalid("Invalid email format".to_owned()))
            })
            .transpose()?;

        let mut store = self.store.write()?;
        if let Some(email) = &email
            && store.customers.iter().any(|c| c.email == *email && c.id != id)
        {
            return Err(ServiceError::Invalid(
                "Customer with this email already exists".to_owned(),
            ));
        }

        store
            .customers
            .update(id, |customer| {
                if let Some(name) = input.name {
                    customer.name = name;
                }
                if let Some(surname) = input.surname {
                    customer.surname = surname;
                }
                if let Some(email) = email {
                    customer.email = email;
                }
            })
            .ok_or_else(|| ServiceError::NotFound("Customer not found".to_owned()))
    }

    /// Delete a customer.
    ///
    /// Existing orders keep their embedded customer snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the id is absent.
    pub fn delete(&self, id: CustomerId) -> Result<(), ServiceError> {
        if self.store.write()?.customers.delete(id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Customer not found".to_owned()))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
