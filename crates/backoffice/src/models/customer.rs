//! Customer domain models.

use serde::{Deserialize, Serialize};
use shopdesk_core::{CustomerId, Email};

use crate::store::Record;

/// A customer of the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Email address, unique across customers (case-sensitive).
    pub email: Email,
}

impl Record for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }
}

/// Input for creating a customer.
///
/// Fields are optional at the wire level; the service reports missing ones
/// with a single message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerInput {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

/// Input for updating a customer. Omitted fields keep their prior values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomerInput {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}
