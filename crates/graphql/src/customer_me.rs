//! `CustomerMe`: profile of the authenticated customer-portal user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use printerp_core::{CustomerId, TenantId, UserId};

use crate::document::{Field, GraphQlQuery, NoVariables, QueryDocument};

pub static CUSTOMER_ME: QueryDocument = QueryDocument::query(
    "CustomerMe",
    &[Field::object(
        "customerMe",
        &[
            Field::scalar("id"),
            Field::scalar("customerId"),
            Field::scalar("tenantId"),
            Field::scalar("email"),
            Field::scalar("firstName"),
            Field::scalar("lastName"),
            Field::scalar("role"),
            Field::scalar("mfaEnabled"),
            Field::scalar("isEmailVerified"),
            Field::scalar("preferredLanguage"),
            Field::scalar("timezone"),
            Field::scalar("lastLoginAt"),
            Field::object(
                "customer",
                &[Field::scalar("id"), Field::scalar("name"), Field::scalar("code")],
            ),
        ],
    )],
);

/// Marker type binding [`CUSTOMER_ME`] to its response shape.
#[derive(Debug, Clone, Copy)]
pub struct CustomerMe;

impl GraphQlQuery for CustomerMe {
    type Variables = NoVariables;
    type Data = CustomerMeData;

    fn document() -> &'static QueryDocument {
        &CUSTOMER_ME
    }
}

/// `data` of a `CustomerMe` response. `customerMe` is null for anonymous sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerMeData {
    pub customer_me: Option<CustomerMeUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerMeUser {
    pub id: UserId,
    pub customer_id: CustomerId,
    pub tenant_id: TenantId,

    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    pub role: String,

    pub mfa_enabled: bool,
    pub is_email_verified: bool,

    pub preferred_language: Option<String>,
    pub timezone: Option<String>,

    pub last_login_at: Option<DateTime<Utc>>,

    pub customer: Option<CustomerSummary>,
}

impl CustomerMeUser {
    /// "First Last", falling back to whichever part exists, then the email.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    pub code: String,
}
