use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user account that owns a business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessOwner {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub mobile_number: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl BusinessOwner {
    pub fn full_name(&self) -> String {
        super::full_name(&self.first_name, &self.last_name)
    }
}

/// A business partner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Business {
    pub id: String,
    pub legal_name: String,
    pub brand_name: String,
    pub business_type: String,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: BusinessOwner,
}

impl Business {
    /// `City, State`, skipping whichever part is missing.
    pub fn location(&self) -> String {
        [self.city.as_str(), self.state.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_null_tax_numbers() {
        let business: Business = serde_json::from_value(serde_json::json!({
            "id": "b-1",
            "legalName": "Acme Corp",
            "brandName": "Acme",
            "businessType": "retail",
            "gstNumber": null,
            "city": "Pune",
            "state": "MH",
            "isVerified": true,
            "createdAt": "2024-02-10T12:00:00Z",
            "user": { "id": "u-1", "firstName": "Ravi", "lastName": "K" }
        }))
        .expect("business should deserialize");

        assert!(business.gst_number.is_none());
        assert!(business.pan_number.is_none());
        assert_eq!(business.location(), "Pune, MH");
        assert_eq!(business.user.full_name(), "Ravi K");
    }

    #[test]
    fn test_location_skips_missing_parts() {
        let business = Business {
            state: "KA".to_owned(),
            ..Business::default()
        };
        assert_eq!(business.location(), "KA");
    }
}
