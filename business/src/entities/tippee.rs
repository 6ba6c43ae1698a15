use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TippeeProfile {
    pub id: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub country: Option<String>,
}

/// The business a tippee works for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkedBusiness {
    pub id: String,
    pub legal_name: String,
    pub brand_name: String,
    pub business_type: String,
    pub is_verified: bool,
}

/// A person who receives tips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tippee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub user_name: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: Option<TippeeProfile>,
    pub business: Option<LinkedBusiness>,
}

impl Tippee {
    pub fn full_name(&self) -> String {
        super::full_name(&self.first_name, &self.last_name)
    }
}
