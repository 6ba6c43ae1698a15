//! Sign-in and create-partner forms.
//!
//! Forms hold raw text as typed by the operator. `validate` trims it, drops
//! empty fields and produces the request body the API expects.

use regex::Regex;
use serde::Serialize;

use crate::error::ValidationError;

const COUNTRY_CODE_PATTERN: &str = r"^\+[1-9][0-9]{1,14}$";
const MOBILE_NUMBER_PATTERN: &str = r"^[0-9]{10,15}$";
const USER_NAME_PATTERN: &str = r"^[A-Za-z0-9_]{3,50}$";

fn matches(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(value))
}

fn is_country_code(s: &str) -> bool {
    matches(COUNTRY_CODE_PATTERN, s)
}

fn is_mobile_number(s: &str) -> bool {
    matches(MOBILE_NUMBER_PATTERN, s)
}

fn is_user_name(s: &str) -> bool {
    matches(USER_NAME_PATTERN, s)
}

fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    non_empty(value).ok_or_else(|| ValidationError::new(field, "is required"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigninForm {
    pub email: String,
    pub country_code: String,
    pub mobile_number: String,
    pub user_name: String,
    pub password: String,
}

/// `POST /auth/login` body. Exactly one identity is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub password: String,
}

impl SigninRequest {
    /// The identity the operator signed in with, for display.
    pub fn identity(&self) -> String {
        if let Some(email) = &self.email {
            return email.clone();
        }
        if let (Some(code), Some(mobile)) = (&self.country_code, &self.mobile_number) {
            return format!("{code} {mobile}");
        }
        self.user_name.clone().unwrap_or_default()
    }
}

impl SigninForm {
    /// A form where `login` is an email if it contains `@`, else a user name.
    pub fn with_login(login: &str, password: &str) -> Self {
        let login = login.trim();
        if login.contains('@') {
            Self {
                email: login.to_owned(),
                password: password.to_owned(),
                ..Self::default()
            }
        } else {
            Self {
                user_name: login.to_owned(),
                password: password.to_owned(),
                ..Self::default()
            }
        }
    }

    /// Email wins over phone, phone wins over user name.
    pub fn validate(&self) -> Result<SigninRequest, ValidationError> {
        let email = non_empty(&self.email);
        let country_code = non_empty(&self.country_code);
        let mobile_number = non_empty(&self.mobile_number);
        let user_name = non_empty(&self.user_name);

        if self.password.is_empty() {
            return Err(ValidationError::new("password", "Password is required"));
        }
        if country_code.is_some() != mobile_number.is_some() {
            return Err(ValidationError::new(
                "mobileNumber",
                "Country code and mobile number must be provided together",
            ));
        }

        let mut request = SigninRequest {
            email: None,
            country_code: None,
            mobile_number: None,
            user_name: None,
            password: self.password.clone(),
        };

        if let Some(email) = email {
            if !is_email(&email) {
                return Err(ValidationError::new("email", "Invalid email address"));
            }
            request.email = Some(email);
        } else if let (Some(code), Some(mobile)) = (country_code, mobile_number) {
            if !is_country_code(&code) {
                return Err(ValidationError::new(
                    "countryCode",
                    "Country code must look like +91",
                ));
            }
            if !is_mobile_number(&mobile) {
                return Err(ValidationError::new(
                    "mobileNumber",
                    "Mobile number must be 10 to 15 digits",
                ));
            }
            request.country_code = Some(code);
            request.mobile_number = Some(mobile);
        } else if let Some(name) = user_name {
            if !is_user_name(&name) {
                return Err(ValidationError::new(
                    "userName",
                    "Username must be 3 to 50 letters, digits or underscores",
                ));
            }
            request.user_name = Some(name);
        } else {
            return Err(ValidationError::new(
                "email",
                "Provide an email, a mobile number or a username",
            ));
        }

        Ok(request)
    }
}

/// Legal structure of a new partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Individual,
    Partnership,
    LimitedLiability,
    PrivateLimitedCompany,
    LimitedCompany,
}

impl EntityType {
    pub const ALL: &'static [Self] = &[
        Self::Individual,
        Self::Partnership,
        Self::LimitedLiability,
        Self::PrivateLimitedCompany,
        Self::LimitedCompany,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Partnership => "partnership",
            Self::LimitedLiability => "limited_liability",
            Self::PrivateLimitedCompany => "private_limited_company",
            Self::LimitedCompany => "limited_company",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Partnership => "Partnership",
            Self::LimitedLiability => "Limited Liability",
            Self::PrivateLimitedCompany => "Private Limited Company",
            Self::LimitedCompany => "Limited Company",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBusinessForm {
    pub user_id: String,
    pub legal_name: String,
    pub brand_name: String,
    pub business_type: String,
    pub entity_type: Option<EntityType>,
    pub pan_number: String,
    pub gst_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// `POST /admin/businesses` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessRequest {
    pub user_id: String,
    pub legal_name: String,
    pub brand_name: String,
    pub business_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    pub pan_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl CreateBusinessForm {
    pub fn validate(&self) -> Result<CreateBusinessRequest, ValidationError> {
        Ok(CreateBusinessRequest {
            user_id: required("userId", &self.user_id)?,
            legal_name: required("legalName", &self.legal_name)?,
            brand_name: required("brandName", &self.brand_name)?,
            business_type: required("businessType", &self.business_type)?,
            entity_type: self.entity_type,
            pan_number: required("panNumber", &self.pan_number)?,
            gst_number: non_empty(&self.gst_number),
            address: non_empty(&self.address),
            city: non_empty(&self.city),
            state: non_empty(&self.state),
            pincode: non_empty(&self.pincode),
        })
    }
}
