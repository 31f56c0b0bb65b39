use crate::modules::branding::core::theme::ThemeCatalog;
use crate::shared::core::validation::{ValidationErrors, is_valid_email, is_valid_phone};
use serde::{Deserialize, Serialize};

/// Raw admin registration input as submitted by the kiosk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminRegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    pub brand_theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    pub brand_theme: String,
}

impl AdminRegistrationForm {
    pub fn validate(self, themes: &ThemeCatalog) -> Result<AdminProfile, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Name is required");
        if errors.require("email", &self.email, "Email is required")
            && !is_valid_email(self.email.trim())
        {
            errors.add("email", "Invalid email format");
        }
        if errors.require("phone", &self.phone, "Phone is required")
            && !is_valid_phone(self.phone.trim())
        {
            errors.add("phone", "Invalid phone number format");
        }
        errors.require("propertyId", &self.property_id, "Property ID is required");
        if errors.require("brandTheme", &self.brand_theme, "Brand theme is required")
            && !themes.contains(self.brand_theme.trim())
        {
            errors.add("brandTheme", "Unknown brand theme");
        }

        errors.into_result(AdminProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            property_id: self.property_id.trim().to_string(),
            brand_theme: self.brand_theme.trim().to_string(),
        })
    }
}
