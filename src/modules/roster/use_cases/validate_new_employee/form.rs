use crate::modules::roster::core::employee::PayType;
use crate::shared::core::validation::{ValidationErrors, is_valid_email, is_valid_phone};
use serde::{Deserialize, Serialize};

/// The add-employee form as typed in. Pay details are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub pay_type: String,
    pub pay_amount: String,
    pub ssn: String,
}

/// A form that passed validation. The roster stays read-only, so a draft
/// is only echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub pay_type: Option<PayType>,
    pub pay_amount: Option<f64>,
}

impl NewEmployeeForm {
    pub fn validate(self) -> Result<EmployeeDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("firstName", &self.first_name, "First name is required");
        errors.require("lastName", &self.last_name, "Last name is required");
        if errors.require("phoneNumber", &self.phone_number, "Phone number is required")
            && !is_valid_phone(self.phone_number.trim())
        {
            errors.add("phoneNumber", "Invalid phone number format");
        }
        if errors.require("email", &self.email, "Email is required")
            && !is_valid_email(self.email.trim())
        {
            errors.add("email", "Invalid email format");
        }
        errors.require("ssn", &self.ssn, "SSN is required");

        let pay_type = match self.pay_type.trim() {
            "" => None,
            "hourly" => Some(PayType::Hourly),
            "weekly" => Some(PayType::Weekly),
            "annually" => Some(PayType::Annually),
            _ => {
                errors.add("payType", "Unknown pay type");
                None
            }
        };
        let pay_amount = match self.pay_amount.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount >= 0.0 => Some(amount),
                _ => {
                    errors.add("payAmount", "Invalid pay amount");
                    None
                }
            },
        };

        errors.into_result(EmployeeDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            pay_type,
            pay_amount,
        })
    }
}
