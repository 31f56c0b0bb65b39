// Employee access codes: format checks and the code directory.

use crate::shared::core::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ACCESS_CODE_LENGTH: usize = 6;
pub const DEMO_PROPERTY_ID: &str = "demo-property";

/// Format check only; whether the code belongs to anyone is the directory's call.
pub fn validate_access_code(code: &str) -> Result<(), ValidationErrors> {
    if code.chars().count() != ACCESS_CODE_LENGTH {
        return Err(ValidationErrors::single(
            "accessCode",
            "Please enter a 6-digit access code",
        ));
    }
    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationErrors::single(
            "accessCode",
            "Access code must contain only numbers",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeIdentity {
    pub employee_id: String,
    pub employee_name: String,
    pub property_id: String,
}

impl EmployeeIdentity {
    /// Identity the demo kiosk derives from a code: `123456` becomes
    /// `emp_123456` named `Employee 1256`.
    pub fn for_demo_code(code: &str, property_id: impl Into<String>) -> Self {
        let chars: Vec<char> = code.chars().collect();
        let head: String = chars.iter().take(2).collect();
        let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
        Self {
            employee_id: format!("emp_{code}"),
            employee_name: format!("Employee {head}{tail}"),
            property_id: property_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccessCodeDirectory {
    codes: HashMap<String, EmployeeIdentity>,
}

impl AccessCodeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hard-coded codes the kiosk ships with.
    pub fn demo() -> Self {
        Self::new().with_code(
            "123456",
            EmployeeIdentity::for_demo_code("123456", DEMO_PROPERTY_ID),
        )
    }

    pub fn with_code(mut self, code: impl Into<String>, identity: EmployeeIdentity) -> Self {
        self.codes.insert(code.into(), identity);
        self
    }

    pub fn lookup(&self, code: &str) -> Option<&EmployeeIdentity> {
        self.codes.get(code)
    }
}
