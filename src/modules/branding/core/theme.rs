use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTheme {
    pub id: String,
    pub name: String,
    pub class_name: String,
    pub primary_color: String,
    pub description: String,
}

impl CompanyTheme {
    fn new(id: &str, name: &str, class_name: &str, primary_color: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            class_name: class_name.to_string(),
            primary_color: primary_color.to_string(),
            description: description.to_string(),
        }
    }
}

/// The brand themes a property can pick at registration. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<CompanyTheme>,
}

impl ThemeCatalog {
    pub fn standard() -> Self {
        Self {
            themes: vec![
                CompanyTheme::new(
                    "green",
                    "EcoProperty Management",
                    "",
                    "hsl(142, 76%, 36%)",
                    "Sustainable property solutions",
                ),
                CompanyTheme::new(
                    "blue",
                    "TechSpace Properties",
                    "theme-blue",
                    "hsl(217, 91%, 60%)",
                    "Innovation in property management",
                ),
                CompanyTheme::new(
                    "dark",
                    "Premium Estates",
                    "theme-dark",
                    "hsl(263, 70%, 65%)",
                    "Luxury property management",
                ),
            ],
        }
    }

    pub fn all(&self) -> &[CompanyTheme] {
        &self.themes
    }

    pub fn find(&self, id: &str) -> Option<&CompanyTheme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn first(&self) -> &CompanyTheme {
        &self.themes[0]
    }
}
