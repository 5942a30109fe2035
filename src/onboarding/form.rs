//! Form fields collected by the wizard

use serde::{Deserialize, Serialize};

/// Kind of business the owner runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Kirana,
    Fruit,
    Beauty,
    Restaurant,
    Clothing,
    Electronics,
    Other,
}

impl BusinessType {
    pub const ALL: [BusinessType; 7] = [
        BusinessType::Kirana,
        BusinessType::Fruit,
        BusinessType::Beauty,
        BusinessType::Restaurant,
        BusinessType::Clothing,
        BusinessType::Electronics,
        BusinessType::Other,
    ];

    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Kirana => "kirana",
            BusinessType::Fruit => "fruit",
            BusinessType::Beauty => "beauty",
            BusinessType::Restaurant => "restaurant",
            BusinessType::Clothing => "clothing",
            BusinessType::Electronics => "electronics",
            BusinessType::Other => "other",
        }
    }

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::Kirana => "Kirana Store / General Store",
            BusinessType::Fruit => "Fruit & Vegetable Shop",
            BusinessType::Beauty => "Beauty Parlor / Salon",
            BusinessType::Restaurant => "Restaurant / Food Stall",
            BusinessType::Clothing => "Clothing Store",
            BusinessType::Electronics => "Electronics Shop",
            BusinessType::Other => "Other Business",
        }
    }

    /// Position in [`BusinessType::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Step through the selector, wrapping at both ends.
    /// `None` moves to the first (or last) entry.
    pub fn cycle(current: Option<BusinessType>, forward: bool) -> BusinessType {
        let len = Self::ALL.len();
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(t), true) => (t.index() + 1) % len,
            (Some(t), false) => (t.index() + len - 1) % len,
        };
        Self::ALL[next]
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BusinessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown business type: {}", s))
    }
}

/// Free-text fields the owner can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Location,
    BusinessName,
    Products,
    Contact,
    Email,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Location => "Location",
            FormField::BusinessName => "Business Name",
            FormField::Products => "Products / Services",
            FormField::Contact => "Phone Number",
            FormField::Email => "Email Address",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Location => "Enter your city or area (e.g., Mumbai)",
            FormField::BusinessName => "e.g., Ramu Fruit Stall, Priya Beauty Parlor",
            FormField::Products => "e.g., Fresh mangoes, bananas, seasonal fruits",
            FormField::Contact => "e.g., 9876543210",
            FormField::Email => "yourname@example.com",
        }
    }
}

/// Everything the owner has entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub location: String,
    pub business_name: String,
    pub business_type: Option<BusinessType>,
    /// Comma-separated by convention, never parsed
    pub products: String,
    pub contact: String,
    pub email: String,
    /// Seeded from the intake screen
    pub business_description: String,
}

impl FormState {
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            business_description: description.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Location => &self.location,
            FormField::BusinessName => &self.business_name,
            FormField::Products => &self.products,
            FormField::Contact => &self.contact,
            FormField::Email => &self.email,
        }
    }

    pub(crate) fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Location => self.location = value,
            FormField::BusinessName => self.business_name = value,
            FormField::Products => self.products = value,
            FormField::Contact => self.contact = value,
            FormField::Email => self.email = value,
        }
    }
}
