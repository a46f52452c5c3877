//! # User Profile
//!
//! The farmer profile fabricated at login. Blank form fields fall back to
//! fixed placeholders; acres, experience and rating are always fixed.

pub const DEFAULT_NAME: &str = "രാജു കർഷകൻ";
pub const DEFAULT_PHONE: &str = "+91 98765 43210";
pub const DEFAULT_FARM_LOCATION: &str = "Kottayam, Kerala";
pub const DEFAULT_MAIN_CROPS: &str = "Rice, Coconut, Spices";

pub const FIXED_ACRES: &str = "5.2";
pub const FIXED_EXPERIENCE_YEARS: &str = "12";
pub const FIXED_RATING: &str = "4.8";

/// Raw input collected by the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub full_name: String,
    pub phone: String,
    pub farm_location: String,
    pub main_crops: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    pub farm_location: String,
    pub main_crops: String,
    pub acres: String,
    pub experience_years: String,
    pub rating: String,
}

impl UserProfile {
    /// Build a profile from form input. Never fails.
    pub fn from_fields(fields: &LoginFields) -> Self {
        Self {
            name: or_default(&fields.full_name, DEFAULT_NAME),
            phone: or_default(&fields.phone, DEFAULT_PHONE),
            farm_location: or_default(&fields.farm_location, DEFAULT_FARM_LOCATION),
            main_crops: or_default(&fields.main_crops, DEFAULT_MAIN_CROPS),
            acres: FIXED_ACRES.to_string(),
            experience_years: FIXED_EXPERIENCE_YEARS.to_string(),
            rating: FIXED_RATING.to_string(),
        }
    }

    /// Crops as individual badges ("Rice, Coconut" -> ["Rice", "Coconut"]).
    pub fn crops(&self) -> Vec<&str> {
        self.main_crops
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::from_fields(&LoginFields::default())
    }
}

/// Only an empty string takes the default; whitespace is kept as entered.
fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
