//! # Panel Data
//!
//! Fixed sample datasets behind the read-only views. Nothing here changes at
//! runtime.

pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ProblemCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub title_ml: &'static str,
    pub description: &'static str,
}

pub struct WeatherReading {
    pub district: &'static str,
    pub condition: &'static str,
    pub temperature_c: i8,
    pub humidity_pct: u8,
    pub rainfall_mm: u16,
    pub advisory: &'static str,
}

pub struct MarketPrice {
    pub commodity: &'static str,
    pub commodity_ml: &'static str,
    pub market: &'static str,
    pub unit: &'static str,
    pub price_inr: u32,
    /// Day-over-day change, in tenths of a percent.
    pub change_permille: i16,
}

pub struct ProfileStat {
    pub value: u32,
    pub label: &'static str,
}

pub struct FarmDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_TITLE: &str = "Get instant agricultural advice, pest identification, weather alerts, \
    and connect with Kerala's top farming experts";
pub const HERO_TITLE_ML: &str =
    "കേരളയിലെ മികച്ച കൃഷി വിദഗ്ധരുമായി ബന്ധപ്പെടുകയും തൽക്ഷണ കാർഷിക ഉപദേശം നേടുകയും ചെയ്യുക";
pub const HERO_SUBTITLE: &str = "Supporting Malayalam and English for Kerala farmers";

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        icon: "🌱",
        title: "Crop Identification",
        description: "Pest and disease detection for Kerala crops like rice, coconut, and spices",
    },
    FeatureCard {
        icon: "⚡",
        title: "Smart Recommendations",
        description: "Fertilizer and treatment suggestions based on monsoon patterns",
    },
    FeatureCard {
        icon: "📍",
        title: "Hyperlocal Weather",
        description: "District-wise weather alerts and advisories for 14 Kerala districts",
    },
    FeatureCard {
        icon: "📱",
        title: "Malayalam Voice Support",
        description: "Voice interface supporting mixed Malayalam-English commands",
    },
];

pub const PROBLEM_CATEGORIES: [ProblemCategory; 3] = [
    ProblemCategory {
        icon: "🐛",
        title: "Pest Problems",
        title_ml: "കീട പ്രശ്നങ്ങൾ",
        description: "Insects, worms, and other pests",
    },
    ProblemCategory {
        icon: "🌧",
        title: "Weather Damage",
        title_ml: "കാലാവസ്ഥാ നാശം",
        description: "Rain, heat, drought effects",
    },
    ProblemCategory {
        icon: "🌿",
        title: "Plant Diseases",
        title_ml: "സസ്യ രോഗങ്ങൾ",
        description: "Fungal, bacterial, viral diseases",
    },
];

pub const WEATHER: [WeatherReading; 4] = [
    WeatherReading {
        district: "Kottayam",
        condition: "Light rain",
        temperature_c: 28,
        humidity_pct: 84,
        rainfall_mm: 12,
        advisory: "Delay fertilizer application until the rain eases",
    },
    WeatherReading {
        district: "Palakkad",
        condition: "Sunny",
        temperature_c: 33,
        humidity_pct: 58,
        rainfall_mm: 0,
        advisory: "Irrigate paddy fields in the early morning",
    },
    WeatherReading {
        district: "Wayanad",
        condition: "Cloudy",
        temperature_c: 24,
        humidity_pct: 78,
        rainfall_mm: 4,
        advisory: "Watch pepper vines for quick wilt after showers",
    },
    WeatherReading {
        district: "Alappuzha",
        condition: "Thunderstorms",
        temperature_c: 27,
        humidity_pct: 90,
        rainfall_mm: 35,
        advisory: "Clear field drainage channels before evening",
    },
];

pub const MARKET_PRICES: [MarketPrice; 5] = [
    MarketPrice {
        commodity: "Rice (Matta)",
        commodity_ml: "അരി",
        market: "Kottayam",
        unit: "quintal",
        price_inr: 2850,
        change_permille: 12,
    },
    MarketPrice {
        commodity: "Coconut",
        commodity_ml: "തേങ്ങ",
        market: "Kozhikode",
        unit: "100 nuts",
        price_inr: 1650,
        change_permille: -8,
    },
    MarketPrice {
        commodity: "Black Pepper",
        commodity_ml: "കുരുമുളക്",
        market: "Kochi",
        unit: "quintal",
        price_inr: 61200,
        change_permille: 25,
    },
    MarketPrice {
        commodity: "Cardamom",
        commodity_ml: "ഏലം",
        market: "Idukki",
        unit: "kg",
        price_inr: 2300,
        change_permille: 0,
    },
    MarketPrice {
        commodity: "Rubber (RSS-4)",
        commodity_ml: "റബ്ബർ",
        market: "Kottayam",
        unit: "quintal",
        price_inr: 18400,
        change_permille: -15,
    },
];

pub const PROFILE_STATS: [ProfileStat; 3] = [
    ProfileStat { value: 47, label: "Queries Solved" },
    ProfileStat { value: 12, label: "Expert Consultations" },
    ProfileStat { value: 8, label: "Problems Prevented" },
];

pub const FARM_DETAILS: [FarmDetail; 3] = [
    FarmDetail { label: "Farm Type", value: "Organic Mixed Farming" },
    FarmDetail { label: "Soil Type", value: "Red Laterite Soil" },
    FarmDetail { label: "Irrigation Method", value: "Drip Irrigation & Rain-fed" },
];

pub const PROFILE_EMAIL: &str = "raju.farmer@email.com";
pub const PROFILE_TITLE: &str = "Organic Farmer";

impl MarketPrice {
    /// "+1.2%", "-0.8%", "0.0%".
    pub fn change_label(&self) -> String {
        let sign = match self.change_permille.cmp(&0) {
            std::cmp::Ordering::Greater => "+",
            std::cmp::Ordering::Less => "-",
            std::cmp::Ordering::Equal => "",
        };
        let abs = self.change_permille.unsigned_abs();
        format!("{sign}{}.{}%", abs / 10, abs % 10)
    }
}

/// Rupee amount in Indian grouping: the last three digits, then pairs
/// ("₹61,200", "₹12,34,567").
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 3);
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("₹{out}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_label_signs() {
        assert_eq!(MARKET_PRICES[0].change_label(), "+1.2%");
        assert_eq!(MARKET_PRICES[1].change_label(), "-0.8%");
        assert_eq!(MARKET_PRICES[3].change_label(), "0.0%");
        assert_eq!(MARKET_PRICES[2].change_label(), "+2.5%");
    }

    #[test]
    fn inr_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(950), "₹950");
        assert_eq!(format_inr(2850), "₹2,850");
        assert_eq!(format_inr(61200), "₹61,200");
        assert_eq!(format_inr(100000), "₹1,00,000");
        assert_eq!(format_inr(1234567), "₹12,34,567");
        assert_eq!(format_inr(u32::MAX), "₹4,29,49,67,295");
    }

    #[test]
    fn sample_data_is_populated() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(PROBLEM_CATEGORIES.len(), 3);
        assert!(WEATHER.iter().all(|w| !w.advisory.is_empty()));
        assert_eq!(PROFILE_STATS.iter().map(|s| s.value).sum::<u32>(), 67);
    }
}
