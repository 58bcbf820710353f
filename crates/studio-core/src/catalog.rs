//! Catalog Tables
//!
//! Credit packages, video durations and feature blurbs shown on the page.
//! Uses `rust_decimal` for all prices.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Credit package tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Starter,
    Pro,
    Business,
    Enterprise,
}

impl PackageTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Business => "business",
            Self::Enterprise => "enterprise",
        }
    }

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Pro => "Pro",
            Self::Business => "Business",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl std::fmt::Display for PackageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A bundle of credits sold at a fixed price
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditPackage {
    pub tier: PackageTier,

    /// Number of credits in the bundle
    pub credits: u32,

    /// Price in USD
    pub price: Decimal,

    /// Pre-discount price, shown struck through
    pub original_price: Option<Decimal>,

    /// Advertised discount percentage
    pub discount_percent: Option<u8>,

    pub description: String,
    pub features: Vec<String>,

    /// Highlighted as "Most Popular"
    pub popular: bool,
}

impl CreditPackage {
    pub const fn name(&self) -> &'static str {
        self.tier.name()
    }

    /// Price per credit, rounded to cents
    pub fn price_per_credit(&self) -> Decimal {
        if self.credits == 0 {
            return Decimal::ZERO;
        }
        (self.price / Decimal::from(self.credits))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Amount saved against the original price
    pub fn savings(&self) -> Option<Decimal> {
        self.original_price.map(|original| original - self.price)
    }

    /// Line under the credit count, e.g. "$0.80 per credit"
    pub fn per_credit_label(&self) -> String {
        format!("{} per credit", format_usd(self.price_per_credit()))
    }

    /// e.g. "You save $10.00"
    pub fn savings_label(&self) -> Option<String> {
        self.savings().map(|saved| format!("You save {}", format_usd(saved)))
    }

    /// Badge text, e.g. "Save 20%"
    pub fn discount_label(&self) -> Option<String> {
        self.discount_percent.map(|pct| format!("Save {pct}%"))
    }

    /// Notification raised by the "Get Started" button
    pub fn selection_notice(&self) -> String {
        format!("Selected {} package!", self.name())
    }
}

/// A selectable video length and its credit cost
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationOption {
    pub label: String,
    pub seconds: u32,
    pub credits: u32,
}

/// A marketing blurb in the features grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,

    /// Tailwind gradient stops for the icon tile
    pub gradient: String,
}

/// All static tables rendered by the page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub packages: Vec<CreditPackage>,
    pub durations: Vec<DurationOption>,
    pub features: Vec<Feature>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The tables shipped with the page
    pub fn standard() -> Self {
        Self {
            packages: standard_packages(),
            durations: standard_durations(),
            features: standard_features(),
        }
    }

    pub fn package(&self, tier: PackageTier) -> Option<&CreditPackage> {
        self.packages.iter().find(|p| p.tier == tier)
    }

    pub fn duration(&self, seconds: u32) -> Option<&DurationOption> {
        self.durations.iter().find(|d| d.seconds == seconds)
    }

    /// Credit cost for a duration; unknown values cost 1 credit
    pub fn credits_for(&self, seconds: u32) -> u32 {
        self.duration(seconds).map_or(1, |d| d.credits)
    }
}

fn package(
    tier: PackageTier,
    credits: u32,
    price: Decimal,
    original: Option<(Decimal, u8)>,
    description: &str,
    features: [&str; 4],
) -> CreditPackage {
    CreditPackage {
        tier,
        credits,
        price,
        original_price: original.map(|(p, _)| p),
        discount_percent: original.map(|(_, pct)| pct),
        description: description.into(),
        features: features.iter().map(|f| (*f).to_string()).collect(),
        popular: tier == PackageTier::Pro,
    }
}

fn standard_packages() -> Vec<CreditPackage> {
    vec![
        package(
            PackageTier::Starter,
            10,
            dec!(9.99),
            None,
            "Perfect for testing and small projects",
            ["10 AI video generations", "Standard quality", "Email support", "30-day history"],
        ),
        package(
            PackageTier::Pro,
            50,
            dec!(39.99),
            Some((dec!(49.99), 20)),
            "Great for content creators",
            ["50 AI video generations", "HD quality", "Priority support", "90-day history"],
        ),
        package(
            PackageTier::Business,
            100,
            dec!(69.99),
            Some((dec!(99.99), 30)),
            "Ideal for businesses",
            ["100 AI video generations", "4K quality", "24/7 support", "Unlimited history"],
        ),
        package(
            PackageTier::Enterprise,
            500,
            dec!(299.99),
            Some((dec!(499.99), 40)),
            "For large scale operations",
            ["500 AI video generations", "4K+ quality", "Dedicated support", "Custom integrations"],
        ),
    ]
}

fn standard_durations() -> Vec<DurationOption> {
    [("Short (30s)", 30, 1), ("Standard (60s)", 60, 2), ("Extended (120s)", 120, 4)]
        .into_iter()
        .map(|(label, seconds, credits)| DurationOption {
            label: label.into(),
            seconds,
            credits,
        })
        .collect()
}

fn standard_features() -> Vec<Feature> {
    [
        (
            "AI-Powered Generation",
            "Advanced AI models create stunning, professional-quality videos from your text descriptions.",
            "from-purple-500 to-pink-500",
        ),
        (
            "Credit-Based System",
            "Flexible pricing with credit packages. Pay only for what you use with transparent pricing.",
            "from-blue-500 to-purple-500",
        ),
        (
            "Professional Quality",
            "Enterprise-grade video generation with 4K support and cinematic quality output.",
            "from-green-500 to-blue-500",
        ),
    ]
    .into_iter()
    .map(|(title, description, gradient)| Feature {
        title: title.into(),
        description: description.into(),
        gradient: gradient.into(),
    })
    .collect()
}

/// Format a USD amount the way the pricing cards do, e.g. `$39.99`
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}
