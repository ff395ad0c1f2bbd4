//! Static reference tables used by the generator.
//!
//! Each table is a closed enum carrying its own parameters, so the records
//! produced by the generator stay strongly typed end to end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales region of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// North
    North,
    /// South
    South,
    /// East
    East,
    /// West
    West,
}

impl Region {
    /// All regions in table order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

/// Base price and unit cost of a product line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductPricing {
    /// List price before segment and market adjustments.
    pub base_price: f64,
    /// Unit cost of goods.
    pub base_cost: f64,
}

/// Product line sold in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductLine {
    /// Entry product.
    #[serde(rename = "Product A")]
    ProductA,
    /// Mid-range product.
    #[serde(rename = "Product B")]
    ProductB,
    /// Premium product.
    #[serde(rename = "Product C")]
    ProductC,
}

impl ProductLine {
    /// All product lines in table order.
    pub const ALL: [Self; 3] = [Self::ProductA, Self::ProductB, Self::ProductC];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductA => "Product A",
            Self::ProductB => "Product B",
            Self::ProductC => "Product C",
        }
    }

    /// Pricing parameters for this product line.
    #[must_use]
    pub const fn pricing(self) -> ProductPricing {
        match self {
            Self::ProductA => ProductPricing {
                base_price: 100.0,
                base_cost: 60.0,
            },
            Self::ProductB => ProductPricing {
                base_price: 150.0,
                base_cost: 85.0,
            },
            Self::ProductC => ProductPricing {
                base_price: 200.0,
                base_cost: 120.0,
            },
        }
    }
}

/// Customer segment of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CustomerSegment {
    /// Large accounts.
    Enterprise,
    /// Small and medium businesses.
    #[serde(rename = "SMB")]
    Smb,
    /// Individual buyers.
    Consumer,
}

impl CustomerSegment {
    /// All segments in table order.
    pub const ALL: [Self; 3] = [Self::Enterprise, Self::Smb, Self::Consumer];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enterprise => "Enterprise",
            Self::Smb => "SMB",
            Self::Consumer => "Consumer",
        }
    }

    /// Multiplier applied to the product base price.
    #[must_use]
    pub const fn price_multiplier(self) -> f64 {
        match self {
            Self::Enterprise => 1.2,
            Self::Smb => 1.1,
            Self::Consumer => 1.0,
        }
    }
}

/// Share of the daily base cost and noise level of a cost category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    /// Fraction of the daily base cost.
    pub base_percent: f64,
    /// Standard deviation of the multiplicative noise.
    pub volatility: f64,
}

/// Operating cost category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CostCategory {
    /// Inputs; carries a winter premium.
    #[serde(rename = "Raw Materials")]
    RawMaterials,
    /// Labor
    Labor,
    /// Operations
    Operations,
    /// Marketing
    Marketing,
    /// Administrative
    Administrative,
}

impl CostCategory {
    /// All categories in emission order.
    pub const ALL: [Self; 5] = [
        Self::RawMaterials,
        Self::Labor,
        Self::Operations,
        Self::Marketing,
        Self::Administrative,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RawMaterials => "Raw Materials",
            Self::Labor => "Labor",
            Self::Operations => "Operations",
            Self::Marketing => "Marketing",
            Self::Administrative => "Administrative",
        }
    }

    /// Cost share and volatility for this category.
    #[must_use]
    pub const fn profile(self) -> CostProfile {
        match self {
            Self::RawMaterials => CostProfile {
                base_percent: 0.4,
                volatility: 0.1,
            },
            Self::Labor => CostProfile {
                base_percent: 0.25,
                volatility: 0.05,
            },
            Self::Operations => CostProfile {
                base_percent: 0.15,
                volatility: 0.07,
            },
            Self::Marketing => CostProfile {
                base_percent: 0.12,
                volatility: 0.15,
            },
            Self::Administrative => CostProfile {
                base_percent: 0.08,
                volatility: 0.03,
            },
        }
    }
}

macro_rules! impl_label_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.label())
                }
            }
        )+
    };
}

impl_label_display!(Region, ProductLine, CustomerSegment, CostCategory);
