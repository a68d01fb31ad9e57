use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Measurement unit of an ingredient amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    G,
    Kg,
    Ml,
    L,
    Piece,
    Spoon,
    /// "适量", no fixed amount
    ToTaste,
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g" => Ok(Unit::G),
            "kg" => Ok(Unit::Kg),
            "ml" => Ok(Unit::Ml),
            "l" => Ok(Unit::L),
            "piece" => Ok(Unit::Piece),
            "spoon" => Ok(Unit::Spoon),
            "totaste" | "to taste" | "to_taste" => Ok(Unit::ToTaste),
            _ => Err(format!("Invalid unit: {s}")),
        }
    }
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "ml",
            Unit::L => "L",
            Unit::Piece => "piece",
            Unit::Spoon => "spoon",
            Unit::ToTaste => "to taste",
        }
    }
}

/// One ingredient row of a recipe.
///
/// Ingredients have no identity beyond their position in the recipe's
/// ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: Unit) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit,
        }
    }
}
