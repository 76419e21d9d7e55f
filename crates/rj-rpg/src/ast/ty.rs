use serde::{Deserialize, Serialize};
use std::fmt;

/// Static type of an RPG data item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RpgType {
    String {
        length: u32,
        #[serde(default)]
        varying: bool,
    },
    /// Fixed-point number; integer when it has no decimal digits.
    Number {
        entire_digits: u32,
        decimal_digits: u32,
    },
    Boolean,
    Timestamp,
    Array {
        element: Box<RpgType>,
        n_elements: u32,
    },
    DataStructure {
        elements_size: u32,
    },
}

impl RpgType {
    pub fn string(length: u32) -> Self {
        RpgType::String {
            length,
            varying: false,
        }
    }

    pub fn varying_string(length: u32) -> Self {
        RpgType::String {
            length,
            varying: true,
        }
    }

    pub fn number(entire_digits: u32, decimal_digits: u32) -> Self {
        RpgType::Number {
            entire_digits,
            decimal_digits,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, RpgType::String { .. })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            RpgType::String { .. } => "String",
            RpgType::Number { .. } => "Number",
            RpgType::Boolean => "Boolean",
            RpgType::Timestamp => "Timestamp",
            RpgType::Array { .. } => "Array",
            RpgType::DataStructure { .. } => "DataStructure",
        }
    }
}

impl fmt::Display for RpgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpgType::String { length, varying } => {
                let prefix = if *varying { "Varying" } else { "" };
                write!(f, "{}String({})", prefix, length)
            }
            RpgType::Number {
                entire_digits,
                decimal_digits,
            } => write!(f, "Number({}, {})", entire_digits + decimal_digits, decimal_digits),
            RpgType::Boolean => f.write_str("Boolean"),
            RpgType::Timestamp => f.write_str("Timestamp"),
            RpgType::Array {
                element,
                n_elements,
            } => write!(f, "Array({} x {})", n_elements, element),
            RpgType::DataStructure { elements_size } => {
                write!(f, "DataStructure({})", elements_size)
            }
        }
    }
}
