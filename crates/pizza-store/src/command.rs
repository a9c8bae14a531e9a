//! # Order Commands
//!
//! User intents as plain values, so a presentation layer can forward them
//! over any boundary (IPC, JSON, a test script) and hand them to
//! [`OrderStore::apply`](crate::OrderStore::apply).
//!
//! ## Wire Format
//! ```text
//! {"type":"set_size","breadIndex":0,"size":"large"}
//! {"type":"toggle_topping","breadIndex":0,"toppingIndex":1}
//! ```

use std::str::FromStr;

use pizza_core::{SizeOption, ValidationError};
use serde::{Deserialize, Serialize};

/// One of the two mutations the order supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderCommand {
    /// Resize one bread.
    #[serde(rename_all = "camelCase")]
    SetSize { bread_index: usize, size: SizeOption },

    /// Select or deselect one topping on one bread.
    #[serde(rename_all = "camelCase")]
    ToggleTopping {
        bread_index: usize,
        topping_index: usize,
    },
}

/// Parses the short text form used by the demo binary:
/// `size <bread> <small|medium|large>` or `toggle <bread> <topping>`.
impl FromStr for OrderCommand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            ["size", bread, size] => Ok(OrderCommand::SetSize {
                bread_index: parse_index("bread index", bread)?,
                size: size.parse()?,
            }),
            ["toggle", bread, topping] => Ok(OrderCommand::ToggleTopping {
                bread_index: parse_index("bread index", bread)?,
                topping_index: parse_index("topping index", topping)?,
            }),
            _ => Err(ValidationError::NotAllowed {
                field: "command".to_string(),
                allowed: vec![
                    "size <bread> <small|medium|large>".to_string(),
                    "toggle <bread> <topping>".to_string(),
                ],
            }),
        }
    }
}

fn parse_index(field: &str, raw: &str) -> Result<usize, ValidationError> {
    raw.parse().map_err(|_| ValidationError::NotAllowed {
        field: field.to_string(),
        allowed: vec!["a non-negative integer".to_string()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_commands() {
        assert_eq!(
            "size 2 large".parse::<OrderCommand>().unwrap(),
            OrderCommand::SetSize {
                bread_index: 2,
                size: SizeOption::Large
            }
        );
        assert_eq!(
            "  toggle 0   1 ".parse::<OrderCommand>().unwrap(),
            OrderCommand::ToggleTopping {
                bread_index: 0,
                topping_index: 1
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_commands() {
        assert!("size 2".parse::<OrderCommand>().is_err());
        assert!("size -1 large".parse::<OrderCommand>().is_err());
        assert!("size 0 huge".parse::<OrderCommand>().is_err());
        assert!("checkout".parse::<OrderCommand>().is_err());
    }

    #[test]
    fn test_json_wire_format() {
        let cmd: OrderCommand =
            serde_json::from_str(r#"{"type":"set_size","breadIndex":0,"size":"large"}"#).unwrap();
        assert_eq!(
            cmd,
            OrderCommand::SetSize {
                bread_index: 0,
                size: SizeOption::Large
            }
        );

        let json = serde_json::to_value(OrderCommand::ToggleTopping {
            bread_index: 3,
            topping_index: 1,
        })
        .unwrap();
        assert_eq!(json["type"], "toggle_topping");
        assert_eq!(json["toppingIndex"], 1);
    }
}
