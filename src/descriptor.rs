//! Static node metadata: what the node is called, which operations it
//! offers, and which parameters the host should surface.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Node operation. A single operation is exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    #[default]
    GenerateRandomNumber,
}

/// Static node description for host registration and UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub display_name: String,
    pub name: String,
    pub group: Vec<String>,
    pub version: u32,
    pub description: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub properties: Vec<PropertyDescriptor>,
}

/// One host-surfaced parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub default: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OperationOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<serde_json::Value>,
}

/// One selectable value for an options-typed property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationOption {
    pub name: String,
    pub value: Operation,
    pub description: String,
}

/// Build the node's descriptor. Stable across calls.
pub fn descriptor() -> NodeDescriptor {
    let show_for_generate = json!({ "show": { "operation": ["generateRandomNumber"] } });
    NodeDescriptor {
        display_name: "Random".into(),
        name: "random".into(),
        group: vec!["transform".into()],
        version: 1,
        description: "Generate true random numbers using Random.org API".into(),
        inputs: vec!["main".into()],
        outputs: vec!["main".into()],
        properties: vec![
            PropertyDescriptor {
                display_name: "Operation".into(),
                name: "operation".into(),
                kind: "options".into(),
                default: json!("generateRandomNumber"),
                description: None,
                options: Some(vec![OperationOption {
                    name: "True Random Number Generator".into(),
                    value: Operation::GenerateRandomNumber,
                    description: "Generate a true random number".into(),
                }]),
                display_options: None,
            },
            PropertyDescriptor {
                display_name: "Minimum Value".into(),
                name: "min".into(),
                kind: "number".into(),
                default: json!(1),
                description: Some("The minimum value (inclusive)".into()),
                options: None,
                display_options: Some(show_for_generate.clone()),
            },
            PropertyDescriptor {
                display_name: "Maximum Value".into(),
                name: "max".into(),
                kind: "number".into(),
                default: json!(100),
                description: Some("The maximum value (inclusive)".into()),
                options: None,
                display_options: Some(show_for_generate),
            },
        ],
    }
}
