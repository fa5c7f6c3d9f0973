//! Host item contract: input items, paired output items, execution context.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::descriptor::Operation;
use crate::random_number::RandomNumberParams;

/// One unit of input data the host passes through the workflow.
///
/// The host has already evaluated per-item parameter expressions; anything
/// in the item beyond its resolved parameters is opaque to this node. The
/// item's positional index in the batch is its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputItem {
    #[serde(default)]
    pub params: RandomNumberParams,
}

impl InputItem {
    pub fn new(params: RandomNumberParams) -> Self {
        Self { params }
    }
}

/// Pairing metadata: the positional index linking an output record back to
/// its originating input item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// Successful outcome for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub random_number: i64,
    pub min: i64,
    pub max: i64,
    /// UTC, RFC 3339 with millisecond precision.
    pub timestamp: String,
    pub source: String,
}

/// Captured failure for one item. Only produced under continue-on-fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

/// Output payload: a random number record or a captured error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordJson {
    Random(OutputRecord),
    Error(ErrorRecord),
}

/// One output item, tagged with its source item index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeItem {
    pub json: RecordJson,
    pub paired_item: PairedItem,
}

impl NodeItem {
    pub fn random(record: OutputRecord, item: usize) -> Self {
        Self {
            json: RecordJson::Random(record),
            paired_item: PairedItem { item },
        }
    }

    pub fn error(message: impl Into<String>, item: usize) -> Self {
        Self {
            json: RecordJson::Error(ErrorRecord {
                error: message.into(),
            }),
            paired_item: PairedItem { item },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.json, RecordJson::Error(_))
    }
}

/// Runtime context provided by the host for one node execution.
#[derive(Debug, Clone)]
pub struct NodeExecutionContext {
    pub workflow_id: Uuid,
    pub run_id: Uuid,
    pub node_id: Uuid,
    pub operation: Operation,
    /// Host policy: capture per-item errors as data instead of aborting.
    pub continue_on_fail: bool,
    pub items: Vec<InputItem>,
}

impl NodeExecutionContext {
    pub fn new(items: Vec<InputItem>) -> Self {
        Self {
            workflow_id: Uuid::new_v4(),
            run_id: Uuid::new_v4(),
            node_id: Uuid::new_v4(),
            operation: Operation::default(),
            continue_on_fail: false,
            items,
        }
    }

    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }
}
