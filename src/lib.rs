//! Random node: fetch one true random integer per workflow item from Random.org.
//!
//! The node reads per-item `min`/`max` bounds (already resolved by the host),
//! issues a single GET against the random.org integer endpoint per item, and
//! emits one output item per input item, tagged with the source item index.
//! Pass your fetcher when constructing to stub the remote call:
//! `RandomNumberNode::new(config, Arc::new(your_fetcher))`.

pub mod descriptor;
pub mod error;
pub mod item;
pub mod random_number;

pub use descriptor::{NodeDescriptor, Operation, OperationOption, PropertyDescriptor, descriptor};
pub use error::NodeError;
pub use item::{
    ErrorRecord, InputItem, NodeExecutionContext, NodeItem, OutputRecord, PairedItem, RecordJson,
};
pub use random_number::{
    FetchError, HttpFetcher, RandomNumberConfig, RandomNumberNode, RandomNumberParams,
    ReqwestHttpFetcher,
};
