//! RandomNumber node: fetch one true random integer per item from Random.org.
//! Pass your fetcher when constructing: `RandomNumberNode::new(config, Arc::new(your_fetcher))`.

mod reqwest_fetcher;

use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::descriptor::Operation;
use crate::error::NodeError;
use crate::item::{InputItem, NodeExecutionContext, NodeItem, OutputRecord};

pub use reqwest_fetcher::ReqwestHttpFetcher;

/// Fixed source tag stamped on every successful output record.
pub const RANDOM_ORG_SOURCE: &str = "Random.org";

const INTEGERS_ENDPOINT: &str = "https://www.random.org/integers/";

/// Error from the HTTP fetch seam.
#[derive(Debug, Clone)]
pub struct FetchError(pub String);

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FetchError {}

/// HTTP fetcher abstraction. Implement and inject to stub the remote call.
pub trait HttpFetcher: Send + Sync {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

/// Per-item bounds, resolved by the host before execution.
///
/// Carried as `f64` because the host's generic number parameter admits
/// fractional values; validation rejects anything that is not a finite
/// whole number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomNumberParams {
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
}

fn default_min() -> f64 {
    1.0
}

fn default_max() -> f64 {
    100.0
}

impl Default for RandomNumberParams {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl RandomNumberParams {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Node-level configuration, independent of any single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomNumberConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for RandomNumberConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Integral bounds after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min: i64,
    max: i64,
}

fn is_whole_number(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn validate_bounds(params: &RandomNumberParams) -> Result<Bounds, NodeError> {
    if params.min >= params.max {
        return Err(NodeError::Validation(
            "Minimum value must be less than maximum value".into(),
        ));
    }
    if !is_whole_number(params.min) || !is_whole_number(params.max) {
        return Err(NodeError::Validation(
            "Both minimum and maximum values must be integers".into(),
        ));
    }
    Ok(Bounds {
        min: params.min as i64,
        max: params.max as i64,
    })
}

fn integers_url(bounds: Bounds) -> String {
    format!(
        "{}?num=1&min={}&max={}&col=1&base=10&format=plain&rnd=new",
        INTEGERS_ENDPOINT, bounds.min, bounds.max
    )
}

fn parse_body(body: &str) -> Result<i64, NodeError> {
    body.trim()
        .parse::<i64>()
        .map_err(|_| NodeError::Parse("Failed to generate a valid random number".into()))
}

pub struct RandomNumberNode {
    config: RandomNumberConfig,
    fetcher: Arc<dyn HttpFetcher>,
}

impl RandomNumberNode {
    pub fn new(config: RandomNumberConfig, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Construct with the default reqwest-backed fetcher.
    pub fn with_reqwest(config: RandomNumberConfig) -> Self {
        Self::new(config, Arc::new(ReqwestHttpFetcher))
    }

    /// Run the node over the host-supplied batch, one output item per input
    /// item, input order preserved.
    ///
    /// With `continue_on_fail` set on the context, per-item errors are
    /// captured as error records and processing continues; otherwise the
    /// first error aborts the batch and the remaining items produce no
    /// output.
    pub fn execute(&self, ctx: NodeExecutionContext) -> Result<Vec<NodeItem>, NodeError> {
        match ctx.operation {
            Operation::GenerateRandomNumber => self.generate_random_numbers(&ctx),
        }
    }

    fn generate_random_numbers(
        &self,
        ctx: &NodeExecutionContext,
    ) -> Result<Vec<NodeItem>, NodeError> {
        let mut out = Vec::with_capacity(ctx.items.len());
        for (index, item) in ctx.items.iter().enumerate() {
            match self.run_item(index, item) {
                Ok(record) => out.push(NodeItem::random(record, index)),
                Err(err) if ctx.continue_on_fail => {
                    debug!(
                        event = "random.item_failed_continuing",
                        domain = "random",
                        node_type = "random",
                        item = index,
                        error = %err
                    );
                    out.push(NodeItem::error(err.to_string(), index));
                }
                Err(err) => {
                    debug!(
                        event = "random.batch_aborted",
                        domain = "random",
                        node_type = "random",
                        item = index,
                        items_done = out.len(),
                        error = %err
                    );
                    return Err(err);
                }
            }
        }
        Ok(out)
    }

    fn run_item(&self, index: usize, item: &InputItem) -> Result<OutputRecord, NodeError> {
        let bounds = validate_bounds(&item.params)?;
        let url = integers_url(bounds);
        let timeout = Duration::from_millis(self.config.timeout_ms);
        debug!(
            event = "random.request_started",
            domain = "random",
            node_type = "random",
            item = index,
            min = bounds.min,
            max = bounds.max,
            timeout_ms = timeout.as_millis() as u64
        );
        let body = self
            .fetcher
            .get(&url, timeout)
            .map_err(|err| NodeError::Transport(err.0))?;
        let random_number = parse_body(&body)?;
        debug!(
            event = "random.request_succeeded",
            domain = "random",
            node_type = "random",
            item = index,
            random_number = random_number,
            response_bytes = body.len() as u64
        );
        Ok(OutputRecord {
            random_number,
            min: bounds.min,
            max: bounds.max,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: RANDOM_ORG_SOURCE.to_string(),
        })
    }
}
