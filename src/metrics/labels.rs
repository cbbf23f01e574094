//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Labels for the per-request counter. `path` is the matched route template,
/// never the raw request URI, which keeps cardinality bounded.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct HttpLabels {
    pub method: String,
    pub path: String,
    pub status: String,
}

/// Labels for the latency histogram (status excluded to keep series count low)
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct PathLabels {
    pub method: String,
    pub path: String,
}
