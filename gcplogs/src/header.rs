//! Cloud Trace [context header](https://cloud.google.com/trace/docs/trace-context#legacy-http-header)
//! parser

use std::str::FromStr;

use crate::error::Error;

/// Parsed representation of the `X-Cloud-Trace-Context` request header.
///
/// The wire format is `TRACE_ID/SPAN_ID;o=TRACE_TRUE`. Only `TRACE_ID`, the
/// text before the first `/`, is kept. It is taken as it comes, empty or not.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct TraceContext {
    pub(crate) trace_id: String,
}

impl TraceContext {
    /// HTTP header name associated with Cloud Trace context.
    pub const NAME: &'static str = "X-Cloud-Trace-Context";

    /// Trace ID, the part before the first `/`.
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }
}

impl FromStr for TraceContext {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (trace_id, _span) = s
            .split_once('/')
            .ok_or_else(|| Error::BadHeader(format!("no `/` found in `{}`", s)))?;
        Ok(TraceContext {
            trace_id: trace_id.into(),
        })
    }
}
