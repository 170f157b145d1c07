//! Result sinks
//!
//! A sink receives every finished query result together with the request
//! that produced it. Rendering is left entirely to the sink.

use serde::Serialize;

use super::engine::QueryOutput;
use crate::executor::{ExecutorError, ExecutorResult};
use crate::query::QueryRequest;

/// Destination for query results
pub trait ResultSink {
    fn write(&mut self, request: &QueryRequest, output: &QueryOutput) -> ExecutorResult<()>;
}

/// One request and its result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinkEntry {
    pub request: QueryRequest,
    pub output: QueryOutput,
}

/// Keeps every result in memory, in arrival order
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Vec<SinkEntry>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SinkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes every entry as one JSON array
    pub fn to_json(&self) -> ExecutorResult<String> {
        serde_json::to_string_pretty(&self.entries).map_err(|e| ExecutorError::Sink(e.to_string()))
    }
}

impl ResultSink for CollectingSink {
    fn write(&mut self, request: &QueryRequest, output: &QueryOutput) -> ExecutorResult<()> {
        self.entries.push(SinkEntry {
            request: request.clone(),
            output: output.clone(),
        });
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'r> {
    request: &'r QueryRequest,
    result: &'r QueryOutput,
}

/// Writes one JSON document per result, newline separated
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: std::io::Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: std::io::Write> ResultSink for JsonLinesSink<W> {
    fn write(&mut self, request: &QueryRequest, output: &QueryOutput) -> ExecutorResult<()> {
        let line = JsonLine {
            request,
            result: output,
        };
        serde_json::to_writer(&mut self.writer, &line)
            .map_err(|e| ExecutorError::Sink(e.to_string()))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| ExecutorError::Sink(e.to_string()))
    }
}
