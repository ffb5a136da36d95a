//! Delimited edge-list reader
//!
//! Turns lines of `source<delim>target<delim>weight` into a [`Graph`].
//! Everything after the second delimiter is the weight text.
//!
//! A source that cannot be opened produces an empty graph; a line that
//! cannot be parsed aborts the whole load.

use crate::config::GraphConfig;
use crate::graph::{Graph, GraphBuilder, GraphError, GraphResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads edge lists according to a [`GraphConfig`]
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    config: GraphConfig,
}

impl EdgeListReader {
    pub fn new(config: GraphConfig) -> Self {
        EdgeListReader { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Load a graph from a file.
    ///
    /// If the file cannot be opened the result is `Ok` with an empty graph.
    /// Read errors after opening and malformed lines are returned as errors.
    pub fn read_path(&self, path: impl AsRef<Path>) -> GraphResult<Graph> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Cannot open edge list {:?} ({}), using empty graph", path, e);
                return Ok(Graph::empty());
            }
        };

        info!("Loading edge list from {:?}", path);
        let graph = self.read_from(BufReader::new(file))?;
        info!(
            "Loaded {} nodes, {} edges from {:?}",
            graph.num_nodes(),
            graph.num_edges(),
            path
        );
        Ok(graph)
    }

    /// Load a graph from any buffered reader.
    pub fn read_from<R: BufRead>(&self, reader: R) -> GraphResult<Graph> {
        let mut builder = GraphBuilder::new();
        let mut header_pending = self.config.has_header;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            if line.trim().is_empty() {
                continue;
            }
            if let Some(prefix) = self.config.comment_prefix.as_deref() {
                if line.trim_start().starts_with(prefix) {
                    continue;
                }
            }
            if header_pending {
                debug!("Skipping header on line {}", line_no);
                header_pending = false;
                continue;
            }

            let (a, b, weight) = self.split_line(line_no, &line)?;
            builder.add_row(line_no, a, b, weight)?;
        }

        Ok(builder.build())
    }

    fn split_line<'a>(&self, line_no: usize, line: &'a str) -> GraphResult<(&'a str, &'a str, &'a str)> {
        let mut fields = line.splitn(3, self.config.delimiter);
        let source = fields.next().unwrap_or_default();
        let target = fields.next().ok_or(GraphError::MissingField {
            line: line_no,
            field: "target",
        })?;
        let weight = fields.next().ok_or(GraphError::MissingField {
            line: line_no,
            field: "weight",
        })?;

        if self.config.trim_fields {
            Ok((source.trim(), target.trim(), weight))
        } else {
            Ok((source, target, weight))
        }
    }
}
