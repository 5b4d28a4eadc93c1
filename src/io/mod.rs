//! Plain-text edge-list and membership I/O.
//!
//! Input is ASCII, one edge per line: two whitespace-separated
//! non-negative integer node labels. Lines starting with `#` and blank
//! lines are skipped. Labels need not be contiguous, zero-based, or
//! sorted.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::SparseGraph;

fn io_err(path: &Path, e: io::Error) -> Error {
    Error::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

/// Read an edge-list file into raw label pairs.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be opened or read;
/// [`Error::InvalidEdge`] (with a 1-based line number) for any
/// non-comment line that is not exactly two non-negative integers.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<Vec<(u64, u64)>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_err(path, e))?;
    let reader = BufReader::new(file);

    let mut pairs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| io_err(path, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        pairs.push(parse_pair(trimmed, idx + 1)?);
    }
    Ok(pairs)
}

fn parse_pair(line: &str, lineno: usize) -> Result<(u64, u64)> {
    let mut fields = line.split_whitespace();
    let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::InvalidEdge {
            line: lineno,
            reason: "expected exactly two node labels".to_string(),
        });
    };
    let parse = |s: &str| {
        s.parse::<u64>().map_err(|_| Error::InvalidEdge {
            line: lineno,
            reason: format!("not a non-negative integer: '{s}'"),
        })
    };
    Ok((parse(a)?, parse(b)?))
}

/// Write community membership: one `label community` line per node,
/// ascending original label (contiguous ids already ascend that way).
pub fn write_communities<P: AsRef<Path>>(
    path: P,
    original_ids: &[u64],
    labels: &[usize],
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_err(path, e))?;
    let mut out = BufWriter::new(file);
    for (v, &label) in labels.iter().enumerate() {
        writeln!(out, "{} {}", original_ids[v], label).map_err(|e| io_err(path, e))?;
    }
    out.flush().map_err(|e| io_err(path, e))
}

/// Write the graph back out as an edge list in original labels, each
/// undirected edge once. Re-reading the output rebuilds an equivalent
/// CSR (neighbor-slice order aside).
pub fn write_edge_list<P: AsRef<Path>>(path: P, graph: &SparseGraph) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_err(path, e))?;
    let mut out = BufWriter::new(file);
    for (u, v, _) in graph.edges() {
        writeln!(out, "{} {}", graph.original_id(u), graph.original_id(v))
            .map_err(|e| io_err(path, e))?;
    }
    out.flush().map_err(|e| io_err(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cleave-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_read_skips_comments_and_blanks() {
        let path = scratch_file("comments.txt");
        std::fs::write(&path, "# header\n1 2\n\n  # indented comment\n2 3\n").unwrap();
        let pairs = read_edge_list(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(pairs, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_read_reports_line_numbers() {
        let path = scratch_file("badline.txt");
        std::fs::write(&path, "1 2\n3 oops\n").unwrap();
        let err = read_edge_list(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::InvalidEdge { line: 2, .. }));
    }

    #[test]
    fn test_read_rejects_wrong_field_count() {
        let path = scratch_file("fields.txt");
        std::fs::write(&path, "1 2 3\n").unwrap();
        let err = read_edge_list(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::InvalidEdge { line: 1, .. }));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_edge_list("/nonexistent/cleave-test.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_write_communities_format() {
        let path = scratch_file("members.txt");
        write_communities(&path, &[10, 20, 30], &[0, 1, 1]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(content, "10 0\n20 1\n30 1\n");
    }

    #[test]
    fn test_edge_list_roundtrip() {
        let graph = SparseGraph::from_pairs(&[(10, 20), (20, 30), (10, 30)]).unwrap();
        let path = scratch_file("roundtrip.txt");
        write_edge_list(&path, &graph).unwrap();
        let pairs = read_edge_list(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let rebuilt = SparseGraph::from_pairs(&pairs).unwrap();
        assert_eq!(rebuilt.node_count(), graph.node_count());
        assert_eq!(rebuilt.edge_count(), graph.edge_count());
        assert_eq!(rebuilt.original_ids(), graph.original_ids());
    }
}
