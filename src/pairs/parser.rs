use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{VisualizerError, VisualizerResult};
use crate::pairs::edge::EdgeKey;
use crate::pairs::filter::ExclusionFilter;

const COMMENT_PREFIX: &str = "//";
const MIN_FIELDS: usize = 4;

/// One accepted row of the pairs file.
///
/// Counts are kept as `f64`: only their sign and the `pre / post` ratio are
/// ever used, and integers too wide for `i64` still parse.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRecord {
    pub source: String,
    pub target: String,
    pub pre: f64,
    pub post: f64,
}

impl PairRecord {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source.as_str(), self.target.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Comment,
    TooFewFields,
    Excluded,
    Malformed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Record(PairRecord),
    Skipped(SkipReason),
}

/// Classify one data line (the header is never passed here).
pub fn parse_line(line: &str, filter: &ExclusionFilter) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineOutcome::Skipped(SkipReason::Blank);
    }
    // Only an unindented marker counts as a comment.
    if line.starts_with(COMMENT_PREFIX) {
        return LineOutcome::Skipped(SkipReason::Comment);
    }

    let fields: Vec<&str> = trimmed.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return LineOutcome::Skipped(SkipReason::TooFewFields);
    }
    let (source, target) = (fields[0], fields[1]);
    if filter.should_exclude(source) || filter.should_exclude(target) {
        return LineOutcome::Skipped(SkipReason::Excluded);
    }

    match (parse_count(fields[2]), parse_count(fields[3])) {
        (Some(pre), Some(post)) => LineOutcome::Record(PairRecord {
            source: source.to_string(),
            target: target.to_string(),
            pre,
            post,
        }),
        _ => LineOutcome::Skipped(SkipReason::Malformed),
    }
}

/// Parse an integer count field.
///
/// Surrounding whitespace and one leading sign are allowed, and single `_`
/// separators may sit between digits (`1_000`). There is no upper bound on the
/// number of digits. Anything else (`2.5`, `1e3`, `_1`, `1__0`) is rejected.
pub fn parse_count(field: &str) -> Option<f64> {
    let field = field.trim();
    let digits = field.strip_prefix(['+', '-']).unwrap_or(field);
    if digits.is_empty() {
        return None;
    }

    let mut previous_was_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => previous_was_digit = true,
            '_' if previous_was_digit => previous_was_digit = false,
            _ => return None,
        }
    }
    if !previous_was_digit {
        return None;
    }

    let cleaned: String = field.chars().filter(|c| *c != '_').collect();
    cleaned.parse::<f64>().ok()
}

/// Edge transparency for the pre panel.
///
/// `None` when the pair has no pre count. Ratios above one are capped.
pub fn derive_alpha(pre: f64, post: f64) -> Option<f32> {
    if pre <= 0.0 {
        return None;
    }
    if post > 0.0 {
        // Both sides past f64 range give NaN; `min` then picks the cap.
        Some((pre / post).min(1.0) as f32)
    } else {
        Some(1.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub blank: usize,
    pub comments: usize,
    pub too_few_fields: usize,
    pub excluded: usize,
    pub malformed: usize,
    pub accepted: usize,
}

impl ParseStats {
    fn count(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Record(_) => self.accepted += 1,
            LineOutcome::Skipped(SkipReason::Blank) => self.blank += 1,
            LineOutcome::Skipped(SkipReason::Comment) => self.comments += 1,
            LineOutcome::Skipped(SkipReason::TooFewFields) => self.too_few_fields += 1,
            LineOutcome::Skipped(SkipReason::Excluded) => self.excluded += 1,
            LineOutcome::Skipped(SkipReason::Malformed) => self.malformed += 1,
        }
    }
}

/// Pre/post membership and alpha of one unordered pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeEntry {
    pub in_pre: bool,
    pub in_post: bool,
    /// Counts from the last record that touched this pair.
    pub pre: f64,
    pub post: f64,
    pub alpha: Option<f32>,
}

/// Everything the figure needs from the pairs file, built in one pass.
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    nodes: Vec<String>,
    node_set: HashSet<String>,
    edges: BTreeMap<EdgeKey, EdgeEntry>,
    stats: ParseStats,
}

impl PairTable {
    pub fn from_path(path: &Path, filter: &ExclusionFilter) -> VisualizerResult<Self> {
        let io_error = |source| VisualizerError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let table = Self::from_reader(BufReader::new(file), filter).map_err(io_error)?;

        let stats = table.stats();
        tracing::debug!(
            path = %path.display(),
            lines = stats.lines,
            accepted = stats.accepted,
            excluded = stats.excluded,
            malformed = stats.malformed,
            too_few_fields = stats.too_few_fields,
            comments = stats.comments,
            blank = stats.blank,
            "parsed pairs file"
        );
        Ok(table)
    }

    pub fn from_reader<R: BufRead>(reader: R, filter: &ExclusionFilter) -> std::io::Result<Self> {
        let mut table = PairTable::default();
        let mut lines = reader.lines();

        // Header: dropped without looking at it.
        if lines.next().transpose()?.is_none() {
            return Ok(table);
        }

        for line in lines {
            let outcome = parse_line(&line?, filter);
            table.stats.count(&outcome);
            if let LineOutcome::Record(record) = outcome {
                table.insert(record);
            }
        }
        Ok(table)
    }

    /// Fold one record into the table. Rows with no positive count add nothing.
    pub fn insert(&mut self, record: PairRecord) {
        if record.pre <= 0.0 && record.post <= 0.0 {
            return;
        }
        self.add_node(&record.source);
        self.add_node(&record.target);

        let entry = self.edges.entry(record.key()).or_default();
        entry.pre = record.pre;
        entry.post = record.post;
        if record.post > 0.0 {
            entry.in_post = true;
        }
        if let Some(alpha) = derive_alpha(record.pre, record.post) {
            entry.in_pre = true;
            entry.alpha = Some(alpha);
        }
    }

    fn add_node(&mut self, name: &str) {
        if self.node_set.insert(name.to_string()) {
            self.nodes.push(name.to_string());
        }
    }

    /// Every surviving node, in order of first appearance.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &EdgeEntry)> {
        self.edges.iter()
    }

    pub fn pre_edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().filter(|(_, e)| e.in_pre).map(|(k, _)| k)
    }

    pub fn post_edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().filter(|(_, e)| e.in_post).map(|(k, _)| k)
    }

    /// Nodes touched by a pre edge, in table node order.
    pub fn pre_nodes(&self) -> Vec<&str> {
        self.nodes_touched_by(self.pre_edges())
    }

    pub fn post_nodes(&self) -> Vec<&str> {
        self.nodes_touched_by(self.post_edges())
    }

    fn nodes_touched_by<'a>(&'a self, edges: impl Iterator<Item = &'a EdgeKey>) -> Vec<&'a str> {
        let touched: HashSet<&str> = edges
            .flat_map(|key| {
                let (a, b) = key.endpoints();
                [a, b]
            })
            .collect();
        self.nodes
            .iter()
            .map(String::as_str)
            .filter(|name| touched.contains(name))
            .collect()
    }

    pub fn alpha(&self, key: &EdgeKey) -> Option<f32> {
        self.edges.get(key).and_then(|e| e.alpha)
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
