/// Field specification parsing: `"2,4-6,1"` → `[2, 4, 5, 6, 1]`.
use std::ops::RangeInclusive;

/// Separator between tokens of a field specification.
const TOKEN_SEP: char = ',';

/// Separator between the two bounds of a range token.
const RANGE_SEP: char = '-';

/// Ordered, 1-based field positions selected by the user.
///
/// Each token is kept as an inclusive range (a single field is `n..=n`), so a
/// range with a huge upper bound costs nothing until it is walked. Order and
/// duplicates are kept exactly as written; every position is ≥ 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSpec(Vec<RangeInclusive<usize>>);

impl FieldSpec {
    /// The selected positions that exist on a line of `columns` fields, in
    /// listed order. Work is bounded by `columns` per token, whatever the range.
    pub fn indices_within(&self, columns: usize) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .flat_map(move |r| *r.start()..=(*r.end()).min(columns))
    }

    /// Whether no token selected any position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of accepted tokens (singles and ranges).
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.0.len()
    }
}

/// Parse a comma-separated list of field numbers and inclusive `start-end` ranges.
///
/// Parsing is best-effort: tokens that are not an integer or a well-formed
/// ascending range are skipped without error. Zero never names a field and is
/// dropped, including as the lower bound of a range.
#[must_use]
pub fn parse_field_spec(spec: &str) -> FieldSpec {
    let mut fields = Vec::new();
    if spec.is_empty() {
        return FieldSpec(fields);
    }

    for token in spec.split(TOKEN_SEP) {
        let bounds = if token.contains(RANGE_SEP) {
            parse_range(token)
        } else {
            token.parse::<usize>().ok().map(|idx| (idx, idx))
        };
        if let Some((start, end)) = bounds {
            let start = start.max(1);
            if start <= end {
                fields.push(start..=end);
            }
        }
    }

    FieldSpec(fields)
}

/// Parse a `start-end` token. Returns `None` unless there are exactly two
/// integer bounds with `start <= end`.
fn parse_range(token: &str) -> Option<(usize, usize)> {
    let mut parts = token.split(RANGE_SEP);
    let (start, end) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let start = start.parse::<usize>().ok()?;
    let end = end.parse::<usize>().ok()?;
    (start <= end).then_some((start, end))
}
