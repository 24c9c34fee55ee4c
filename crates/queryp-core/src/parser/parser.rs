//! Query parser implementation.

use tracing::debug;

use super::error::ParseError;
use crate::ast::{
    predicate_count, Filter, FilterLogic, FilterOp, FilterTerm, QueryParameters, SortTerm,
    TermKind,
};
use crate::scanner::{Scanner, Span, Token};

/// Parser limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum parenthesis nesting depth.
    pub max_depth: usize,
}

impl ParserConfig {
    /// Nesting depth allowed by [`ParserConfig::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Creates a config with default limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Query string parser.
///
/// Each `(` opens a group whose logic is taken from the term it precedes;
/// each `)` closes one. Parentheses that only wrap another group (`((a|b))`)
/// collapse into a single group. `limit`, `offset`, `sort` and `option` are
/// consumed as directives when they appear outside any group.
pub struct Parser<'a> {
    input: &'a str,
    config: ParserConfig,
    tokens: Vec<Token<'a>>,
    cursor: usize,
    /// `(` of the current token not yet turned into groups.
    pending_opens: usize,
    /// `)` of the last consumed token not yet matched.
    pending_closes: usize,
    /// Bytes covered by consumed tokens.
    consumed: usize,
    /// End of the last consumed token.
    position: usize,
    params: QueryParameters,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default limits.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a parser with the given limits.
    #[must_use]
    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self {
            input,
            config,
            tokens: Vec::new(),
            cursor: 0,
            pending_opens: 0,
            pending_closes: 0,
            consumed: 0,
            position: 0,
            params: QueryParameters::default(),
        }
    }

    /// Parses the whole input.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input is not a valid query.
    pub fn parse(mut self) -> Result<QueryParameters, ParseError> {
        if self.input.is_empty() {
            return Ok(self.params);
        }

        self.tokens = Scanner::new(self.input).tokenize()?;
        self.pending_opens = self.tokens.first().map_or(0, |t| t.opens);

        let filter = self.parse_group(0)?;

        if self.consumed != self.input.len() {
            let gap = first_gap(&self.tokens, self.input.len());
            debug!(
                start = gap.start,
                end = gap.end,
                text = self.input.get(gap.range()).unwrap_or_default(),
                "query text not covered by any term"
            );
            return Err(ParseError::IncompleteParse {
                consumed: self.consumed,
                length: self.input.len(),
            });
        }

        debug!(
            predicates = predicate_count(&filter),
            sort = self.params.sort.len(),
            limit = self.params.limit,
            offset = self.params.offset,
            "parsed query"
        );

        self.params.filter = filter;
        Ok(self.params)
    }

    /// Parses terms until the group at `depth` is closed, or until input ends
    /// at depth 0.
    fn parse_group(&mut self, depth: usize) -> Result<Filter, ParseError> {
        let mut filter = Filter::new();

        while let Some(token) = self.tokens.get(self.cursor).copied() {
            let logic = if filter.is_empty() {
                FilterLogic::Start
            } else {
                FilterLogic::from_symbol(token.logic)
                    .ok_or_else(|| ParseError::InvalidLogic(token.logic.to_string()))?
            };

            if self.pending_opens > 0 {
                if depth >= self.config.max_depth {
                    return Err(ParseError::DepthExceeded {
                        max: self.config.max_depth,
                    });
                }
                self.pending_opens -= 1;
                let sub_filter = self.parse_group(depth + 1)?;
                filter.push(FilterTerm::group(logic, collapse(sub_filter)));
            } else {
                let op: FilterOp = token.op.parse()?;
                self.consume(&token);

                if depth > 0 || !self.apply_directive(&token)? {
                    filter.push(FilterTerm::predicate(logic, op, token.field, token.value));
                }
            }

            if self.pending_closes > 0 {
                if depth == 0 {
                    return Err(ParseError::UnbalancedParentheses {
                        position: self.position,
                    });
                }
                self.pending_closes -= 1;
                return Ok(filter);
            }
        }

        if depth > 0 {
            return Err(ParseError::UnbalancedParentheses {
                position: self.input.len(),
            });
        }
        Ok(filter)
    }

    /// Marks `token` as consumed and moves to the next one.
    fn consume(&mut self, token: &Token<'a>) {
        self.consumed += token.span.len();
        self.position = token.span.end;
        self.pending_closes = token.closes;
        self.cursor += 1;
        self.pending_opens = self.tokens.get(self.cursor).map_or(0, |t| t.opens);
    }

    /// Applies a top-level directive. Returns false if `token` is an ordinary
    /// predicate.
    fn apply_directive(&mut self, token: &Token<'a>) -> Result<bool, ParseError> {
        match token.field {
            "limit" => self.params.limit = parse_count(token)?,
            "offset" => self.params.offset = parse_count(token)?,
            "sort" => self
                .params
                .sort
                .extend(list_entries(token.value).map(SortTerm::from_entry)),
            "option" => {
                for option in list_entries(token.value) {
                    self.params.options.insert(option);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Returns the first stretch of input between `tokens` (or after the last
/// one) that no token covers. Empty if the tokens cover `length` bytes.
fn first_gap(tokens: &[Token<'_>], length: usize) -> Span {
    let mut previous = Span::default();
    for token in tokens {
        if !previous.is_followed_by(token.span) {
            return Span::new(previous.end, token.span.start);
        }
        previous = token.span;
    }
    Span::new(previous.end, length)
}

/// Drops a group level that only wraps another group.
fn collapse(mut sub_filter: Filter) -> Filter {
    if sub_filter.len() == 1 && sub_filter[0].is_group() {
        if let Some(FilterTerm {
            kind: TermKind::Group { sub_filter: inner },
            ..
        }) = sub_filter.pop()
        {
            return inner;
        }
    }
    sub_filter
}

fn parse_count(token: &Token<'_>) -> Result<u64, ParseError> {
    token
        .value
        .parse()
        .map_err(|_| ParseError::InvalidDirectiveValue {
            directive: token.field.to_string(),
            value: token.value.to_string(),
        })
}

fn list_entries(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').filter(|entry| !entry.is_empty())
}
