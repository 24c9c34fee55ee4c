//! Filter lowering.

use queryp_core::{FilterFieldTypes, FilterLogic, FilterOp, FilterTerm, FilterType, TermKind};
use tracing::trace;

use crate::error::{CompileError, Result};
use crate::value::SqlParam;

/// Appends the SQL for `filter` to `clause` and its values to `params`.
///
/// Placeholders are numbered from `params.len() + 1`, so several filters can
/// be lowered into the same buffers. The first term gets no combinator; the
/// caller joins separate filters itself.
///
/// # Errors
///
/// - [`CompileError::FieldNotFound`] if a field does not resolve against
///   `field_types`.
/// - [`CompileError::InvalidOperatorForType`] if an operator is not legal for
///   the resolved type.
/// - [`CompileError::InvalidValue`] if a boolean field gets a non-boolean
///   value.
pub fn filter_query(
    field_types: &FilterFieldTypes,
    filter: &[FilterTerm],
    clause: &mut String,
    params: &mut Vec<SqlParam>,
) -> Result<()> {
    for (i, term) in filter.iter().enumerate() {
        if i > 0 {
            clause.push_str(match term.logic {
                FilterLogic::Or => " OR ",
                FilterLogic::And | FilterLogic::Start => " AND ",
            });
        }

        match &term.kind {
            TermKind::Group { sub_filter } => {
                clause.push('(');
                filter_query(field_types, sub_filter, clause, params)?;
                clause.push(')');
            }
            TermKind::Predicate { op, field, value } => {
                let (column, field_type) = field_types
                    .find(field)
                    .ok_or_else(|| CompileError::FieldNotFound(field.clone()))?;

                let sql_op = sql_operator(field_type, *op).ok_or_else(|| {
                    CompileError::InvalidOperatorForType {
                        op: *op,
                        field: field.clone(),
                        field_type,
                    }
                })?;

                let param = match field_type {
                    FilterType::Bool => SqlParam::Bool(SqlParam::parse_bool(value).ok_or_else(
                        || CompileError::InvalidValue {
                            field: field.clone(),
                            value: value.clone(),
                        },
                    )?),
                    FilterType::Simple
                    | FilterType::String
                    | FilterType::Numeric
                    | FilterType::Time => SqlParam::Text(value.clone()),
                };
                params.push(param);
                trace!(column, op = sql_op, placeholder = params.len(), "bound predicate");

                clause.push_str(column);
                clause.push(' ');
                clause.push_str(sql_op);
                clause.push(' ');
                clause.push_str(&SqlParam::placeholder(params.len()));
            }
        }
    }
    Ok(())
}

/// Returns true if `op` may be applied to a field of type `field_type`.
#[must_use]
pub const fn operator_allowed(field_type: FilterType, op: FilterOp) -> bool {
    match field_type {
        FilterType::Simple | FilterType::Numeric | FilterType::Time => op.is_comparison(),
        FilterType::String => true,
        FilterType::Bool => op.is_equality(),
    }
}

/// Returns the PostgreSQL operator for `op` on a field of type `field_type`,
/// or `None` if the combination is not allowed.
#[must_use]
pub const fn sql_operator(field_type: FilterType, op: FilterOp) -> Option<&'static str> {
    if !operator_allowed(field_type, op) {
        return None;
    }
    Some(match op {
        FilterOp::Equals => "=",
        FilterOp::NotEquals => "!=",
        FilterOp::LessThan => "<",
        FilterOp::LessThanEqual => "<=",
        FilterOp::GreaterThan => ">",
        FilterOp::GreaterThanEqual => ">=",
        FilterOp::Like => "LIKE",
        FilterOp::NotLike => "NOT LIKE",
        FilterOp::ILike => "ILIKE",
        FilterOp::NotILike => "NOT ILIKE",
        FilterOp::Regexp => "~",
        FilterOp::NotRegexp => "!~",
        FilterOp::IRegexp => "~*",
        FilterOp::NotIRegexp => "!~*",
    })
}
