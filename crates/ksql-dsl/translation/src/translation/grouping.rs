//! Handle group-by translation.

use ksql_dsl_expression::expression::ast::Expression;

use super::helpers;

/// Translate a grouping key tree to a `GROUP BY` clause.
///
/// An unrecognized shape degrades to the `GROUP BY UNKNOWN` sentinel
/// rather than failing, keeping the caller's pipeline non-fatal.
pub fn translate(expression: &Expression) -> String {
    match expression {
        Expression::Construct { arguments } => {
            let mut keys: Vec<String> = arguments
                .iter()
                .filter_map(|(_, value)| match value {
                    Expression::MemberAccess { member, .. } => Some(member.to_string()),
                    _ => None,
                })
                .collect();

            // Retry allowing one conversion unwrap per argument, but only
            // when no argument was a direct member access.
            if keys.is_empty() {
                keys = arguments
                    .iter()
                    .filter_map(|(_, value)| {
                        helpers::extract_member(value).map(ToString::to_string)
                    })
                    .collect();
            }

            format!("GROUP BY {}", keys.join(", "))
        }
        Expression::MemberAccess { member, .. } => format!("GROUP BY {}", member),
        _ => "GROUP BY UNKNOWN".to_string(),
    }
}
