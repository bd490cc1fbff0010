//! Handle projection translation.

use ksql_dsl_expression::expression::ast::Expression;

/// Translate a projection tree to a `SELECT` clause.
///
/// An anonymous-record construction becomes a column list and a bare
/// parameter becomes `*`. Any unrecognized shape also degrades to
/// `SELECT *`, so an ambiguous input is indistinguishable from an
/// intentional select-all.
pub fn translate(expression: &Expression) -> String {
    match expression {
        Expression::Lambda(lambda) => translate(&lambda.body),
        Expression::Convert { operand, .. } => translate(operand),
        Expression::Construct { arguments } => {
            let columns: Vec<String> = arguments
                .iter()
                .filter_map(|(alias, value)| match value {
                    Expression::MemberAccess { member, .. } => {
                        if member == alias {
                            Some(member.to_string())
                        } else {
                            Some(format!("{} AS {}", member, alias))
                        }
                    }
                    _ => None,
                })
                .collect();

            if columns.is_empty() {
                "SELECT *".to_string()
            } else {
                format!("SELECT {}", columns.join(", "))
            }
        }
        Expression::Parameter(_) => "SELECT *".to_string(),
        _ => "SELECT *".to_string(),
    }
}
