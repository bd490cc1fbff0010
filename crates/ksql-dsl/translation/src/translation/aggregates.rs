//! Handle aggregates translation.

use ksql_dsl_expression::expression::ast::{Expression, MethodCall};

use super::helpers;

/// Translate an aggregate projection tree to a `SELECT` clause of
/// aggregate-function calls.
///
/// A column that cannot be resolved degrades to the visible `UNKNOWN`
/// placeholder; this translator never fails.
pub fn translate(expression: &Expression) -> String {
    match expression {
        Expression::Lambda(lambda) => translate(&lambda.body),
        Expression::Convert { operand, .. } => translate(operand),
        Expression::Construct { arguments } => {
            let entries: Vec<String> = arguments
                .iter()
                .filter_map(|(alias, value)| match value {
                    Expression::MethodCall(call) => Some(format!(
                        "{}({}) AS {}",
                        function_name(&call.method),
                        aggregated_column(call),
                        alias
                    )),
                    _ => None,
                })
                .collect();

            if entries.is_empty() {
                "SELECT".to_string()
            } else {
                format!("SELECT {}", entries.join(", "))
            }
        }
        _ => "SELECT".to_string(),
    }
}

/// Derive the dialect function name from the method name.
fn function_name(method: &str) -> String {
    let name = method.to_uppercase();
    match name.strip_suffix("BYOFFSET") {
        Some(prefix) => format!("{}_BY_OFFSET", prefix),
        None => name,
    }
}

/// Resolve the column an aggregate call operates on.
fn aggregated_column(call: &MethodCall) -> String {
    // An instance aggregate whose single argument is a lambda over the
    // grouped element, with a direct member body.
    if let [Expression::Lambda(lambda)] = call.arguments.as_slice() {
        if let Expression::MemberAccess { member, .. } = lambda.body.as_ref() {
            return member.to_string();
        }
    }

    // An extension-style static call carries its selector in the second
    // argument, possibly behind a quoting wrapper.
    if call.is_static && call.arguments.len() == 2 {
        if let Some(lambda) = helpers::extract_lambda(&call.arguments[1]) {
            if let Some(member) = helpers::extract_member(&lambda.body) {
                return member.to_string();
            }
        }
    }

    // Fall back to the receiver when it is itself a member access.
    if let Some(receiver) = &call.receiver {
        if let Expression::MemberAccess { member, .. } = receiver.as_ref() {
            return member.to_string();
        }
    }

    "UNKNOWN".to_string()
}
