//! Helpers for matching the tree shapes shared by more than one
//! translator.

use ksql_dsl_expression::expression::ast::{Expression, Lambda, MemberName, TypeName};

/// Extract a lambda, looking through at most one conversion wrapper.
pub fn extract_lambda(expression: &Expression) -> Option<&Lambda> {
    match expression {
        Expression::Lambda(lambda) => Some(lambda),
        Expression::Convert { operand, .. } => match operand.as_ref() {
            Expression::Lambda(lambda) => Some(lambda),
            _ => None,
        },
        _ => None,
    }
}

/// Extract a member name, looking through at most one conversion wrapper.
pub fn extract_member(expression: &Expression) -> Option<&MemberName> {
    match expression {
        Expression::MemberAccess { member, .. } => Some(member),
        Expression::Convert { operand, .. } => match operand.as_ref() {
            Expression::MemberAccess { member, .. } => Some(member),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve the element type of a join source expression from the type
/// descriptor attached when the tree was built.
pub fn source_element_type(expression: &Expression) -> Option<&TypeName> {
    match expression {
        Expression::Parameter(parameter) => parameter.element_type.as_ref(),
        Expression::MemberAccess { ty, .. } => ty.as_ref(),
        Expression::Convert { operand, .. } => source_element_type(operand),
        _ => None,
    }
}
