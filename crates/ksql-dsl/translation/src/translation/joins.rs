//! Handle join translation.

use ksql_dsl_expression::expression::ast::{Expression, Lambda, MethodCall};

use super::error::{Error, JoinSide};
use super::helpers;

/// Translate the first join invocation found in the tree to a complete
/// `SELECT ... FROM ... JOIN ... ON ...` statement.
///
/// Returns the `UNSUPPORTED` sentinel when the tree contains no join
/// invocation at all. A malformed join call (missing selector arguments,
/// mismatched key lists) produces degraded output rather than a panic;
/// only an unresolvable source type or projection alias is fatal.
pub fn translate(expression: &Expression) -> Result<String, Error> {
    let Some(call) = find_join_call(expression) else {
        return Ok("UNSUPPORTED".to_string());
    };

    let outer_type = call
        .arguments
        .first()
        .and_then(helpers::source_element_type)
        .ok_or(Error::UnresolvedJoinSourceType(JoinSide::Outer))?;
    let inner_type = call
        .arguments
        .get(1)
        .and_then(helpers::source_element_type)
        .ok_or(Error::UnresolvedJoinSourceType(JoinSide::Inner))?;

    let outer_selector = call.arguments.get(2).and_then(helpers::extract_lambda);
    let inner_selector = call.arguments.get(3).and_then(helpers::extract_lambda);
    let result_selector = call.arguments.get(4).and_then(helpers::extract_lambda);

    let outer_alias = selector_alias(outer_selector, "o");
    let inner_alias = selector_alias(inner_selector, "c");

    let outer_keys = extract_join_keys(outer_selector);
    let inner_keys = extract_join_keys(inner_selector);

    // Keys pair positionally; a length mismatch silently pairs up to the
    // shorter side.
    let conditions: Vec<String> = outer_keys
        .iter()
        .zip(inner_keys.iter())
        .map(|(outer_key, inner_key)| {
            format!(
                "{}.{} = {}.{}",
                outer_alias, outer_key, inner_alias, inner_key
            )
        })
        .collect();

    let projections = extract_projection(result_selector)?;

    let statement = format!(
        "SELECT {} FROM {} {} JOIN {} {} ON {}",
        projections.join(", "),
        outer_type,
        outer_alias,
        inner_type,
        inner_alias,
        conditions.join(" AND ")
    );
    tracing::info!("join statement: {}", statement);
    Ok(statement)
}

/// Depth-first search for the first method call named `Join`.
///
/// The search reaches through lambda bodies, conversion wrappers,
/// invocation targets and the bound values of member-init and record
/// constructions. It does not look inside the arguments of other calls.
fn find_join_call(expression: &Expression) -> Option<&MethodCall> {
    match expression {
        Expression::MethodCall(call) if call.method == "Join" => Some(call),
        Expression::Lambda(lambda) => find_join_call(&lambda.body),
        Expression::Convert { operand, .. } => find_join_call(operand),
        Expression::Invocation { target } => find_join_call(target),
        Expression::MemberInit { bindings } => {
            bindings.iter().find_map(|(_, value)| find_join_call(value))
        }
        Expression::Construct { arguments } => arguments
            .iter()
            .find_map(|(_, value)| find_join_call(value)),
        _ => None,
    }
}

/// A side's alias is its key selector's first parameter name.
fn selector_alias(selector: Option<&Lambda>, default: &str) -> String {
    selector
        .and_then(|lambda| lambda.parameters.first())
        .map_or_else(|| default.to_string(), |parameter| parameter.name.clone())
}

/// Collect the key member names of a key-selector body: one per
/// constructed argument (with one conversion unwrap permitted), or a
/// single key for a bare member access.
fn extract_join_keys(selector: Option<&Lambda>) -> Vec<String> {
    let Some(lambda) = selector else {
        return vec![];
    };
    match lambda.body.as_ref() {
        Expression::Construct { arguments } => arguments
            .iter()
            .filter_map(|(_, value)| helpers::extract_member(value).map(ToString::to_string))
            .collect(),
        Expression::MemberAccess { member, .. } => vec![member.to_string()],
        _ => vec![],
    }
}

/// Collect the `alias.Member` projection entries of a result-selector
/// body. Arguments that are not member accesses rooted at a selector
/// parameter are silently dropped; a kept argument whose alias cannot be
/// resolved is fatal.
fn extract_projection(selector: Option<&Lambda>) -> Result<Vec<String>, Error> {
    let Some(lambda) = selector else {
        return Ok(vec![]);
    };
    let Expression::Construct { arguments } = lambda.body.as_ref() else {
        return Ok(vec![]);
    };

    let mut projections = vec![];
    for (_, value) in arguments {
        if let Expression::MemberAccess { target, member, .. } = value {
            match projection_root_alias(target) {
                Some(alias) if !alias.is_empty() => {
                    projections.push(format!("{}.{}", alias, member));
                }
                _ => return Err(Error::UnresolvedProjectionAlias(member.clone())),
            }
        }
    }
    Ok(projections)
}

/// The parameter name at the root of a projected member access, allowing
/// one level of nesting through another member access.
fn projection_root_alias(target: &Expression) -> Option<&str> {
    match target {
        Expression::Parameter(parameter) => Some(parameter.name.as_str()),
        Expression::MemberAccess { target: inner, .. } => match inner.as_ref() {
            Expression::Parameter(parameter) => Some(parameter.name.as_str()),
            _ => None,
        },
        _ => None,
    }
}
