//! Handle predicate/where clause translation.

use ksql_dsl_expression::expression::ast::{BinaryOperator, Expression, Value};

use super::error::Error;
use super::string::Ksql;

/// Translate a predicate tree to a `WHERE` clause.
///
/// Every binary node is fully parenthesized. An operator outside the
/// mapped comparison and logical set fails the whole translation; the
/// caller receives no partial output.
pub fn translate(expression: &Expression) -> Result<String, Error> {
    let mut ksql = Ksql::new();
    ksql.append_syntax("WHERE ");
    translate_expression(&mut ksql, expression)?;
    Ok(ksql.text)
}

fn translate_expression(ksql: &mut Ksql, expression: &Expression) -> Result<(), Error> {
    match expression {
        Expression::BinaryOperation {
            left,
            operator,
            right,
        } => {
            ksql.append_syntax("(");
            translate_expression(ksql, left)?;
            ksql.append_syntax(" ");
            ksql.append_syntax(clause_operator(*operator)?);
            ksql.append_syntax(" ");
            translate_expression(ksql, right)?;
            ksql.append_syntax(")");
            Ok(())
        }
        Expression::MemberAccess { member, .. } => {
            // Single-source predicates only: no table qualification.
            ksql.append_identifier(&member.0);
            Ok(())
        }
        Expression::Constant(value) => {
            append_value(ksql, value);
            Ok(())
        }
        Expression::Convert { operand, .. } => translate_expression(ksql, operand),
        Expression::Lambda(lambda) => translate_expression(ksql, &lambda.body),
        // None of these can contribute to a well-formed predicate.
        Expression::Parameter(_)
        | Expression::MethodCall(_)
        | Expression::Construct { .. }
        | Expression::Invocation { .. }
        | Expression::MemberInit { .. } => Ok(()),
    }
}

fn append_value(ksql: &mut Ksql, value: &Value) {
    match value {
        // Embedded quotes are not escaped.
        Value::String(s) => {
            ksql.append_syntax("'");
            ksql.append_syntax(s);
            ksql.append_syntax("'");
        }
        Value::Bool(true) => ksql.append_syntax("true"),
        Value::Bool(false) => ksql.append_syntax("false"),
        Value::Int(i) => ksql.append_syntax(format!("{}", i).as_str()),
        Value::Float(f) => ksql.append_syntax(format!("{}", f).as_str()),
        // Decimals and date-times keep their default textual form; the
        // per-field precision and format metadata is not consulted here.
        Value::Decimal(text) => ksql.append_syntax(text),
        Value::DateTime(text) => ksql.append_syntax(text),
    }
}

/// The dialect operator for a binary operator tag.
fn clause_operator(operator: BinaryOperator) -> Result<&'static str, Error> {
    match operator {
        BinaryOperator::Equal => Ok("="),
        BinaryOperator::NotEqual => Ok("<>"),
        BinaryOperator::GreaterThan => Ok(">"),
        BinaryOperator::GreaterThanOrEqualTo => Ok(">="),
        BinaryOperator::LessThan => Ok("<"),
        BinaryOperator::LessThanOrEqualTo => Ok("<="),
        BinaryOperator::And => Ok("AND"),
        BinaryOperator::Or => Ok("OR"),
        BinaryOperator::Add
        | BinaryOperator::Subtract
        | BinaryOperator::Multiply
        | BinaryOperator::Divide => Err(Error::UnsupportedOperator(operator)),
    }
}
