//! Helpers for building expression trees in the shapes the translators
//! consume, so every caller constructs nodes in one place.

use super::ast::*;

/// A bare lambda parameter reference.
pub fn parameter(name: &str) -> Expression {
    Expression::Parameter(Parameter {
        name: name.to_string(),
        element_type: None,
    })
}

/// A parameter bound to a query source of the given element type.
pub fn source_parameter(name: &str, element_type: &str) -> Expression {
    Expression::Parameter(Parameter {
        name: name.to_string(),
        element_type: Some(TypeName(element_type.to_string())),
    })
}

/// `target.member` with no declared type.
pub fn member(target: Expression, name: &str) -> Expression {
    Expression::MemberAccess {
        target: Box::new(target),
        member: MemberName(name.to_string()),
        ty: None,
    }
}

/// `target.member` declared with the given type.
pub fn typed_member(target: Expression, name: &str, ty: &str) -> Expression {
    Expression::MemberAccess {
        target: Box::new(target),
        member: MemberName(name.to_string()),
        ty: Some(TypeName(ty.to_string())),
    }
}

/// A string constant.
pub fn string_literal(value: &str) -> Expression {
    Expression::Constant(Value::String(value.to_string()))
}

/// A boolean constant.
pub fn bool_literal(value: bool) -> Expression {
    Expression::Constant(Value::Bool(value))
}

/// An integer constant.
pub fn int_literal(value: i64) -> Expression {
    Expression::Constant(Value::Int(value))
}

/// A floating-point constant.
pub fn float_literal(value: f64) -> Expression {
    Expression::Constant(Value::Float(value))
}

/// A decimal constant in its textual form.
pub fn decimal_literal(value: &str) -> Expression {
    Expression::Constant(Value::Decimal(value.to_string()))
}

/// A date-time constant in its textual form.
pub fn datetime_literal(value: &str) -> Expression {
    Expression::Constant(Value::DateTime(value.to_string()))
}

/// A binary operation node.
pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
}

/// A boxing conversion around an operand.
pub fn boxed(operand: Expression) -> Expression {
    Expression::Convert {
        operand: Box::new(operand),
        kind: ConversionKind::Boxing,
    }
}

/// A quoting wrapper around a nested lambda.
pub fn quoted(lambda: Expression) -> Expression {
    Expression::Convert {
        operand: Box::new(lambda),
        kind: ConversionKind::Quote,
    }
}

/// A lambda parameter for use in a parameter list.
pub fn lambda_parameter(name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        element_type: None,
    }
}

/// A lambda over the given parameters.
pub fn lambda(parameters: Vec<Parameter>, body: Expression) -> Expression {
    Expression::Lambda(Lambda {
        parameters,
        body: Box::new(body),
    })
}

/// A method call on a receiver.
pub fn instance_call(receiver: Expression, method: &str, arguments: Vec<Expression>) -> Expression {
    Expression::MethodCall(MethodCall {
        receiver: Some(Box::new(receiver)),
        method: method.to_string(),
        is_static: false,
        arguments,
    })
}

/// A static or extension-style method call.
pub fn static_call(method: &str, arguments: Vec<Expression>) -> Expression {
    Expression::MethodCall(MethodCall {
        receiver: None,
        method: method.to_string(),
        is_static: true,
        arguments,
    })
}

/// An anonymous-record construction from alias/value pairs.
pub fn construct(arguments: Vec<(&str, Expression)>) -> Expression {
    Expression::Construct {
        arguments: arguments
            .into_iter()
            .map(|(alias, value)| (MemberName(alias.to_string()), value))
            .collect(),
    }
}

/// A delegate-invocation wrapper.
pub fn invocation(target: Expression) -> Expression {
    Expression::Invocation {
        target: Box::new(target),
    }
}

/// A member-init wrapper from binding pairs.
pub fn member_init(bindings: Vec<(&str, Expression)>) -> Expression {
    Expression::MemberInit {
        bindings: bindings
            .into_iter()
            .map(|(name, value)| (MemberName(name.to_string()), value))
            .collect(),
    }
}
