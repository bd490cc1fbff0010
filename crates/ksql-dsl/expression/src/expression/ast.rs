//! Type definitions of the query expression tree.

use enum_iterator::Sequence;

/// A node in the expression tree built by the fluent query API.
///
/// The tree is immutable once constructed; translators only ever borrow it
/// and never retain it past a single call.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// The root binding of a lambda parameter.
    Parameter(Parameter),
    /// `target.Member`; the target may itself be a member access.
    MemberAccess {
        target: Box<Expression>,
        member: MemberName,
        ty: Option<TypeName>,
    },
    /// A literal leaf value.
    Constant(Value),
    /// A boxing or quoting wrapper that must be unwrapped to reach the
    /// real operand.
    Convert {
        operand: Box<Expression>,
        kind: ConversionKind,
    },
    /// A comparison or logical operation on two operands.
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// An instance or static/extension-style method call.
    MethodCall(MethodCall),
    /// A lambda with its parameter list and body.
    Lambda(Lambda),
    /// Anonymous-record construction; pair order is preserved in output.
    Construct {
        arguments: Vec<(MemberName, Expression)>,
    },
    /// A delegate-invocation wrapper, transparent to the translators.
    Invocation { target: Box<Expression> },
    /// A member-init wrapper; only its binding values are ever inspected.
    MemberInit {
        bindings: Vec<(MemberName, Expression)>,
    },
}

/// A lambda parameter. A parameter that binds a query source carries the
/// source's element type, attached at construction time so translators
/// never have to inspect runtime types.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub element_type: Option<TypeName>,
}

/// A method invocation with its ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub receiver: Option<Box<Expression>>,
    pub method: String,
    pub is_static: bool,
    pub arguments: Vec<Expression>,
}

/// A lambda expression. Parameters are referenced from the body by name
/// only, never by back-pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub parameters: Vec<Parameter>,
    pub body: Box<Expression>,
}

/// A constant leaf with its runtime type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A decimal carried in textual form.
    Decimal(String),
    /// A date-time carried in textual form.
    DateTime(String),
}

/// A binary operator tag.
///
/// Only the comparison and logical tags translate to the target dialect.
/// The arithmetic tags exist so trees containing them can be represented
/// and rejected explicitly instead of silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum BinaryOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    And,
    Or,
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// The kind of conversion a `Convert` wrapper represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// A boxing or widening conversion around a value.
    Boxing,
    /// A quoting wrapper around a nested lambda.
    Quote,
}

/// The name of a record member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberName(pub String);

/// The name of a record (entity) type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(pub String);

impl std::fmt::Display for MemberName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
