use ksql_dsl_expression::expression::ast::*;
use ksql_dsl_expression::expression::helpers::*;

#[test]
fn it_preserves_construct_argument_order() {
    let expression = construct(vec![
        ("OrderId", member(parameter("o"), "OrderId")),
        ("Amount", member(parameter("o"), "Amount")),
        ("Region", member(parameter("o"), "Region")),
    ]);
    let Expression::Construct { arguments } = expression else {
        panic!("expected a construction node");
    };
    let aliases: Vec<&str> = arguments
        .iter()
        .map(|(alias, _)| alias.0.as_str())
        .collect();
    assert_eq!(aliases, vec!["OrderId", "Amount", "Region"]);
}

#[test]
fn it_builds_nested_member_accesses() {
    let expression = member(member(parameter("o"), "Customer"), "Name");
    let Expression::MemberAccess { target, member, .. } = expression else {
        panic!("expected a member access");
    };
    assert_eq!(member, MemberName("Name".to_string()));
    assert!(matches!(
        target.as_ref(),
        Expression::MemberAccess { member, .. } if member.0 == "Customer"
    ));
}

#[test]
fn it_attaches_element_types_to_source_parameters() {
    let Expression::Parameter(source) = source_parameter("orders", "Order") else {
        panic!("expected a parameter");
    };
    assert_eq!(source.element_type, Some(TypeName("Order".to_string())));

    let Expression::Parameter(bare) = parameter("o") else {
        panic!("expected a parameter");
    };
    assert_eq!(bare.element_type, None);
}

#[test]
fn it_distinguishes_boxing_from_quoting_wrappers() {
    let boxed_member = boxed(member(parameter("o"), "Amount"));
    assert!(matches!(
        boxed_member,
        Expression::Convert {
            kind: ConversionKind::Boxing,
            ..
        }
    ));

    let quoted_lambda = quoted(lambda(
        vec![lambda_parameter("x")],
        member(parameter("x"), "Amount"),
    ));
    assert!(matches!(
        quoted_lambda,
        Expression::Convert {
            kind: ConversionKind::Quote,
            ..
        }
    ));
}
