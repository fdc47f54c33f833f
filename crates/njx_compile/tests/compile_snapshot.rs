//! End-to-end compiler snapshot tests.
//!
//! These mirror how a real component template is authored: a controller
//! parameter, a scope parameter, nested elements, interpolation shorthands
//! and repeats, all rendered to the final template string.

use njx_ast::{interpolation, Value};
use njx_compile::{
    component, create_element, ng_repeat, ng_repeat_entries, render_template, ComponentOptions,
    Template, TreeDom,
};

#[test]
fn example_component_template() {
    let template = Template::new("(ctrl, $)", |dom, args| {
        let ctrl = &args[0];
        let str_var = ctrl.get("str")?;
        let scoped = ctrl.get("$scope")?.get("myScopedVar")?;
        let username = ctrl.get("username")?;
        let arr = ctrl.get("arr")?;

        let item_template = Template::new("(deez, { $index })", |dom, args| {
            let index = args[1].get("$index")?;
            Ok(create_element(
                dom,
                "div",
                &[("class", Value::from("repeated"))],
                &[index, Value::from(": "), args[0].clone()],
            )
            .into())
        });
        let repeated = ng_repeat(dom, &arr, &item_template)?;

        Ok(create_element(
            dom,
            "div",
            &[],
            &[
                Value::Element(create_element(
                    dom,
                    "span",
                    &[],
                    &[Value::from("Type-safe ctrl variable access: "), str_var],
                )),
                Value::Element(create_element(dom, "span", &[], &[scoped])),
                Value::Element(create_element(
                    dom,
                    "a",
                    &[(
                        "ng-href",
                        Value::Str(
                            format!("img/{}.jpg", interpolation(&username, &["uppercase"])).into(),
                        ),
                    )],
                    &[Value::from("IMG")],
                )),
                Value::Element(repeated),
                Value::from("Username: "),
                Value::List(vec![username, Value::from("uppercase")]),
                Value::List(vec![
                    Value::Element(create_element(dom, "i", &[], &[Value::from("1")])),
                    Value::Element(create_element(dom, "i", &[], &[Value::from("2")])),
                ]),
                Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
            ],
        )
        .into())
    });

    let descriptor = component(
        Box::new(TreeDom),
        ComponentOptions {
            controller: "ExampleController".into(),
            template,
            options: serde_json::Map::new(),
        },
    )
    .unwrap();

    assert_eq!(descriptor.controller_as(), "ctrl");
    insta::assert_snapshot!(
        descriptor.template().unwrap(),
        @r#"<div><span>Type-safe ctrl variable access: {{ctrl.str}}</span><span>{{ctrl.$scope.myScopedVar}}</span><a ng-href="img/{{ctrl.username|uppercase}}.jpg">IMG</a><div class="repeated" ng-repeat="deez in ctrl.arr">{{$index}}: {{deez}}</div>Username: {{ctrl.username|uppercase}}<i>1</i><i>2</i>123</div>"#
    );
}

#[test]
fn style_and_object_attributes() {
    let template = Template::new("(ctrl)", |dom, args| {
        let active = args[0].get("isActive")?;
        Ok(create_element(
            dom,
            "div",
            &[
                (
                    "style",
                    Value::Object(vec![
                        ("color".into(), Value::from("red")),
                        ("backgroundColor".into(), Value::from("blue")),
                    ]),
                ),
                ("ng-class", Value::Object(vec![("active".into(), active)])),
            ],
            &[],
        )
        .into())
    });

    insta::assert_snapshot!(
        render_template(&TreeDom, &template, "$").unwrap(),
        @r#"<div style="color:red;background-color:blue" ng-class="{active:ctrl.isActive}"></div>"#
    );
}

#[test]
fn keyed_object_repeat() {
    let template = Template::new("(ctrl)", |dom, args| {
        let lookup = args[0].get("lookup")?;
        let entry_template = Template::new("(key, value)", |dom, args| {
            Ok(create_element(
                dom,
                "li",
                &[],
                &[args[0].clone(), Value::from("="), args[1].clone()],
            )
            .into())
        });
        let entry = ng_repeat_entries(dom, &lookup, &entry_template)?;
        Ok(create_element(dom, "ul", &[], &[Value::Element(entry)]).into())
    });

    insta::assert_snapshot!(
        render_template(&TreeDom, &template, "$").unwrap(),
        @r#"<ul><li ng-repeat="(key, value) in ctrl.lookup">{{key}}={{value}}</li></ul>"#
    );
}

#[test]
fn text_escaping() {
    let template = Template::new("(ctrl)", |dom, _| {
        Ok(create_element(dom, "div", &[], &[Value::from("a & b < c")]).into())
    });

    insta::assert_snapshot!(
        render_template(&TreeDom, &template, "$").unwrap(),
        @"<div>a &amp; b &lt; c</div>"
    );
}

#[test]
fn fragment_template() {
    let template = Template::new("(ctrl)", |dom, args| {
        Ok(vec![
            create_element(dom, "header", &[], &[args[0].get("title")?]),
            create_element(dom, "footer", &[], &[args[0].get("year")?]),
        ]
        .into())
    });

    insta::assert_snapshot!(
        render_template(&TreeDom, &template, "$").unwrap(),
        @r#"
    <header>{{ctrl.title}}</header>
    <footer>{{ctrl.year}}</footer>
    "#
    );
}
