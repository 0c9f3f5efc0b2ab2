//! Snapshot tests for Java parameter object rendering.
//!
//! These tests verify that the rendered class text matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use edamame_codegen::CodeStyle;
use edamame_ir::{Annotation, JavaType, Modifier, Parameter};
use edamame_java::BeanClassBuilder;

fn point_builder(y_setter_required: bool) -> BeanClassBuilder {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Point");
    builder.set_package_name("p");
    builder.set_style(CodeStyle::default());
    builder.add_field(Parameter::new("x", JavaType::int()), false);
    builder.add_field(Parameter::new("y", JavaType::int()), y_setter_required);
    builder
}

fn affixed_style() -> CodeStyle {
    CodeStyle {
        field_name_prefix: "m_".into(),
        static_field_name_prefix: "s_".into(),
        parameter_name_prefix: "p_".into(),
        generate_final_parameters: true,
        ..CodeStyle::default()
    }
}

/// A class exercising affixed naming, a boolean getter, a static field,
/// varargs, annotations, and a documentation comment at once.
fn event_builder() -> BeanClassBuilder {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Event");
    builder.set_package_name("com.acme.event");
    builder.set_style(affixed_style());
    builder.add_field(
        Parameter::new("p_id", JavaType::named("java.lang.String")),
        false,
    );
    builder.add_field(
        Parameter::new("active", JavaType::boolean()).annotation(Annotation::unresolved()),
        true,
    );
    builder.add_field(
        Parameter::new("counter", JavaType::int()).modifier(Modifier::Static),
        true,
    );
    builder.add_field(
        Parameter::new("tags", JavaType::array(JavaType::named("java.lang.String")))
            .varargs()
            .annotation(Annotation::resolved("org.jetbrains.annotations.NotNull", ""))
            .doc("/** Tags attached to the event. */"),
        false,
    );
    builder
}

#[test]
fn test_point_immutable_snapshot() {
    let text = point_builder(false).render().unwrap();
    insta::assert_snapshot!("point_immutable", text);
}

#[test]
fn test_point_immutable_exact() {
    let text = point_builder(false).render().unwrap();
    let expected = "package p;\n\
        \n\
        public class Point {\n\
        \tprivate final int x;\n\
        \tprivate final int y;\n\
        \n\
        \tpublic Point(int x, int y) {\n\
        \t\tthis.x = x;\n\
        \t\tthis.y = y;\n\
        \t}\n\
        \n\
        \tpublic int getX() {\n\
        \t\treturn x;\n\
        \t}\n\
        \n\
        \tpublic int getY() {\n\
        \t\treturn y;\n\
        \t}\n\
        }\n";
    assert_eq!(text, expected);
}

#[test]
fn test_point_mutable_snapshot() {
    let text = point_builder(true).render().unwrap();
    insta::assert_snapshot!("point_mutable_y", text);
}

#[test]
fn test_event_styled_snapshot() {
    let text = event_builder().render().unwrap();
    insta::assert_snapshot!("event_styled", text);
}

#[test]
fn test_setter_omission() {
    let immutable = point_builder(false).render().unwrap();
    assert!(immutable.contains("private final int y;"));
    assert!(!immutable.contains("setY"));
    assert!(!immutable.contains("void set"));

    let mutable = point_builder(true).render().unwrap();
    assert!(mutable.contains("private int y;"));
    assert!(mutable.contains("public void setY(int y) {"));
    // x stays immutable: final field, no setter
    assert!(mutable.contains("private final int x;"));
    assert!(!mutable.contains("setX"));
}

#[test]
fn test_determinism() {
    let builder = point_builder(true);
    assert_eq!(builder.render().unwrap(), builder.render().unwrap());
    // A freshly configured builder with the same inputs agrees too.
    assert_eq!(builder.render().unwrap(), point_builder(true).render().unwrap());
}

#[test]
fn test_order_preservation() {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Ordered");
    builder.set_package_name("p");
    builder.set_style(CodeStyle::default());
    builder.add_field(Parameter::new("alpha", JavaType::int()), true);
    builder.add_field(Parameter::new("beta", JavaType::int()), true);
    builder.add_field(Parameter::new("gamma", JavaType::int()), true);
    let text = builder.render().unwrap();

    for block in [
        ["int alpha;", "int beta;", "int gamma;"],
        ["int alpha,", "int beta,", "int gamma)"],
        ["getAlpha", "getBeta", "getGamma"],
        ["setAlpha", "setBeta", "setGamma"],
    ] {
        let positions: Vec<usize> = block
            .iter()
            .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions[0] < positions[1]);
        assert!(positions[1] < positions[2]);
    }
}

#[test]
fn test_varargs_duality() {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Message");
    builder.set_package_name("p");
    builder.set_style(CodeStyle::default());
    builder.add_field(
        Parameter::new("parts", JavaType::array(JavaType::named("java.lang.String"))).varargs(),
        false,
    );
    let text = builder.render().unwrap();

    assert!(text.contains("public Message(java.lang.String... parts) {"));
    assert!(text.contains("private final java.lang.String[] parts;"));
    assert!(text.contains("public java.lang.String[] getParts() {"));
    assert!(!text.contains("[]..."));
}

#[test]
fn test_boolean_accessor_naming() {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Flags");
    builder.set_package_name("p");
    builder.set_style(CodeStyle::default());
    builder.add_field(Parameter::new("active", JavaType::boolean()), false);
    builder.add_field(Parameter::new("flag", JavaType::named("java.lang.Boolean")), false);
    builder.add_field(Parameter::new("count", JavaType::int()), false);
    let text = builder.render().unwrap();

    assert!(text.contains("public boolean isActive() {"));
    assert!(!text.contains("getActive"));
    // The boxed type is not the boolean primitive and keeps the get prefix.
    assert!(text.contains("public java.lang.Boolean getFlag() {"));
    assert!(text.contains("public int getCount() {"));
}

#[test]
fn test_self_qualification_only_on_name_collision() {
    let plain = point_builder(false).render().unwrap();
    assert!(plain.contains("this.x = x;"));
    assert!(plain.contains("this.y = y;"));

    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Value");
    builder.set_package_name("p");
    builder.set_style(affixed_style());
    builder.add_field(Parameter::new("amount", JavaType::long()), true);
    let text = builder.render().unwrap();

    assert!(text.contains("m_amount = p_amount;"));
    assert!(!text.contains("this."));
}

#[test]
fn test_name_agreement_across_blocks() {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Value");
    builder.set_package_name("p");
    builder.set_style(affixed_style());
    builder.add_field(Parameter::new("p_value", JavaType::double()), true);
    let text = builder.render().unwrap();

    // The same field name flows through declaration, constructor body,
    // getter body, and setter body.
    assert!(text.contains("private double m_value;"));
    assert_eq!(text.matches("m_value = p_value;").count(), 2);
    assert!(text.contains("return m_value;"));
}

#[test]
fn test_static_parameter_uses_static_affixes_everywhere() {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Registry");
    builder.set_package_name("p");
    builder.set_style(affixed_style());
    builder.add_field(
        Parameter::new("counter", JavaType::int()).modifier(Modifier::Static),
        true,
    );
    let text = builder.render().unwrap();

    assert!(text.contains("private static int s_counter;"));
    assert_eq!(text.matches("s_counter = p_counter;").count(), 2);
    assert!(text.contains("return s_counter;"));
    assert!(!text.contains("m_counter"));
}

#[test]
fn test_annotation_carry_over() {
    let text = event_builder().render().unwrap();
    // Resolved annotation re-emitted at the field, the constructor
    // parameter, and the getter.
    assert_eq!(
        text.matches("@org.jetbrains.annotations.NotNull").count(),
        3
    );
    // The unresolved annotation on `active` leaves no trace.
    assert_eq!(text.matches('@').count(), 3);
}

#[test]
fn test_generic_type_parameters_in_header() {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Pair");
    builder.set_package_name("p");
    builder.set_type_arguments(["K", "V"]);
    builder.set_style(CodeStyle::default());
    builder.add_field(Parameter::new("first", JavaType::named("K")), false);
    builder.add_field(Parameter::new("second", JavaType::named("V")), false);
    let text = builder.render().unwrap();

    assert!(text.contains("public class Pair<K,V> {"));
    assert!(text.contains("private final K first;"));
    assert!(text.contains("public V getSecond() {"));
}

#[test]
fn test_empty_package_omits_clause() {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Point");
    builder.set_package_name("");
    builder.set_style(CodeStyle::default());
    builder.add_field(Parameter::new("x", JavaType::int()), false);
    let text = builder.render().unwrap();

    assert!(!text.contains("package"));
    assert!(text.starts_with("public class Point {"));
}

#[test]
fn test_doc_comment_carried_verbatim() {
    let mut builder = BeanClassBuilder::new();
    builder.set_class_name("Retry");
    builder.set_package_name("p");
    builder.set_style(CodeStyle::default());
    builder.add_field(
        Parameter::new("count", JavaType::int()).doc("/**\n * Number of retries.\n */"),
        false,
    );
    let text = builder.render().unwrap();

    assert!(text.contains("\t/**\n\t * Number of retries.\n\t */\n\tprivate final int count;"));
}

#[test]
fn test_final_parameters_style() {
    let mut builder = point_builder(true);
    builder.set_style(CodeStyle {
        generate_final_parameters: true,
        ..CodeStyle::default()
    });
    let text = builder.render().unwrap();

    assert!(text.contains("public Point(final int x, final int y) {"));
    assert!(text.contains("public void setY(final int y) {"));
}
