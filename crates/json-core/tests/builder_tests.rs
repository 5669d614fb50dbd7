use json_core::{parse, ArrayBuilder, Element, ObjectBuilder, Value};

// ============================================================================
// ArrayBuilder
// ============================================================================

#[test]
fn empty_array_builder() {
    assert_eq!(ArrayBuilder::new().build(), "[]");
    assert_eq!(ArrayBuilder::from(Vec::<i32>::new()).build(), "[]");
}

#[test]
fn array_of_integers() {
    assert_eq!(ArrayBuilder::from(vec![1, 2, 3]).build(), "[1,2,3]");
}

#[test]
fn array_of_strings() {
    assert_eq!(ArrayBuilder::from(vec!["1", "2", "3"]).build(), r#"["1","2","3"]"#);
}

#[test]
fn nested_array_with_object_and_null() {
    let mut object = ObjectBuilder::new();
    object.put("aap", 2);
    let nested = ArrayBuilder::new().with(object).with(None::<Element>);
    let array = ArrayBuilder::new().with(1).with(nested).with("3").with(true);
    assert_eq!(array.build(), r#"[1,[{"aap":2},null],"3",true]"#);
}

#[test]
fn push_keeps_insertion_order() {
    let mut array = ArrayBuilder::new();
    array.push("b");
    array.push("a");
    array.push(0.5);
    assert_eq!(array.len(), 3);
    assert_eq!(array.build(), r#"["b","a",0.5]"#);
    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.build(), "[]");
}

// ============================================================================
// ObjectBuilder
// ============================================================================

#[test]
fn empty_object_builder() {
    assert_eq!(ObjectBuilder::new().build(), "{}");
    let empty: ObjectBuilder = Vec::<(String, i32)>::new().into_iter().collect();
    assert_eq!(empty.build(), "{}");
}

#[test]
fn object_of_integers() {
    let mut object = ObjectBuilder::new();
    object.put("aap", 1);
    object.put("noot", 2);
    object.put("mies", 3);
    let json = object.build();
    assert!(json.contains(r#""aap":1"#));
    assert!(json.contains(r#""noot":2"#));
    assert!(json.contains(r#""mies":3"#));
}

#[test]
fn object_of_strings_after_clear() {
    let mut object = ObjectBuilder::new().with("aap", 1);
    object.clear();
    object.put("aap", "1");
    object.put("noot", "2");
    object.put("mies", "3");
    assert_eq!(object.build(), r#"{"aap":"1","noot":"2","mies":"3"}"#);
}

#[test]
fn nested_object_members() {
    let mut inner = ObjectBuilder::new();
    inner.put("wim", ArrayBuilder::new().with(2));
    inner.put("zus", None::<Element>);

    let mut object = ObjectBuilder::new();
    object.put("aap", 1);
    object.put("noot", inner);
    object.put("gijs", "3");
    object.put("mies", true);

    let json = object.build();
    assert!(json.contains(r#""aap":1"#));
    assert!(json.contains(r#""noot":{"#));
    assert!(json.contains(r#""wim":[2]"#));
    assert!(json.contains(r#""zus":null"#));
    assert!(json.contains(r#""gijs":"3""#));
    assert!(json.contains(r#""mies":true"#));
}

#[test]
fn replacing_a_key_keeps_its_position() {
    let object = ObjectBuilder::new().with("a", 1).with("b", 2).with("a", 3);
    assert_eq!(object.build(), r#"{"a":3,"b":2}"#);
}

#[test]
fn keys_are_escaped() {
    let object = ObjectBuilder::new().with("line\nbreak", "q\"uote");
    assert_eq!(object.build(), r#"{"line\nbreak":"q\"uote"}"#);
}

// ============================================================================
// Element conversions
// ============================================================================

#[test]
fn element_number_rendering() {
    assert_eq!(Element::from(7u8).build(), "7");
    assert_eq!(Element::from(-7i64).build(), "-7");
    assert_eq!(Element::from(u32::MAX).build(), "4294967295");
    assert_eq!(Element::from(1.0).build(), "1.0");
    assert_eq!(Element::from(0.25f32).build(), "0.25");
    assert_eq!(Element::from(f64::NAN).build(), "null");
}

#[test]
fn element_text_rendering() {
    assert_eq!(Element::from('c').build(), r#""c""#);
    assert_eq!(Element::from(String::from("s")).build(), r#""s""#);
    assert_eq!(Element::from("").build(), r#""""#);
}

#[test]
fn display_fallback_renders_as_string() {
    let addr = std::net::Ipv4Addr::new(127, 0, 0, 1);
    let array = ArrayBuilder::new().with(Element::display(addr));
    assert_eq!(array.build(), r#"["127.0.0.1"]"#);
}

#[test]
fn option_some_renders_inner_value() {
    assert_eq!(Element::from(Some(5)).build(), "5");
    assert_eq!(Element::from(None::<&str>).build(), "null");
}

#[test]
fn parsed_values_can_be_embedded() {
    let value = parse(r#"{"k":[1,2]}"#).unwrap();
    let object = ObjectBuilder::new().with("data", value).with("empty", Value::empty_array());
    assert_eq!(object.build(), r#"{"data":{"k":[1.0,2.0]},"empty":[]}"#);
}

#[test]
fn builder_output_parses_back() {
    let object = ObjectBuilder::new()
        .with("name", "Alice")
        .with("age", 30)
        .with("tags", vec!["a", "b"])
        .with("ratio", 0.75);
    let value = parse(&object.build()).unwrap();
    assert_eq!(value.get("name").unwrap().unwrap().string().unwrap(), "Alice");
    assert_eq!(value.get("age").unwrap().unwrap().integer().unwrap(), 30);
    assert_eq!(value.get("tags").unwrap().unwrap().length().unwrap(), 2);
    assert_eq!(value.get("ratio").unwrap().unwrap().number().unwrap(), 0.75);
}

#[test]
fn inspect_staged_entries() {
    let object = ObjectBuilder::new().with("x", 1).with("y", "two");
    let keys: Vec<&str> = object.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, ["x", "y"]);
    assert_eq!(object.get("y"), Some(&Element::Text("two".to_string())));
    assert_eq!(object.get("z"), None);
}
