use monkey_object::{HashKey, Object};

#[test]
fn equal_strings_produce_equal_hash_keys() {
    let hello1 = Object::String("Hello World".to_string());
    let hello2 = Object::String("Hello World".to_string());
    let diff = Object::String("My name is johnny".to_string());

    assert_eq!(hello1.hash_key(), hello2.hash_key());
    assert_ne!(hello1.hash_key(), diff.hash_key());
}

#[test]
fn string_and_integer_do_not_collide_on_numeric_content() {
    let one = Object::Integer(1);
    let s = Object::String("1".to_string());
    assert_ne!(one.hash_key(), s.hash_key());
}

#[test]
fn booleans_project_to_distinct_keys() {
    let t = Object::Boolean(true);
    let f = Object::Boolean(false);
    assert_ne!(t.hash_key(), f.hash_key());
    assert_eq!(Object::Boolean(true).hash_key(), t.hash_key());
}

#[test]
fn boolean_and_integer_do_not_collide() {
    assert_ne!(
        Object::Boolean(true).hash_key(),
        Object::Integer(1).hash_key()
    );
    assert_ne!(
        Object::Boolean(false).hash_key(),
        Object::Integer(0).hash_key()
    );
}

#[test]
fn hashkey_is_suitable_as_a_map_key() {
    use std::collections::HashMap;
    let mut m: HashMap<HashKey, &str> = HashMap::new();
    m.insert(Object::String("one".into()).hash_key().unwrap(), "one");
    m.insert(Object::Integer(1).hash_key().unwrap(), "int-one");
    assert_eq!(m.get(&Object::String("one".into()).hash_key().unwrap()), Some(&"one"));
    assert_eq!(m.get(&Object::Integer(1).hash_key().unwrap()), Some(&"int-one"));
}
