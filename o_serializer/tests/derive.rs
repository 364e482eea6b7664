use std::{collections::VecDeque, rc::Rc};

use o_serializer::{self as o, read, serializer, Attribute, Error, Object, Strategy};
use serde_json::{json, Value};

fn get(object: &dyn Object, key: &str) -> o::Result<Value> {
	read(&Attribute::Object(object), key)?.into_value(key)
}

fn is_unknown(result: o::Result<Value>, expected_key: &str) -> bool {
	matches!(result, Err(Error::UnknownAttribute { key, .. }) if key == expected_key)
}

#[test]
fn named_fields() {
	#[derive(Object)]
	struct Foo {
		u8: u8,
		i64: i64,
		f64: f64,
		bool: bool,
		char: char,
		string: String,
		option: Option<String>,
		vec: Vec<u16>,
		boxed: Box<u32>,
	}

	let foo = Foo {
		u8: 1,
		i64: -2,
		f64: 0.5,
		bool: true,
		char: 'c',
		string: "abc".to_string(),
		option: None,
		vec: vec![3, 4],
		boxed: Box::new(5),
	};

	assert_eq!(get(&foo, "u8"), Ok(json!(1)));
	assert_eq!(get(&foo, "i64"), Ok(json!(-2)));
	assert_eq!(get(&foo, "f64"), Ok(json!(0.5)));
	assert_eq!(get(&foo, "bool"), Ok(json!(true)));
	assert_eq!(get(&foo, "char"), Ok(json!("c")));
	assert_eq!(get(&foo, "string"), Ok(json!("abc")));
	assert_eq!(get(&foo, "option"), Ok(Value::Null));
	assert_eq!(get(&foo, "vec"), Ok(json!([3, 4])));
	assert_eq!(get(&foo, "boxed"), Ok(json!(5)));
	assert!(is_unknown(get(&foo, "nope"), "nope"));
}

#[test]
fn field_called_key() {
	#[derive(Object)]
	enum Entry {
		Pair { key: String, value: u32 },
	}

	#[derive(Object)]
	struct Lookup {
		key: String,
	}

	let entry = Entry::Pair {
		key: "k".to_string(),
		value: 1,
	};
	assert_eq!(get(&entry, "key"), Ok(json!("k")));
	assert_eq!(get(&entry, "value"), Ok(json!(1)));

	let lookup = Lookup {
		key: "k2".to_string(),
	};
	assert_eq!(get(&lookup, "key"), Ok(json!("k2")));
}

#[test]
fn raw_identifiers() {
	#[derive(Object)]
	struct Token {
		r#type: String,
	}

	let token = Token {
		r#type: "ident".to_string(),
	};
	assert_eq!(get(&token, "type"), Ok(json!("ident")));
}

#[test]
fn skip_and_rename() {
	#[derive(Object)]
	struct Account {
		#[object(rename = "login")]
		username: String,
		#[object(skip)]
		#[allow(dead_code)]
		password_hash: String,
	}

	let account = Account {
		username: "ada".to_string(),
		password_hash: "xxx".to_string(),
	};
	assert_eq!(get(&account, "login"), Ok(json!("ada")));
	assert!(is_unknown(get(&account, "username"), "username"));
	assert!(is_unknown(get(&account, "password_hash"), "password_hash"));
}

#[test]
fn methods() {
	#[derive(Object)]
	#[object(method = "full_name", method(key = "adult?", call = "is_adult"))]
	#[object(method(key = "initial"))]
	struct Person {
		first: String,
		last: String,
		age: u8,
	}

	impl Person {
		fn full_name(&self) -> String {
			format!("{} {}", self.first, self.last)
		}

		fn is_adult(&self) -> bool {
			self.age >= 18
		}

		fn initial(&self) -> Option<char> {
			self.first.chars().next()
		}
	}

	let person = Person {
		first: "Grace".to_string(),
		last: "Hopper".to_string(),
		age: 85,
	};
	assert_eq!(get(&person, "full_name"), Ok(json!("Grace Hopper")));
	assert_eq!(get(&person, "adult?"), Ok(json!(true)));
	assert_eq!(get(&person, "initial"), Ok(json!("G")));
	assert!(is_unknown(get(&person, "is_adult"), "is_adult"));
}

#[test]
fn method_returning_borrowed_relation() {
	#[derive(Object)]
	struct Item {
		label: &'static str,
	}

	#[derive(Object)]
	#[object(method = "first_item")]
	struct Basket {
		items: VecDeque<Item>,
	}

	impl Basket {
		fn first_item(&self) -> Option<&Item> {
			self.items.front()
		}
	}

	let basket = Basket {
		items: VecDeque::from([Item { label: "apple" }, Item { label: "pear" }]),
	};
	let item_serializer = serializer! { "label" => o::Field::new("label") };
	let serializer = serializer! {
		"first" => o::From::new("first_item", item_serializer.clone()),
		"all" => o::From::new("items", o::Many::new(item_serializer)),
	};
	assert_eq!(
		serializer.serialize(&basket),
		Ok(json!({
			"first": {"label": "apple"},
			"all": [{"label": "apple"}, {"label": "pear"}],
		}))
	);
}

#[test]
fn tuple_struct() {
	#[derive(Object)]
	struct Pair(String, #[object(skip)] u8, #[object(rename = "third")] bool);

	let pair = Pair("a".to_string(), 1, false);
	assert_eq!(get(&pair, "0"), Ok(json!("a")));
	assert!(is_unknown(get(&pair, "1"), "1"));
	assert_eq!(get(&pair, "third"), Ok(json!(false)));
}

#[test]
fn unit_struct() {
	#[derive(Object)]
	#[object(method = "answer")]
	struct Unit;

	impl Unit {
		fn answer(&self) -> u8 {
			42
		}
	}

	assert_eq!(get(&Unit, "answer"), Ok(json!(42)));
	assert!(is_unknown(get(&Unit, "question"), "question"));
}

#[test]
fn enums() {
	#[derive(Object)]
	#[object(method = "kind")]
	enum Shape {
		Circle { radius: f64 },
		Rect(f64, #[object(skip)] f64, f64),
		Point,
	}

	impl Shape {
		fn kind(&self) -> &'static str {
			match self {
				Self::Circle { .. } => "circle",
				Self::Rect(..) => "rect",
				Self::Point => "point",
			}
		}
	}

	let circle = Shape::Circle { radius: 1.5 };
	assert_eq!(get(&circle, "radius"), Ok(json!(1.5)));
	assert_eq!(get(&circle, "kind"), Ok(json!("circle")));
	assert!(is_unknown(get(&circle, "0"), "0"));

	let rect = Shape::Rect(2.0, 3.0, 4.0);
	assert_eq!(get(&rect, "0"), Ok(json!(2.0)));
	assert!(is_unknown(get(&rect, "1"), "1"));
	assert_eq!(get(&rect, "2"), Ok(json!(4.0)));
	assert!(is_unknown(get(&rect, "radius"), "radius"));

	assert_eq!(get(&Shape::Point, "kind"), Ok(json!("point")));
	assert!(is_unknown(get(&Shape::Point, "radius"), "radius"));
}

#[test]
fn generics() {
	#[derive(Object)]
	struct Wrapper<T> {
		inner: T,
		count: usize,
	}

	let wrapper = Wrapper {
		inner: vec!["x", "y"],
		count: 2,
	};
	assert_eq!(get(&wrapper, "inner"), Ok(json!(["x", "y"])));
	assert_eq!(get(&wrapper, "count"), Ok(json!(2)));
}

#[test]
fn shared_relations() {
	#[derive(Object)]
	struct Author {
		name: String,
	}

	#[derive(Object)]
	struct Post {
		title: String,
		author: Rc<Author>,
	}

	let author = Rc::new(Author {
		name: "Barbara".to_string(),
	});
	let posts = vec![
		Post {
			title: "one".to_string(),
			author: Rc::clone(&author),
		},
		Post {
			title: "two".to_string(),
			author,
		},
	];

	let serializer = o::Many::new(serializer! {
		"title" => o::Field::new("title"),
		"author" => o::From::new("author", serializer! {
			"name" => o::Field::new("name"),
		}),
	});
	assert_eq!(
		serializer.serialize(&posts),
		Ok(json!([
			{"title": "one", "author": {"name": "Barbara"}},
			{"title": "two", "author": {"name": "Barbara"}},
		]))
	);
}

#[test]
fn read_for_serialization() {
	#[derive(Object)]
	#[object(read_for_serialization)]
	struct Secret {
		value: String,
	}

	impl o::ReadForSerialization for Secret {
		fn read_attribute_for_serialization(&self, key: &str) -> o::Result<Attribute<'_>> {
			match key {
				"value" => Ok(Attribute::value("[redacted]")),
				"length" => Ok(Attribute::value(self.value.len())),
				_ => Err(Error::custom(format!("`{key}` is not readable"))),
			}
		}
	}

	let secret = Secret {
		value: "hunter2".to_string(),
	};
	assert_eq!(
		secret.get_attribute("value").map(|attr| attr.into_value("value")),
		Some(Ok(json!("hunter2")))
	);
	assert_eq!(get(&secret, "value"), Ok(json!("[redacted]")));
	assert_eq!(get(&secret, "length"), Ok(json!(7)));
	assert_eq!(
		o::Field::new("other").call(&Attribute::Object(&secret)),
		Err(Error::custom("`other` is not readable"))
	);
}
