#![allow(dead_code)]

use o_serializer::{self as o, serializer, Object, Serializer};
use serde_json::{json, Value};

mod generate;
pub use generate::generate_users;

// Fixtures stand in for database models.
// A `User` has one `Profile` and many `Tag`s.

#[derive(Object, Clone, Debug, PartialEq)]
pub struct Tag {
	pub name: String,
}

impl Tag {
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_string(),
		}
	}

	pub fn to_json(&self) -> Value {
		json!({
			"name": self.name,
		})
	}
}

#[derive(Object, Clone, Debug, PartialEq)]
#[object(method = "avatar")]
pub struct Profile {
	pub id: Option<u64>,
	pub first_name: String,
	pub last_name: Option<String>,
}

impl Profile {
	pub fn new(first_name: &str, last_name: Option<&str>) -> Self {
		Self {
			id: None,
			first_name: first_name.to_string(),
			last_name: last_name.map(str::to_string),
		}
	}

	pub fn avatar(&self) -> String {
		format!(
			"https://example.com/{}-{}.png",
			self.first_name,
			self.last_name.as_deref().unwrap_or_default()
		)
	}

	pub fn to_json(&self) -> Value {
		json!({
			"first_name": self.first_name,
			"last_name": self.last_name,
			"avatar": self.avatar(),
		})
	}
}

#[derive(Object, Clone, Debug, PartialEq)]
#[object(method(key = "active?", call = "active"))]
pub struct User {
	pub id: Option<String>,
	pub email: String,
	#[object(skip)]
	pub password: Option<String>,
	pub profile: Option<Profile>,
	pub tags: Vec<Tag>,
}

impl User {
	pub fn active(&self) -> bool {
		true
	}

	pub fn to_json(&self) -> Value {
		json!({
			"id": self.id,
			"is_active": self.active(),
			"email": self.email,
			"profile": self.profile.as_ref().map(Profile::to_json),
			"tags": self.tags.iter().map(Tag::to_json).collect::<Vec<_>>(),
		})
	}
}

pub fn tag_serializer() -> Serializer {
	serializer! {
		"name" => o::Field::new("name"),
	}
}

pub fn profile_serializer() -> Serializer {
	serializer! {
		..o::PlainFields::new(["first_name", "last_name", "avatar"]),
	}
}

pub fn user_serializer() -> Serializer {
	serializer! {
		"id" => o::Computed::new(|user: &User| user.id.clone()),
		"is_active" => o::Field::new("active?"),
		"email" => o::Field::new("email"),
		"profile" => o::From::new("profile", profile_serializer()),
		"tags" => o::From::new("tags", o::Many::new(tag_serializer())),
	}
}

pub struct Users {
	pub tag1: Tag,
	pub tag2: Tag,
	pub tag3: Tag,
	pub profile1: Profile,
	pub profile2: Profile,
	pub user1: User,
	pub user2: User,
	pub user3: User,
}

pub fn users() -> Users {
	let tag1 = Tag::new("tag1");
	let tag2 = Tag::new("tag2");
	let tag3 = Tag::new("tag3");

	let profile1 = Profile::new("fname1", Some("lname1"));
	let profile2 = Profile::new("fname2", None);

	let user1 = User {
		id: None,
		email: "email1".to_string(),
		password: None,
		profile: Some(profile1.clone()),
		tags: vec![tag1.clone(), tag2.clone()],
	};
	let user2 = User {
		id: None,
		email: "email2".to_string(),
		password: Some("hunter2".to_string()),
		profile: Some(profile2.clone()),
		tags: vec![tag2.clone(), tag3.clone()],
	};
	let user3 = User {
		id: Some("ID".to_string()),
		email: "email3".to_string(),
		password: None,
		profile: None,
		tags: vec![],
	};

	Users {
		tag1,
		tag2,
		tag3,
		profile1,
		profile2,
		user1,
		user2,
		user3,
	}
}

/// Keys of a JSON object, in order.
pub fn keys(value: &Value) -> Vec<&str> {
	value
		.as_object()
		.expect("Expected a JSON object")
		.keys()
		.map(String::as_str)
		.collect()
}
