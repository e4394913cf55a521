//! Step-by-step construction of an immutable `User`.

use std::fmt;

/// Immutable user record. Only readable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    first_name: String,
    last_name: String,
    age: Option<u32>,
    phone: Option<String>,
    address: Option<String>,
}

impl User {
    pub fn builder(first_name: impl Into<String>, last_name: impl Into<String>) -> UserBuilder {
        UserBuilder::new(first_name, last_name)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// One line per field, missing optionals shown as `null`.
    pub fn lines(&self) -> Vec<String> {
        fn or_null<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "null".to_string(), |v| v.to_string())
        }
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            or_null(self.age),
            or_null(self.phone()),
            or_null(self.address()),
        ]
    }
}

/// Builder holding the required names and any optionals set so far.
#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    first_name: String,
    last_name: String,
    age: Option<u32>,
    phone: Option<String>,
    address: Option<String>,
}

impl UserBuilder {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn build(self) -> User {
        User {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            phone: self.phone,
            address: self.address,
        }
    }
}
