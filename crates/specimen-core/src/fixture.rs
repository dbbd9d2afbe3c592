//! The literal-valued fixture record graph.
//!
//! Every field is filled from a literal at construction and never reassigned.
//! Fields are private; read them through the accessors. Each `TestObject`
//! owns its nested records and collections, so two constructions never share
//! state.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Serialize;

/// Printed once the fixture has been constructed.
pub const STATUS_LINE: &str =
    "创建测试对象完成，请在调试模式中查看此对象并测试JSON复制功能";

/// The root record: primitives, strings, arrays, a list, a map and two nested records.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestObject {
    id: i32,
    price: f64,
    active: bool,

    name: String,
    description: String,

    numbers: [i32; 5],
    tags: [String; 3],

    comments: Vec<String>,
    scores: HashMap<String, i32>,

    address: Address,
    creator: User,
}

/// Postal address nested in the root record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    city: String,
    street: String,
    zip_code: String,
}

/// The user who created the root record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    user_id: i32,
    username: String,
    email: String,
    roles: [String; 2],
}

impl TestObject {
    #[must_use]
    pub fn new() -> Self {
        let comments = vec![
            "评论1".to_string(),
            "评论2".to_string(),
            "评论3".to_string(),
        ];

        let scores = HashMap::from([
            ("语文".to_string(), 90),
            ("数学".to_string(), 95),
            ("英语".to_string(), 85),
        ]);

        Self {
            id: 1001,
            price: 99.99,
            active: true,
            name: "测试对象".to_string(),
            description: "这是一个用于测试JSON复制功能的复杂对象".to_string(),
            numbers: [1, 2, 3, 4, 5],
            tags: ["测试".to_string(), "示例".to_string(), "JSON".to_string()],
            comments,
            scores,
            address: Address::new(),
            creator: User::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn numbers(&self) -> &[i32; 5] {
        &self.numbers
    }

    #[must_use]
    pub const fn tags(&self) -> &[String; 3] {
        &self.tags
    }

    /// Comments in insertion order.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Score per subject. Iteration order is unspecified.
    #[must_use]
    pub const fn scores(&self) -> &HashMap<String, i32> {
        &self.scores
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub const fn creator(&self) -> &User {
        &self.creator
    }
}

impl Default for TestObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Address {
    #[must_use]
    pub fn new() -> Self {
        Self {
            city: "北京".to_string(),
            street: "朝阳区".to_string(),
            zip_code: "100000".to_string(),
        }
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new()
    }
}

impl User {
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_id: 123,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            roles: ["管理员".to_string(), "开发者".to_string()],
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> i32 {
        self.user_id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn roles(&self) -> &[String; 2] {
        &self.roles
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_records_match_their_literals() {
        let address = Address::new();
        assert_eq!(address.city(), "北京");
        assert_eq!(address.street(), "朝阳区");
        assert_eq!(address.zip_code(), "100000");

        let user = User::new();
        assert_eq!(user.user_id(), 123);
        assert_eq!(user.username(), "admin");
        assert_eq!(user.email(), "admin@example.com");
        assert_eq!(user.roles(), &["管理员".to_string(), "开发者".to_string()]);
    }

    #[test]
    fn default_is_the_literal_fixture() {
        assert_eq!(TestObject::default(), TestObject::new());
    }

    #[test]
    fn status_line_is_a_single_line() {
        assert!(!STATUS_LINE.contains('\n'));
        assert!(STATUS_LINE.contains("JSON"));
    }
}
