//! 用户业务服务

use serde_json::Value;

use super::model::{CreateUserRequest, CreatedUser, User};
use crate::core::error::CoreError;

pub const USER_NOT_FOUND: &str = "User not found";
pub const NAME_AND_EMAIL_REQUIRED: &str = "Name and email are required";

const ROSTER: [(i64, &str, &str); 3] = [
    (1, "John Doe", "john@example.com"),
    (2, "Jane Smith", "jane@example.com"),
    (3, "Bob Johnson", "bob@example.com"),
];

/// 固定用户名单，每次调用都返回一份新的拷贝
fn fixed_users() -> Vec<User> {
    ROSTER
        .iter()
        .map(|&(id, name, email)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    pub fn list_users(&self) -> Vec<User> {
        fixed_users()
    }

    /// `raw_id` 按宽松规则解析；解析不出数字同样视为找不到
    pub fn get_user(&self, raw_id: &str) -> Result<User, CoreError> {
        let id = parse_loose_int(raw_id);
        fixed_users()
            .into_iter()
            .find(|u| Some(u.id) == id)
            .ok_or_else(|| CoreError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// 把请求体转换成创建请求
    ///
    /// 对象按字段读取；数组和 `null` 视为没有字段；
    /// 其他顶层值（数字、字符串、布尔）不是合法的请求体。
    pub fn parse_create_request(&self, body: Value) -> Result<CreateUserRequest, CoreError> {
        match body {
            Value::Object(_) => serde_json::from_value(body)
                .map_err(|e| CoreError::Internal(format!("invalid create user body: {}", e))),
            Value::Null | Value::Array(_) => Ok(CreateUserRequest::default()),
            other => Err(CoreError::Internal(format!(
                "unexpected top-level JSON value: {}",
                other
            ))),
        }
    }

    /// 校验后回显新用户，不写入名单
    pub fn create_user(&self, req: CreateUserRequest) -> Result<CreatedUser, CoreError> {
        let name = req.name.filter(is_truthy);
        let email = req.email.filter(is_truthy);

        match (name, email) {
            (Some(name), Some(email)) => Ok(CreatedUser {
                id: chrono::Utc::now().timestamp_millis(),
                name,
                email,
            }),
            _ => Err(CoreError::BadRequest(NAME_AND_EMAIL_REQUIRED.to_string())),
        }
    }
}

/// JSON 值的真值：`null`、`false`、`0`、`""` 为假，其余为真
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 宽松整数解析：跳过前导空白，可选符号，`0x` 前缀按十六进制，
/// 然后取最长的数字前缀。没有任何数字时返回 `None`。
pub fn parse_loose_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // 溢出时同样返回 None，名单里不可能有这样的 id
    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
