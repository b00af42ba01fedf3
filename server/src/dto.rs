//! Wire types and request validation.
//!
//! # Design
//! Request bodies are first decoded into loose `*Input` structs whose fields
//! are raw JSON values, then checked by [`Validate`] into the strict types the
//! service accepts (`NewTodo`, `TodoPatch`). Every failing rule is collected,
//! so a client sees all problems with a body at once. The service never sees
//! text outside 3..=100 characters.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TEXT_MIN_CHARS: usize = 3;
pub const TEXT_MAX_CHARS: usize = 100;

const TEXT_NOT_STRING: &str = "text must be a string";
const TEXT_TOO_SHORT: &str = "Todo text must be at least 3 characters long";
const TEXT_TOO_LONG: &str = "Todo text must not exceed 100 characters";
const IS_CHECKED_NOT_BOOL: &str = "isChecked must be a boolean value";

/// Store-assigned todo identifier. Serialized as a bare JSON number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub is_checked: bool,
}

/// `{ message, details }` payload returned by create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation<T> {
    pub message: String,
    pub details: T,
}

/// Validated input for creating a todo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
}

/// Validated replacement for a todo's mutable fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: String,
    pub is_checked: bool,
}

/// Raw `POST /todos` body.
#[derive(Debug, Deserialize)]
pub struct CreateTodoInput {
    #[serde(default)]
    pub text: Option<Value>,
}

/// Raw `PATCH /todos/:id` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoInput {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub is_checked: Option<Value>,
}

/// Conversion from a raw request body into a checked service input.
pub trait Validate: Sized {
    type Input: serde::de::DeserializeOwned + Send;

    /// Returns the checked value, or every violated rule's message.
    fn validate(input: Self::Input) -> Result<Self, Vec<String>>;
}

impl Validate for NewTodo {
    type Input = CreateTodoInput;

    fn validate(input: CreateTodoInput) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        let text = check_text(input.text, &mut errors);
        match text {
            Some(text) if errors.is_empty() => Ok(NewTodo { text }),
            _ => Err(errors),
        }
    }
}

impl Validate for TodoPatch {
    type Input = UpdateTodoInput;

    fn validate(input: UpdateTodoInput) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        let text = check_text(input.text, &mut errors);
        let is_checked = match input.is_checked {
            Some(Value::Bool(b)) => Some(b),
            _ => {
                errors.push(IS_CHECKED_NOT_BOOL.to_string());
                None
            }
        };
        match (text, is_checked) {
            (Some(text), Some(is_checked)) if errors.is_empty() => {
                Ok(TodoPatch { text, is_checked })
            }
            _ => Err(errors),
        }
    }
}

fn check_text(value: Option<Value>, errors: &mut Vec<String>) -> Option<String> {
    let Some(Value::String(text)) = value else {
        errors.push(TEXT_NOT_STRING.to_string());
        return None;
    };
    let chars = text.chars().count();
    if chars < TEXT_MIN_CHARS {
        errors.push(TEXT_TOO_SHORT.to_string());
        return None;
    }
    if chars > TEXT_MAX_CHARS {
        errors.push(TEXT_TOO_LONG.to_string());
        return None;
    }
    Some(text)
}
