//! In-memory `RecordClient` used by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::client::{FormPayload, ListOptions, RecordClient};
use super::error::ApiError;
use super::types::{AuthResponse, UserRecord};

/// One recorded call against the mock.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    FullList { collection: String, options: ListOptions },
    FirstListItem { collection: String, filter: String },
    Create { collection: String, payload: FormPayload },
    AuthWithPassword { collection: String, identity: String },
    ClearAuth,
}

/// Scripted responses plus a log of every call made.
#[derive(Default)]
pub struct MockClient {
    pub calls: RefCell<Vec<Call>>,
    pub list_responses: RefCell<VecDeque<Result<Vec<Value>, ApiError>>>,
    pub first_responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    pub create_responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    pub auth_responses: RefCell<VecDeque<Result<AuthResponse, ApiError>>>,
    pub token: RefCell<Option<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, response: Result<Vec<Value>, ApiError>) -> Self {
        self.list_responses.borrow_mut().push_back(response);
        self
    }

    pub fn with_first(self, response: Result<Value, ApiError>) -> Self {
        self.first_responses.borrow_mut().push_back(response);
        self
    }

    pub fn with_create(self, response: Result<Value, ApiError>) -> Self {
        self.create_responses.borrow_mut().push_back(response);
        self
    }

    pub fn with_auth(self, response: Result<AuthResponse, ApiError>) -> Self {
        self.auth_responses.borrow_mut().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn create_calls(&self) -> Vec<(String, FormPayload)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Create { collection, payload } => Some((collection.clone(), payload.clone())),
                _ => None,
            })
            .collect()
    }
}

fn missing() -> ApiError {
    ApiError::Transport("no scripted response".to_owned())
}

#[async_trait(?Send)]
impl RecordClient for MockClient {
    async fn full_list(&self, collection: &str, options: &ListOptions) -> Result<Vec<Value>, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::FullList { collection: collection.to_owned(), options: options.clone() });
        self.list_responses.borrow_mut().pop_front().unwrap_or_else(|| Err(missing()))
    }

    async fn first_list_item(&self, collection: &str, filter: &str) -> Result<Value, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::FirstListItem { collection: collection.to_owned(), filter: filter.to_owned() });
        self.first_responses.borrow_mut().pop_front().unwrap_or_else(|| Err(missing()))
    }

    async fn create(&self, collection: &str, payload: FormPayload) -> Result<Value, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Create { collection: collection.to_owned(), payload });
        self.create_responses.borrow_mut().pop_front().unwrap_or_else(|| Err(missing()))
    }

    async fn auth_with_password(
        &self,
        collection: &str,
        identity: &str,
        _password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::AuthWithPassword { collection: collection.to_owned(), identity: identity.to_owned() });
        let response = self.auth_responses.borrow_mut().pop_front().unwrap_or_else(|| Err(missing()));
        if let Ok(auth) = &response {
            *self.token.borrow_mut() = Some(auth.token.clone());
        }
        response
    }

    fn clear_auth(&self) {
        self.calls.borrow_mut().push(Call::ClearAuth);
        *self.token.borrow_mut() = None;
    }

    fn auth_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

/// A successful auth response for `name`.
pub fn auth_ok(id: &str, name: &str, email: &str) -> AuthResponse {
    AuthResponse {
        token: format!("token-{id}"),
        record: UserRecord { id: id.to_owned(), name: name.to_owned(), email: email.to_owned(), avatar: None },
    }
}

/// A minimal article record as the backend would return it.
pub fn article_json(id: &str, title: &str, created: &str, author: Option<&str>) -> Value {
    let mut value = serde_json::json!({
        "id": id,
        "collectionId": "col_articles",
        "collectionName": "articles",
        "title": title,
        "description": format!("about {title}"),
        "image": format!("{id}.jpg"),
        "created": created,
        "user": "",
    });
    if let Some(name) = author {
        value["user"] = Value::String(format!("u-{name}"));
        value["expand"] = serde_json::json!({ "user": { "id": format!("u-{name}"), "name": name } });
    }
    value
}
