//! User record with its embedded address and company.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::resource::Resource;

/// Postal address owned by a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[schema(example = "Kulas Light")]
    pub street: Option<String>,
    #[schema(example = "Apt. 556")]
    pub suite: Option<String>,
    #[schema(example = "Gwenborough")]
    pub city: Option<String>,
    #[schema(example = "92998-3874")]
    pub zipcode: Option<String>,
}

/// Employer details owned by a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[schema(example = "Romaguera-Crona")]
    pub company_name: Option<String>,
    #[schema(example = "Multi-layered client-server neural-net")]
    pub catch_phrase: Option<String>,
    #[schema(example = "harness real-time e-markets")]
    pub bs: Option<String>,
}

/// User as exposed by the upstream `/users` collection.
///
/// Address and company are embedded by value. As with albums, every field is
/// nullable, nothing is validated and unknown upstream fields such as
/// `address.geo` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[schema(example = "Leanne Graham")]
    pub name: Option<String>,
    #[schema(example = "Bret")]
    pub username: Option<String>,
    #[schema(example = "Sincere@april.biz")]
    pub email: Option<String>,
    pub address: Option<Address>,
    #[schema(example = "1-770-736-8031 x56442")]
    pub phone: Option<String>,
    #[schema(example = "hildegard.org")]
    pub website: Option<String>,
    pub company: Option<Company>,
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    const KIND: &'static str = "User";
    const XML_ROOT: &'static str = "user";
    const FILTER_FIELD: &'static str = "name";

    fn id(&self) -> Option<i32> {
        self.id
    }
}
