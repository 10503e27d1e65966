//! Album record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::resource::Resource;

/// Album as exposed by the upstream `/albums` collection.
///
/// No field is validated. Every field is nullable: an absent or `null` field
/// decodes to `None` and is written back as JSON `null`. Unknown upstream
/// fields are ignored.
///
/// # Examples
/// ```
/// use resource_proxy::domain::Album;
///
/// let album: Album = serde_json::from_str(r#"{"userId":1,"id":11,"title":null}"#)
///     .expect("valid album JSON");
/// assert_eq!(album.id, Some(11));
/// assert_eq!(album.title, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[schema(example = 1)]
    pub user_id: Option<i32>,
    #[schema(example = 11)]
    pub id: Option<i32>,
    #[schema(example = "quidem molestiae enim")]
    pub title: Option<String>,
}

impl Album {
    /// Build a fully populated album.
    pub fn new(user_id: i32, id: i32, title: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            id: Some(id),
            title: Some(title.into()),
        }
    }
}

impl Resource for Album {
    const COLLECTION: &'static str = "albums";
    const KIND: &'static str = "Album";
    const XML_ROOT: &'static str = "album";
    const FILTER_FIELD: &'static str = "title";

    fn id(&self) -> Option<i32> {
        self.id
    }
}
