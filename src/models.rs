use serde::{Deserialize, Serialize};

/// Item resource held by the in-memory store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

impl Item {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Body of `POST /items`
#[derive(Deserialize, Debug, Default)]
pub struct ItemCreate {
    #[serde(default)]
    pub name: String,
}

/// Body of `PUT /items/{id}`; the id comes from the path
#[derive(Deserialize, Debug, Default)]
pub struct ItemUpdate {
    #[serde(default)]
    pub name: String,
}

/// Application user, owned by the users datasource
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "lastName")]
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Company {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Brand {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Response body of the datasource create endpoints
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedId {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_json_shape() {
        let value = serde_json::to_value(Item::new(7, "seven".to_string())).unwrap();
        assert_eq!(value, json!({"id": 7, "name": "seven"}));
    }

    #[test]
    fn test_missing_name_decodes_empty() {
        let create: ItemCreate = serde_json::from_value(json!({})).unwrap();
        assert_eq!(create.name, "");

        assert!(serde_json::from_value::<ItemUpdate>(json!({"name": 5})).is_err());
    }

    #[test]
    fn test_user_uses_camel_case_last_name() {
        let user: User = serde_json::from_value(json!({
            "name": "Ada",
            "lastName": "Lovelace"
        }))
        .unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": 0, "name": "Ada", "lastName": "Lovelace"})
        );
    }
}
