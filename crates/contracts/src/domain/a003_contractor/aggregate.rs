use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::shared::wire::{de_id, de_opt_string, de_string};

// ============================================================================
// Authority flag
// ============================================================================

/// Whether a contractor may act on assigned projects.
///
/// On the wire this is a `0`/`1` integer. Only the number `0` reads as
/// blocked; every other value, including a missing field, reads as active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthorityStatus {
    #[default]
    Active,
    Blocked,
}

impl AuthorityStatus {
    pub fn from_wire(value: &Value) -> Self {
        match value {
            Value::Number(n) if n.as_f64() == Some(0.0) => AuthorityStatus::Blocked,
            _ => AuthorityStatus::Active,
        }
    }

    /// Integer flag the authority endpoint expects
    pub fn as_flag(&self) -> u8 {
        match self {
            AuthorityStatus::Active => 1,
            AuthorityStatus::Blocked => 0,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            AuthorityStatus::Active => AuthorityStatus::Blocked,
            AuthorityStatus::Blocked => AuthorityStatus::Active,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, AuthorityStatus::Blocked)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthorityStatus::Active => "ACTIVE",
            AuthorityStatus::Blocked => "BLOCKED",
        }
    }
}

impl Serialize for AuthorityStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_flag())
    }
}

impl<'de> Deserialize<'de> for AuthorityStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .map(AuthorityStatus::from_wire)
            .unwrap_or_default())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_string")]
    pub name: String,
    #[serde(default, deserialize_with = "de_string")]
    pub company: String,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_active: AuthorityStatus,
}

impl Contractor {
    pub fn is_blocked(&self) -> bool {
        self.is_active.is_blocked()
    }
}

/// Registration form; every field goes out as a query parameter, empty
/// ones included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContractorDto {
    pub name: String,
    pub company: String,
    pub phone: String,
}

impl NewContractorDto {
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("company", self.company.as_str()),
            ("phone", self.phone.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contractor(value: Value) -> Contractor {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_zero_is_blocked() {
        let c = contractor(json!({"id": 3, "name": "Ravi", "company": "RK Infra", "is_active": 0}));
        assert_eq!(c.id, "3");
        assert!(c.is_blocked());
        assert_eq!(c.is_active.label(), "BLOCKED");
    }

    #[test]
    fn test_anything_else_is_active() {
        for raw in [json!(1), json!(2), json!("0"), json!(false), json!(null)] {
            let c = contractor(json!({"id": 1, "is_active": raw}));
            assert_eq!(c.is_active, AuthorityStatus::Active, "raw value {raw}");
        }
        let missing = contractor(json!({"id": 1}));
        assert_eq!(missing.is_active, AuthorityStatus::Active);
    }

    #[test]
    fn test_numeric_phone_keeps_list_decodable() {
        let list: Vec<Contractor> = serde_json::from_value(json!([
            {"id": 1, "name": "Ravi", "company": "RK Infra", "phone": 9876543210u64},
            {"id": 2, "name": "Sita", "company": "SK Build", "phone": "98"},
            {"id": 3, "name": "Amit", "company": "AB", "phone": null}
        ]))
        .unwrap();

        assert_eq!(list[0].phone.as_deref(), Some("9876543210"));
        assert_eq!(list[1].phone.as_deref(), Some("98"));
        assert_eq!(list[2].phone, None);
    }

    #[test]
    fn test_toggle_and_flag() {
        assert_eq!(AuthorityStatus::Active.toggled(), AuthorityStatus::Blocked);
        assert_eq!(AuthorityStatus::Blocked.toggled().as_flag(), 1);
        assert_eq!(serde_json::to_value(AuthorityStatus::Blocked).unwrap(), json!(0));
    }

    #[test]
    fn test_registration_pairs_include_empty_phone() {
        let dto = NewContractorDto {
            name: "Ravi".into(),
            company: "RK Infra".into(),
            phone: String::new(),
        };
        assert_eq!(
            dto.query_pairs(),
            [("name", "Ravi"), ("company", "RK Infra"), ("phone", "")]
        );
    }
}
