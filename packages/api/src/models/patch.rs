//! # Profile patches
//!
//! A [`ProfilePatch`] states, per editable field, whether the server should
//! leave it alone, clear it, or replace it. The intent is carried by
//! [`Patch`] and encoded in JSON by presence:
//!
//! | JSON | [`Patch`] |
//! |------|-----------|
//! | field absent | [`Patch::Unchanged`] |
//! | `null` | [`Patch::Clear`] |
//! | any value | [`Patch::Set`] |

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use store::{Availability, User};

/// Change to apply to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    /// Apply to a field whose cleared state is its default value.
    pub fn apply_to(self, field: &mut T)
    where
        T: Default,
    {
        match self {
            Patch::Unchanged => {}
            Patch::Clear => *field = T::default(),
            Patch::Set(value) => *field = value,
        }
    }

    /// Apply to an optional field, where clearing means `None`.
    pub fn apply_to_option(self, field: &mut Option<T>) {
        match self {
            Patch::Unchanged => {}
            Patch::Clear => *field = None,
            Patch::Set(value) => *field = Some(value),
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            // Unchanged fields are skipped by the containing struct.
            Patch::Unchanged | Patch::Clear => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

/// The editable subset of a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub skills: Patch<Vec<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub availability: Patch<Availability>,
}

impl ProfilePatch {
    pub fn apply(self, user: &mut User) {
        self.name.apply_to(&mut user.name);
        self.skills.apply_to(&mut user.skills);
        self.availability.apply_to_option(&mut user.availability);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::WorkingHours;

    fn ada() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            skills: vec!["c".to_string()],
            availability: Some(Availability {
                timezone: "UTC".to_string(),
                working_hours: WorkingHours {
                    start: "09:00".to_string(),
                    end: "17:00".to_string(),
                },
            }),
        }
    }

    #[test]
    fn test_decode_absent_null_and_value() {
        let patch: ProfilePatch =
            serde_json::from_str(r#"{"name":"Grace","skills":null}"#).unwrap();
        assert_eq!(patch.name, Patch::Set("Grace".to_string()));
        assert_eq!(patch.skills, Patch::Clear);
        assert_eq!(patch.availability, Patch::Unchanged);
    }

    #[test]
    fn test_encode_skips_unchanged() {
        let patch = ProfilePatch {
            skills: Patch::Clear,
            ..ProfilePatch::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({ "skills": null })
        );
    }

    #[test]
    fn test_apply_leaves_unchanged_fields() {
        let mut user = ada();
        ProfilePatch {
            name: Patch::Set("Ada Lovelace".to_string()),
            ..ProfilePatch::default()
        }
        .apply(&mut user);

        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.skills, vec!["c".to_string()]);
        assert!(user.availability.is_some());
    }

    #[test]
    fn test_apply_clear() {
        let mut user = ada();
        ProfilePatch {
            name: Patch::Unchanged,
            skills: Patch::Clear,
            availability: Patch::Clear,
        }
        .apply(&mut user);

        assert_eq!(user.name, "Ada");
        assert!(user.skills.is_empty());
        assert!(user.availability.is_none());
    }
}
