//! Domain models for users and their laptops

use serde::{Deserialize, Serialize};

/// Storage-assigned user identifier
pub type UserId = i64;

/// Storage-assigned laptop identifier
pub type LaptopId = i64;

/// A registered user. The password hash never leaves the repository layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// A laptop record owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laptop {
    pub id: LaptopId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
}

/// Fields for a laptop that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLaptop {
    pub name: String,
    pub description: String,
}

/// Partial update for a laptop.
///
/// Only fields set to `Some` overwrite the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaptopPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl LaptopPatch {
    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Merge this patch into a loaded laptop, field by field
    pub fn apply(self, laptop: &mut Laptop) {
        if let Some(name) = self.name {
            laptop.name = name;
        }
        if let Some(description) = self.description {
            laptop.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_laptop() -> Laptop {
        Laptop {
            id: 7,
            user_id: 1,
            name: "ThinkPad X1".to_string(),
            description: "Work machine".to_string(),
        }
    }

    #[test]
    fn test_patch_overwrites_only_given_fields() {
        let mut laptop = sample_laptop();
        let patch = LaptopPatch {
            name: None,
            description: Some("Spare".to_string()),
        };

        patch.apply(&mut laptop);

        assert_eq!(laptop.name, "ThinkPad X1");
        assert_eq!(laptop.description, "Spare");
        assert_eq!(laptop.id, 7);
        assert_eq!(laptop.user_id, 1);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut laptop = sample_laptop();
        let patch = LaptopPatch::default();
        assert!(patch.is_empty());

        patch.apply(&mut laptop);
        assert_eq!(laptop, sample_laptop());
    }
}
