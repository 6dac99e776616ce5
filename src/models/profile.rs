use serde::{Deserialize, Serialize};

/// Optional singleton stored under `userProfile`, only used to decorate the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_age: Option<String>,
}

impl UserProfile {
    /// Overwrite only the fields that were provided.
    pub fn merge(&mut self, mother: Option<String>, child: Option<String>, age: Option<String>) {
        if let Some(m) = mother {
            self.mother_name = Some(m);
        }
        if let Some(c) = child {
            self.child_name = Some(c);
        }
        if let Some(a) = age {
            self.child_age = Some(a);
        }
    }

    pub fn is_empty(&self) -> bool {
        present(&self.mother_name).is_none()
            && present(&self.child_name).is_none()
            && present(&self.child_age).is_none()
    }

    pub fn mother(&self) -> Option<&str> {
        present(&self.mother_name)
    }

    pub fn child(&self) -> Option<&str> {
        present(&self.child_name)
    }

    pub fn age(&self) -> Option<&str> {
        present(&self.child_age)
    }
}

/// A field counts as present only when it holds non-blank text.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
