use crate::ids::PersonId;

/// Cast member as reported by the catalog credits endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: PersonId,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    /// `known_for_department` upstream, e.g. "Acting" or "Directing".
    pub department: String,
}

impl Actor {
    pub fn is_in_department(&self, department: &str) -> bool {
        self.department == department
    }
}
