use crate::extract::ConstantMap;
use serde::{Deserialize, Serialize};

/// A constant declared in both versions with different values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantChange {
    pub name: String,
    pub old_value: String,
    pub new_value: String,
}

/// Constants present in both maps whose values disagree, sorted by name.
/// Names declared on one side only are not reported.
pub fn diff_constants(old: &ConstantMap, new: &ConstantMap) -> Vec<ConstantChange> {
    old.iter()
        .filter_map(|(name, old_value)| {
            new.get(name)
                .filter(|new_value| *new_value != old_value)
                .map(|new_value| ConstantChange {
                    name: name.clone(),
                    old_value: old_value.clone(),
                    new_value: new_value.clone(),
                })
        })
        .collect()
}
