//! Pure set algebra behind the permission checkboxes of the role editor.
//!
//! None of these functions touch stored roles. Callers hand the returned
//! selection back to the role service when the user saves.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::permission::{PermissionCatalog, PermissionId, PermissionModule};

/// Ordered, duplicate-free selection of permission identifiers.
///
/// Iteration follows insertion order. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(IndexSet<PermissionId>);

impl PermissionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Returns whether the identifier is selected.
    #[must_use]
    pub fn contains(&self, id: &PermissionId) -> bool {
        self.0.contains(id)
    }

    /// Returns the number of selected identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates identifiers in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionId> {
        self.0.iter()
    }

    /// Returns identifiers as plain tokens in selection order.
    #[must_use]
    pub fn to_tokens(&self) -> Vec<String> {
        self.0.iter().map(|id| id.as_str().to_owned()).collect()
    }

    fn insert(&mut self, id: PermissionId) -> bool {
        self.0.insert(id)
    }

    fn remove(&mut self, id: &PermissionId) -> bool {
        self.0.shift_remove(id)
    }
}

impl FromIterator<PermissionId> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = PermissionId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(PermissionId::from).collect()
    }
}

impl IntoIterator for PermissionSet {
    type Item = PermissionId;
    type IntoIter = indexmap::set::IntoIter<PermissionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = &'a PermissionId;
    type IntoIter = indexmap::set::Iter<'a, PermissionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Checkbox state of a module header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleSelection {
    /// No permission of the module is selected.
    None,
    /// Some, but not all, permissions of the module are selected.
    Partial,
    /// Every permission of the module is selected.
    All,
}

impl ModuleSelection {
    /// Returns a stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::All => "all",
        }
    }
}

/// Flips a single permission in or out of the selection.
///
/// Identifiers unknown to the catalog are accepted; the role service
/// rejects them on save.
#[must_use]
pub fn toggle_permission(current: &PermissionSet, id: &PermissionId) -> PermissionSet {
    let mut next = current.clone();
    if !next.remove(id) {
        next.insert(id.clone());
    }

    next
}

/// Selects every permission of a module, or clears them if all were selected.
///
/// A module without permissions leaves the selection untouched. Newly
/// selected identifiers are appended in catalog order.
#[must_use]
pub fn toggle_module(
    current: &PermissionSet,
    module: PermissionModule,
    catalog: &PermissionCatalog,
) -> PermissionSet {
    let module_ids = catalog.module_permission_ids(module);
    if module_ids.is_empty() {
        return current.clone();
    }

    let mut next = current.clone();
    if module_ids.iter().all(|id| current.contains(id)) {
        for id in module_ids {
            next.remove(id);
        }
    } else {
        for id in module_ids {
            next.insert(id.clone());
        }
    }

    next
}

/// Reports how much of a module is selected.
///
/// Modules without permissions report [`ModuleSelection::None`].
#[must_use]
pub fn module_selection(
    current: &PermissionSet,
    module: PermissionModule,
    catalog: &PermissionCatalog,
) -> ModuleSelection {
    let module_ids = catalog.module_permission_ids(module);
    let selected = module_ids.iter().filter(|id| current.contains(id)).count();

    if selected == 0 {
        ModuleSelection::None
    } else if selected == module_ids.len() {
        ModuleSelection::All
    } else {
        ModuleSelection::Partial
    }
}

/// Selects the full catalog in declaration order.
#[must_use]
pub fn select_all(catalog: &PermissionCatalog) -> PermissionSet {
    catalog
        .list_all()
        .iter()
        .map(|permission| permission.id().clone())
        .collect()
}

/// Deselects everything.
#[must_use]
pub fn clear() -> PermissionSet {
    PermissionSet::new()
}
