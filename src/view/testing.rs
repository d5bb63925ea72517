//! In-memory surface for renderer and controller tests

use std::collections::{HashMap, HashSet};

use super::model::RowView;
use super::render::{Role, Surface};

/// Records the last text and rows written per role
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    present: HashSet<Role>,
    texts: HashMap<Role, String>,
    rows: HashMap<Role, Vec<RowView>>,
    /// Number of write calls received
    pub writes: usize,
}

impl RecordingSurface {
    pub fn with_roles(roles: &[Role]) -> Self {
        Self {
            present: roles.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn text(&self, role: Role) -> Option<&str> {
        self.texts.get(&role).map(String::as_str)
    }

    pub fn rows(&self, role: Role) -> &[RowView] {
        self.rows.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rendered state without the write counter
    pub fn snapshot(&self) -> (Vec<(Role, String)>, Vec<(Role, Vec<RowView>)>) {
        let texts = Role::ALL
            .iter()
            .filter_map(|r| self.texts.get(r).map(|t| (*r, t.clone())))
            .collect();
        let rows = Role::ALL
            .iter()
            .filter_map(|r| self.rows.get(r).map(|v| (*r, v.clone())))
            .collect();
        (texts, rows)
    }
}

impl Surface for RecordingSurface {
    fn has(&self, role: Role) -> bool {
        self.present.contains(&role)
    }

    fn set_text(&mut self, role: Role, text: &str) {
        assert!(self.has(role), "wrote text to absent role {role:?}");
        self.texts.insert(role, text.to_string());
        self.writes += 1;
    }

    fn replace_rows(&mut self, role: Role, rows: &[RowView]) {
        assert!(self.has(role), "wrote rows to absent role {role:?}");
        self.rows.insert(role, rows.to_vec());
        self.writes += 1;
    }
}
