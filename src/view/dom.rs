//! DOM surface (WASM only)
//!
//! Rows are assembled with `createElement` and `textContent`, so product
//! names are never parsed as markup.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::model::RowView;
use super::render::{Role, Surface};
use crate::config::ElementIds;
use crate::consts::REMOVE_ID_ATTR;

/// Writes cart views into the current document by element id
pub struct DomSurface {
    document: Document,
    ids: ElementIds,
}

impl DomSurface {
    pub fn new(document: Document, ids: ElementIds) -> Self {
        Self { document, ids }
    }

    fn element(&self, role: Role) -> Option<Element> {
        self.document.get_element_by_id(self.ids.id_for(role))
    }

    fn build_row(&self, row: &RowView) -> Result<Element, JsValue> {
        let div = self.document.create_element("div")?;
        div.set_class_name(row.class);

        let label = self.document.create_element("span")?;
        label.set_text_content(Some(&row.label));
        div.append_child(&label)?;

        let total = self.document.create_element("span")?;
        total.set_text_content(Some(&row.line_total));
        div.append_child(&total)?;

        if row.removable {
            let button = self.document.create_element("button")?;
            button.set_attribute("type", "button")?;
            button.set_attribute(REMOVE_ID_ATTR, &row.id)?;
            button.set_text_content(Some("Remove"));
            div.append_child(&button)?;
        }

        Ok(div)
    }
}

impl Surface for DomSurface {
    fn has(&self, role: Role) -> bool {
        self.element(role).is_some()
    }

    fn set_text(&mut self, role: Role, text: &str) {
        if let Some(el) = self.element(role) {
            el.set_text_content(Some(text));
        }
    }

    fn replace_rows(&mut self, role: Role, rows: &[RowView]) {
        let Some(container) = self.element(role) else {
            return;
        };
        container.set_inner_html("");

        for row in rows {
            let appended = self
                .build_row(row)
                .and_then(|el| container.append_child(&el).map(|_| ()));
            if let Err(e) = appended {
                log::warn!("Failed to render row for {:?}: {:?}", row.id, e);
            }
        }
    }
}
