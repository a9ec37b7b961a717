use dashboard_shared::{panel_activation, tab_target};
use web_sys::Document;

use crate::{dom, log};

pub const TAB_LINK_SELECTOR: &str = ".nav-tabs .nav-link";
pub const TAB_PANE_SELECTOR: &str = ".tab-pane";
pub const ACTIVE_CLASS: &str = "active";

/// Show the pane with id `target` and hide its siblings.
/// Panes are left untouched if `target` is not one of them.
pub fn activate_pane(document: &Document, target: &str) -> bool {
    let panes = dom::query_all(document, TAB_PANE_SELECTOR);
    let ids: Vec<String> = panes.iter().map(|pane| pane.id()).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

    let Some(states) = panel_activation(&id_refs, target) else {
        log::warn(&format!("No tab pane with id '{target}'"));
        return false;
    };

    for (pane, (_, active)) in panes.iter().zip(states) {
        pane.class_list()
            .toggle_with_force(ACTIVE_CLASS, active)
            .ok();
    }
    true
}

pub fn wire_tabs(document: &Document) {
    for link in dom::query_all(document, TAB_LINK_SELECTOR) {
        let tab = link.clone();
        let document = document.clone();
        dom::on_click(&link, move |event| {
            event.prevent_default();
            let href = tab.get_attribute("href").unwrap_or_default();
            let Some(target) = tab_target(&href) else {
                return;
            };
            activate_pane(&document, target);
        });
    }
}
