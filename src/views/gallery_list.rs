// ============================================================================
// GALLERY LIST VIEW - Admin gallery table
// ============================================================================
// Pure rendering from the gallery slice. Status switches only carry data
// attributes; the root's single click listener dispatches the toggle and the
// table re-renders from the store notification.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_all, clear_children, closest_with, ElementBuilder};
use crate::services::{ApiClient, OperationKind};
use crate::state::task;
use crate::viewmodels::{GalleryRow, GalleryViewModel};
use crate::views::banner::render_banner;

const COLUMNS: [&str; 5] = ["Cover", "Name", "Collection", "Images", "Status"];

fn cell(content: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::tag("td")?.child(content)?.build())
}

fn text_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::tag("td")?.text(text).build())
}

/// Marks the status switch; clicks are handled by one listener on the root
pub const TOGGLE_ACTION: &str = "toggle-status";

fn status_switch(row: &GalleryRow, busy: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::tag("button")?
        .class(if row.status { "status-toggle on" } else { "status-toggle off" })
        .text(row.status_label)
        .attr("data-action", TOGGLE_ACTION)?
        .attr("data-id", &row.id)?
        .attr("data-status", if row.status { "true" } else { "false" })?
        .flag("disabled", busy)?
        .build())
}

/// Gallery id and current status of a clicked status switch
pub fn toggle_target(action: Option<&str>, id: Option<&str>, status: Option<&str>) -> Option<(String, bool)> {
    if action != Some(TOGGLE_ACTION) {
        return None;
    }
    let id = id.map(str::trim).filter(|id| !id.is_empty())?;
    let current = status?.parse().ok()?;
    Some((id.to_string(), current))
}

/// Click handler installed once on the mount root
pub fn handle_list_click(event: &MouseEvent, vm: &GalleryViewModel<ApiClient>) {
    let Some(switch) = closest_with(event, "data-action") else {
        return;
    };
    let target = toggle_target(
        switch.get_attribute("data-action").as_deref(),
        switch.get_attribute("data-id").as_deref(),
        switch.get_attribute("data-status").as_deref(),
    );
    if let Some((id, current)) = target {
        if vm.store().is_loading() {
            return;
        }
        let vm = vm.clone();
        task::spawn(OperationKind::ToggleStatus, async move {
            vm.toggle_and_refresh(&id, current).await
        });
    }
}

fn render_row(row: &GalleryRow, busy: bool) -> Result<Element, JsValue> {
    let cover = match &row.cover_url {
        Some(url) => ElementBuilder::tag("img")?
            .class("gallery-cover")
            .attr("src", url)?
            .attr("alt", &row.name)?
            .build(),
        None => ElementBuilder::tag("span")?.class("gallery-cover empty").text("—").build(),
    };

    Ok(ElementBuilder::tag("tr")?
        .attr("data-id", &row.id)?
        .children(&[
            cell(cover)?,
            text_cell(&row.name)?,
            text_cell(&row.collection_name)?,
            text_cell(&row.image_count.to_string())?,
            cell(status_switch(row, busy)?)?,
        ])?
        .build())
}

fn render_table(rows: &[GalleryRow], busy: bool) -> Result<Element, JsValue> {
    let head_cells = COLUMNS
        .iter()
        .map(|title| ElementBuilder::tag("th").map(|th| th.text(title).build()))
        .collect::<Result<Vec<_>, _>>()?;
    let body_rows = rows
        .iter()
        .map(|row| render_row(row, busy))
        .collect::<Result<Vec<_>, _>>()?;

    let head = ElementBuilder::tag("tr")?.children(&head_cells)?.build();
    Ok(ElementBuilder::tag("table")?
        .class("gallery-table")
        .child(ElementBuilder::tag("thead")?.child(head)?.build())?
        .child(ElementBuilder::tag("tbody")?.children(&body_rows)?.build())?
        .build())
}

/// Re-renders the whole screen into `root`
pub fn render_gallery_list(root: &Element, vm: &GalleryViewModel<ApiClient>, query: &str) -> Result<(), JsValue> {
    let (loading, error, success) = vm
        .store()
        .with(|state| (state.loading, state.error.clone(), state.success.clone()));
    let rows = vm.rows(query);

    let mut screen = vec![ElementBuilder::tag("h1")?.class("page-title").text("Gallery Management").build()];
    if let Some(banner) = render_banner(error.as_deref(), success.as_deref())? {
        screen.push(banner);
    }
    screen.push(match (loading, rows.is_empty()) {
        (true, true) => ElementBuilder::tag("p")?.class("loading").text("Loading…").build(),
        (false, true) => ElementBuilder::tag("p")?.class("empty").text("No galleries found").build(),
        _ => render_table(&rows, loading)?,
    });

    clear_children(root);
    append_all(root, &screen)
}
