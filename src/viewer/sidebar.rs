//! The Leaflet sidebar control and the DOM elements of its info panel.
//!
//! State lives in a [`SidePanel`]; every change is mirrored to the control
//! (open/close) and to the panel's title and content elements. Opens and
//! closes the user makes on the widget itself come back through its
//! `opening`/`closing` events ([`watch_widget`]).

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::config::{PanelLabels, SidebarOptions};
use crate::error::Result;
use crate::map::leaflet::{self, LeafletMap, Sidebar};
use crate::map::{require_element, to_js};
use crate::panel::{marker_panel_content, MapClick, SidePanel};
use crate::types::{escape_html, MarkerProperties, PanelContent, PanelLine};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SidebarInit<'a> {
    container: &'a str,
    close_button: bool,
    position: &'a str,
}

#[derive(Serialize)]
struct PanelInit {
    id: String,
    tab: String,
    pane: String,
    title: String,
}

pub(crate) struct SidebarController {
    panel: SidePanel,
    control: Sidebar,
    title: Element,
    content: Element,
    labels: PanelLabels,
    no_data_title: String,
}

impl SidebarController {
    pub(crate) fn new(
        map: &LeafletMap,
        options: &SidebarOptions,
        labels: PanelLabels,
    ) -> Result<Self> {
        require_element(&options.container)?;

        let control = leaflet::sidebar(&to_js(&SidebarInit {
            container: &options.container,
            close_button: options.close_button,
            position: &options.position,
        })?)?;
        control.add_to(map);
        control.add_panel(&to_js(&PanelInit {
            id: options.panel_id.clone(),
            tab: "<i class='fa fa-bars active'></i>".to_string(),
            pane: format!("<p id='{}'></p>", escape_html(&options.content_element)),
            title: format!(
                "<h2 id='{}'>{}</h2>",
                escape_html(&options.title_element),
                escape_html(&options.placeholder_title)
            ),
        })?);

        Ok(Self {
            panel: SidePanel::new(options.panel_id.clone(), options.placeholder_title.clone()),
            control,
            title: require_element(&options.title_element)?,
            content: require_element(&options.content_element)?,
            labels,
            no_data_title: options.no_data_title.clone(),
        })
    }

    pub(crate) fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Marker click. Stops `click` so the map's background handler never
    /// sees it.
    pub(crate) fn marker_clicked(&mut self, props: &MarkerProperties, click: &mut MapClick) {
        let content = marker_panel_content(props, &self.labels);
        self.panel.on_marker_click(click, content);
        self.render();
        self.control.open(self.panel.id());
    }

    pub(crate) fn background_clicked(&mut self) {
        self.panel.on_background_click(&MapClick::new());
        self.control.close(self.panel.id());
    }

    pub(crate) fn close(&mut self) {
        let id = self.panel.id().to_string();
        self.panel.close(&id);
        self.control.close(&id);
    }

    /// Show that the sheet could not be loaded.
    pub(crate) fn show_no_data(&mut self, detail: &str) {
        let mut content = PanelContent::titled(self.no_data_title.clone());
        content
            .lines
            .push(PanelLine::text(&self.labels.error, detail));
        self.panel.set_content(content);
        self.render();
        let id = self.panel.id().to_string();
        self.panel.open(&id);
        self.control.open(&id);
    }

    fn render(&self) {
        let content = self.panel.content();
        self.title.set_text_content(Some(&content.title));
        self.content.set_inner_html(&content.to_html());
    }
}

/// Keep the panel's open flag in step with the widget when the user opens
/// or closes it from the tab or the close button.
///
/// The returned handlers must live as long as the sidebar.
pub(crate) fn watch_widget(
    sidebar: &Rc<RefCell<SidebarController>>,
) -> Vec<Closure<dyn FnMut(JsValue)>> {
    let control = sidebar.borrow().control.clone();
    [("opening", true), ("closing", false)]
        .into_iter()
        .map(|(event, open)| {
            let sidebar = Rc::clone(sidebar);
            let handler = Closure::wrap(Box::new(move |_event: JsValue| {
                // Already borrowed: the change came from Rust, which has
                // updated the panel itself.
                if let Ok(mut sidebar) = sidebar.try_borrow_mut() {
                    sidebar.panel.set_open(open);
                }
            }) as Box<dyn FnMut(JsValue)>);
            control.on(event, handler.as_ref().unchecked_ref());
            handler
        })
        .collect()
}
