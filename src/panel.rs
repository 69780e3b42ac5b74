//! Side panel state and click routing.
//!
//! A click on a marker bubbles to the map, and a map click closes the panel.
//! The marker handler therefore stops propagation when it opens the panel.
//! The browser handlers run every click through a [`MapClick`];
//! [`dispatch_click`] replays Leaflet's bubbling order over the same calls.

use crate::config::PanelLabels;
use crate::types::{MarkerProperties, PanelContent, PanelLine};

/// Body content for a clicked marker.
///
/// Title is the institution. Documentation name, website, contact person,
/// e-mail and phone follow in that order, each only when non-empty.
pub fn marker_panel_content(props: &MarkerProperties, labels: &PanelLabels) -> PanelContent {
    let mut content = PanelContent::titled(props.institution.clone());
    if !props.dokumentation.is_empty() {
        content
            .lines
            .push(PanelLine::text(&labels.dokumentation, &props.dokumentation));
    }
    if !props.url.is_empty() {
        content.lines.push(PanelLine::link(&labels.url, &props.url));
    }
    if !props.kontaktperson.is_empty() {
        content
            .lines
            .push(PanelLine::text(&labels.kontaktperson, &props.kontaktperson));
    }
    if !props.mejl.is_empty() {
        content.lines.push(PanelLine::text(&labels.mejl, &props.mejl));
    }
    if !props.telefon.is_empty() {
        content
            .lines
            .push(PanelLine::text(&labels.telefon, &props.telefon));
    }
    content
}

/// A click travelling from its target up to the map.
#[derive(Debug, Clone, Default)]
pub struct MapClick {
    propagation_stopped: bool,
}

impl MapClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// The dockable panel: which panel it is, whether it is open, what it shows.
#[derive(Debug, Clone)]
pub struct SidePanel {
    id: String,
    open: bool,
    content: PanelContent,
}

impl SidePanel {
    pub fn new(id: impl Into<String>, placeholder_title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            open: false,
            content: PanelContent::titled(placeholder_title),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    /// Open the panel if `panel_id` names it. Returns whether it did.
    pub fn open(&mut self, panel_id: &str) -> bool {
        if panel_id != self.id {
            return false;
        }
        self.open = true;
        true
    }

    /// Close the panel if `panel_id` names it. Returns whether it did.
    pub fn close(&mut self, panel_id: &str) -> bool {
        if panel_id != self.id {
            return false;
        }
        self.open = false;
        true
    }

    /// Follow an open or close made on the widget itself (tab or close button).
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn set_content(&mut self, content: PanelContent) {
        self.content = content;
    }

    /// Marker click handler: stop propagation, show the marker, open.
    pub fn on_marker_click(&mut self, event: &mut MapClick, content: PanelContent) {
        event.stop_propagation();
        self.set_content(content);
        self.open = true;
    }

    /// Map background click handler.
    pub fn on_background_click(&mut self, event: &MapClick) {
        if !event.is_propagation_stopped() {
            self.open = false;
        }
    }
}

/// What a click landed on.
#[derive(Debug, Clone)]
pub enum ClickTarget {
    /// A marker; carries the content its handler shows.
    Marker(PanelContent),
    Background,
}

/// Route a click: the target's handler runs first, then the map's handler
/// unless propagation was stopped.
pub fn dispatch_click(panel: &mut SidePanel, target: ClickTarget) -> MapClick {
    let mut event = MapClick::new();
    if let ClickTarget::Marker(content) = target {
        panel.on_marker_click(&mut event, content);
    }
    if !event.is_propagation_stopped() {
        panel.on_background_click(&event);
    }
    event
}
