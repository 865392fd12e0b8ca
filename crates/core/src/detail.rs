use serde::Serialize;

use crate::domain::event::{CalendarEvent, EconEventChip};

/// True when the drill-down panel has anything to show beyond the cell
/// label. The high-impact counter alone does not qualify.
pub fn has_detail(event: &CalendarEvent) -> bool {
    event.summary.is_some()
        || event.regime.is_some()
        || !event.supporting_factors.is_empty()
        || !event.contradictory_factors.is_empty()
        || event.signal_accuracy_recent.is_some()
        || !event.econ_events.is_empty()
}

/// One rendered block of the drill-down panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailSection {
    Summary { text: String },
    Regime { text: String },
    SupportingFactors { items: Vec<String> },
    ContradictoryFactors { items: Vec<String> },
    SignalAccuracy { percent: i32 },
    HighImpactEvents { count: u32 },
    EconEvents { chips: Vec<EconEventChip> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub sections: Vec<DetailSection>,
}

/// Assemble the ordered section list for one event. Sections whose
/// underlying data is absent or empty are omitted entirely, never rendered
/// as placeholders.
pub fn build_detail_view(event: &CalendarEvent) -> DetailView {
    let mut sections = Vec::new();

    if let Some(text) = &event.summary {
        sections.push(DetailSection::Summary { text: text.clone() });
    }
    if let Some(text) = &event.regime {
        sections.push(DetailSection::Regime { text: text.clone() });
    }
    if !event.supporting_factors.is_empty() {
        sections.push(DetailSection::SupportingFactors {
            items: event.supporting_factors.clone(),
        });
    }
    if !event.contradictory_factors.is_empty() {
        sections.push(DetailSection::ContradictoryFactors {
            items: event.contradictory_factors.clone(),
        });
    }
    if let Some(accuracy) = event.signal_accuracy_recent {
        sections.push(DetailSection::SignalAccuracy {
            percent: (accuracy * 100.0).round() as i32,
        });
    }
    if let Some(count) = event.num_high_impact_events.filter(|n| *n > 0) {
        sections.push(DetailSection::HighImpactEvents { count });
    }
    if !event.econ_events.is_empty() {
        sections.push(DetailSection::EconEvents {
            chips: event.econ_events.clone(),
        });
    }

    DetailView { sections }
}

/// Which dismissal reached the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseSignal {
    CloseButton,
    BackdropClick,
    CancelKey,
}

/// Detail overlay lifecycle: Closed -> Open -> Closed. The today banner and
/// a selected day each own an independent instance of this machine; state
/// never outlives the current event collection.
#[derive(Debug, Default)]
pub struct DetailOverlay {
    view: Option<DetailView>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens only when the event actually has detail; otherwise the overlay
    /// stays closed and `false` is returned.
    pub fn open_for(&mut self, event: &CalendarEvent) -> bool {
        if !has_detail(event) {
            return false;
        }
        self.view = Some(build_detail_view(event));
        true
    }

    pub fn close(&mut self, _signal: CloseSignal) {
        self.view = None;
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }
}
