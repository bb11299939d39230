//! View tree
//!
//! [`render`] maps a [`ViewState`] to a [`View`]. It is pure: no I/O, no
//! clock, no globals. Hosts turn the tree into terminal text or DOM nodes.

use serde::Serialize;

use crate::directory::{Gender, GenderTally, TeacherRecord, ViewState};
use crate::labels;

/// What a mounted directory shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Nothing has been fetched yet
    Loading { message: String },
    /// The latest cycle failed. Shown instead of any stale data.
    Error { message: String },
    /// Cards and chart
    Directory(DirectoryView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView {
    pub title: String,
    pub cards: Vec<TeacherCard>,
    pub chart: BarChart,
}

/// Detail card for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherCard {
    /// Stable key, the record id
    pub key: String,
    pub fields: Vec<CardField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub dataset_label: String,
    pub bars: Vec<Bar>,
    pub axis: ValueAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub color: String,
}

/// Vertical axis. Always starts at zero with integer steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueAxis {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl ValueAxis {
    /// Axis tall enough for `highest`, never collapsing to a single tick
    pub fn for_max(highest: u64) -> Self {
        Self {
            min: 0,
            max: highest.max(1),
            step: 1,
        }
    }

    /// Tick values from `min` to `max` inclusive
    pub fn ticks(&self) -> impl Iterator<Item = u64> {
        (self.min..=self.max).step_by(self.step.max(1) as usize)
    }
}

/// Build the view for the current state
pub fn render(state: &ViewState) -> View {
    if state.loading && !state.has_completed_once {
        return View::Loading {
            message: labels::LOADING.to_string(),
        };
    }

    if let Some(error) = &state.error {
        return View::Error {
            message: format!("{}{}", labels::ERROR_PREFIX, error),
        };
    }

    View::Directory(DirectoryView {
        title: labels::TITLE.to_string(),
        cards: state.records.iter().map(card).collect(),
        chart: chart(&state.tally),
    })
}

fn card(record: &TeacherRecord) -> TeacherCard {
    let field = |label: &str, value: &str| CardField {
        label: label.to_string(),
        value: value.to_string(),
    };

    TeacherCard {
        key: record.id.clone(),
        fields: vec![
            field(labels::FIELD_ID, &record.id),
            field(labels::FIELD_NAME, &record.name),
            field(labels::FIELD_SEX, &record.sex),
            field(labels::FIELD_PHONE, &record.phone),
        ],
    }
}

fn chart(counts: &GenderTally) -> BarChart {
    let bars = Gender::ALL
        .iter()
        .map(|gender| {
            let (label, color) = match gender {
                Gender::Male => (labels::BAR_MALE, labels::COLOR_MALE),
                Gender::Female => (labels::BAR_FEMALE, labels::COLOR_FEMALE),
            };
            Bar {
                label: label.to_string(),
                value: counts.get(*gender),
                color: color.to_string(),
            }
        })
        .collect();

    BarChart {
        dataset_label: labels::CHART_DATASET.to_string(),
        bars,
        axis: ValueAxis::for_max(counts.max()),
    }
}
