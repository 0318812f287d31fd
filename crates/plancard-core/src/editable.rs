//! Editable-identifier table
//!
//! Each rendered text node and navigable control carries its content key in a
//! data attribute, so an external editor can find it in the live tree and
//! rewrite it. The table below maps every content key to the node it is
//! bound to; it is built once and shared.

use crate::models::{CONTENT_KEYS, PLAN_SLOTS};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Attribute carrying the key of an editable text node
pub const DATA_EDITABLE: &str = "data-editable";

/// Attribute carrying the key of an editable navigation target
pub const DATA_EDITABLE_HREF: &str = "data-editable-href";

/// What kind of node a key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Text content of a node (`data-editable`)
    Text,
    /// Navigation target of a control (`data-editable-href`)
    Href,
}

impl SlotKind {
    pub fn attribute(&self) -> &'static str {
        match self {
            SlotKind::Text => DATA_EDITABLE,
            SlotKind::Href => DATA_EDITABLE_HREF,
        }
    }
}

/// One row of the identifier table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableSlot {
    pub key: &'static str,
    /// Path of the bound node in the section tree
    pub path: String,
    pub kind: SlotKind,
}

static EDITABLE_SLOTS: Lazy<Vec<EditableSlot>> = Lazy::new(|| {
    let mut slots = Vec::with_capacity(CONTENT_KEYS.len());
    let mut push = |key: &'static str, path: String, kind: SlotKind| {
        slots.push(EditableSlot { key, path, kind });
    };

    push("badge", "header.badge".into(), SlotKind::Text);
    push("mainTitle", "header.title".into(), SlotKind::Text);
    push("mainTitleHighlight", "header.title.highlight".into(), SlotKind::Text);
    push("mainDescription", "header.description".into(), SlotKind::Text);
    push("billingMonthly", "toggle.monthly".into(), SlotKind::Text);
    push("billingAnnual", "toggle.annual".into(), SlotKind::Text);
    push("billingAnnualBadge", "toggle.annual.badge".into(), SlotKind::Text);

    for (index, bindings) in PLAN_SLOTS.iter().enumerate() {
        let card = format!("plans[{}]", index);
        push(bindings.name, format!("{card}.name"), SlotKind::Text);
        push(bindings.description, format!("{card}.description"), SlotKind::Text);
        push(bindings.price, format!("{card}.price"), SlotKind::Text);
        if let Some(period) = bindings.period {
            push(period, format!("{card}.period"), SlotKind::Text);
        }
        if let Some(badge) = bindings.badge {
            push(badge, format!("{card}.badge"), SlotKind::Text);
        }
        push(bindings.cta, format!("{card}.cta.label"), SlotKind::Text);
        push(bindings.cta_href, format!("{card}.cta"), SlotKind::Href);
        if let Some(trial) = bindings.trial {
            push(trial, format!("{card}.trial"), SlotKind::Text);
        }
    }

    push("bottomTitle", "bottom.title".into(), SlotKind::Text);
    push("bottomDescription", "bottom.description".into(), SlotKind::Text);
    push("bottomCTA", "bottom.cta.label".into(), SlotKind::Text);
    push("bottomCTAHref", "bottom.cta".into(), SlotKind::Href);

    slots
});

/// The whole identifier table, in render order
pub fn editable_slots() -> &'static [EditableSlot] {
    &EDITABLE_SLOTS
}

/// Row for a content key
pub fn lookup(key: &str) -> Option<&'static EditableSlot> {
    EDITABLE_SLOTS.iter().find(|slot| slot.key == key)
}
