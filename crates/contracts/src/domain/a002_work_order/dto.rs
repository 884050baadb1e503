use serde::{Deserialize, Serialize};

/// Work order row (`GET /api/work-orders`, `GET /api/lines/{id}/work-order`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkOrder {
    pub wo: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub buyer: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
}

/// Dropdowns of the work-order form, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkOrderField {
    Wo,
    Style,
    Buyer,
    Item,
    Color,
    Size,
}

static CASCADE: [WorkOrderField; 6] = WorkOrderField::ALL;

impl WorkOrderField {
    pub const ALL: [WorkOrderField; 6] = [
        WorkOrderField::Wo,
        WorkOrderField::Style,
        WorkOrderField::Buyer,
        WorkOrderField::Item,
        WorkOrderField::Color,
        WorkOrderField::Size,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkOrderField::Wo => "Work order",
            WorkOrderField::Style => "Style",
            WorkOrderField::Buyer => "Buyer",
            WorkOrderField::Item => "Item",
            WorkOrderField::Color => "Color",
            WorkOrderField::Size => "Size",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Fields that sit above this one in the cascade
    pub fn parents(self) -> &'static [WorkOrderField] {
        &CASCADE[..self.index()]
    }

    /// Fields that must be cleared when this one changes
    pub fn children(self) -> &'static [WorkOrderField] {
        &CASCADE[self.index() + 1..]
    }
}

impl WorkOrder {
    pub fn get(&self, field: WorkOrderField) -> &str {
        match field {
            WorkOrderField::Wo => &self.wo,
            WorkOrderField::Style => &self.style,
            WorkOrderField::Buyer => &self.buyer,
            WorkOrderField::Item => &self.item,
            WorkOrderField::Color => &self.color,
            WorkOrderField::Size => &self.size,
        }
    }

    /// One-line summary for headers and CSV
    pub fn summary(&self) -> String {
        WorkOrderField::ALL
            .iter()
            .map(|f| self.get(*f))
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
