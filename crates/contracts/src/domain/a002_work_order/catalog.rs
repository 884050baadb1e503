//! Cascading work-order selection.
//!
//! The form offers WO → style → buyer → item → color → size. Each dropdown only
//! lists values that exist in the catalog together with everything chosen above
//! it; picking a new value clears every field below.

use super::dto::{WorkOrder, WorkOrderField};
use crate::domain::common::ValidationError;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderSelection {
    values: [Option<String>; 6],
}

impl WorkOrderSelection {
    pub fn get(&self, field: WorkOrderField) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Set a field and reset everything below it. Empty values clear the field.
    pub fn set(&mut self, field: WorkOrderField, value: &str) {
        let value = value.trim();
        self.values[field.index()] = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        for child in field.children() {
            self.values[child.index()] = None;
        }
    }

    pub fn clear(&mut self) {
        self.values = Default::default();
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// First dropdown still waiting for a value
    pub fn first_missing(&self) -> Option<WorkOrderField> {
        WorkOrderField::ALL
            .into_iter()
            .find(|f| self.values[f.index()].is_none())
    }

    pub fn to_work_order(&self) -> Result<WorkOrder, ValidationError> {
        if let Some(missing) = self.first_missing() {
            return Err(ValidationError::Required(missing.label()));
        }
        let v = |f: WorkOrderField| self.get(f).unwrap_or_default().to_string();
        Ok(WorkOrder {
            wo: v(WorkOrderField::Wo),
            style: v(WorkOrderField::Style),
            buyer: v(WorkOrderField::Buyer),
            item: v(WorkOrderField::Item),
            color: v(WorkOrderField::Color),
            size: v(WorkOrderField::Size),
        })
    }

    fn accepts(&self, order: &WorkOrder, fields: &[WorkOrderField]) -> bool {
        fields.iter().all(|f| match self.get(*f) {
            Some(selected) => order.get(*f) == selected,
            None => true,
        })
    }
}

impl From<&WorkOrder> for WorkOrderSelection {
    fn from(order: &WorkOrder) -> Self {
        let mut selection = Self::default();
        for field in WorkOrderField::ALL {
            let value = order.get(field).trim();
            if !value.is_empty() {
                selection.values[field.index()] = Some(value.to_string());
            }
        }
        selection
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkOrderCatalog {
    orders: Vec<WorkOrder>,
}

impl WorkOrderCatalog {
    pub fn new(orders: Vec<WorkOrder>) -> Self {
        Self { orders }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Sorted, de-duplicated values for `field` consistent with the parents
    /// already chosen in `selection`.
    pub fn options(&self, field: WorkOrderField, selection: &WorkOrderSelection) -> Vec<String> {
        let parents = field.parents();
        if parents.iter().any(|p| selection.get(*p).is_none()) {
            return Vec::new();
        }
        self.orders
            .iter()
            .filter(|o| selection.accepts(o, parents))
            .map(|o| o.get(field).trim())
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Fill every next field that has exactly one possible value.
    /// Returns the number of fields filled.
    pub fn autofill(&self, selection: &mut WorkOrderSelection) -> usize {
        let mut filled = 0;
        while let Some(field) = selection.first_missing() {
            let options = self.options(field, selection);
            if options.len() != 1 {
                break;
            }
            selection.values[field.index()] = Some(options[0].clone());
            filled += 1;
        }
        filled
    }

    /// A complete selection that matches an actual catalog row
    pub fn contains(&self, selection: &WorkOrderSelection) -> bool {
        selection.is_complete()
            && self
                .orders
                .iter()
                .any(|o| selection.accepts(o, &WorkOrderField::ALL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wo(wo: &str, style: &str, buyer: &str, item: &str, color: &str, size: &str) -> WorkOrder {
        WorkOrder {
            wo: wo.into(),
            style: style.into(),
            buyer: buyer.into(),
            item: item.into(),
            color: color.into(),
            size: size.into(),
        }
    }

    fn catalog() -> WorkOrderCatalog {
        WorkOrderCatalog::new(vec![
            wo("WO-100", "ST-1", "ACME", "Shirt", "Blue", "M"),
            wo("WO-100", "ST-1", "ACME", "Shirt", "Blue", "L"),
            wo("WO-100", "ST-1", "ACME", "Shirt", "Red", "M"),
            wo("WO-100", "ST-2", "ACME", "Pants", "Black", "32"),
            wo("WO-200", "ST-9", "Globex", "Jacket", "Green", "XL"),
        ])
    }

    #[test]
    fn test_first_level_options() {
        let c = catalog();
        let s = WorkOrderSelection::default();
        assert_eq!(c.options(WorkOrderField::Wo, &s), vec!["WO-100", "WO-200"]);
        assert!(c.options(WorkOrderField::Style, &s).is_empty());
    }

    #[test]
    fn test_options_follow_parents() {
        let c = catalog();
        let mut s = WorkOrderSelection::default();
        s.set(WorkOrderField::Wo, "WO-100");
        assert_eq!(c.options(WorkOrderField::Style, &s), vec!["ST-1", "ST-2"]);
        s.set(WorkOrderField::Style, "ST-1");
        s.set(WorkOrderField::Buyer, "ACME");
        s.set(WorkOrderField::Item, "Shirt");
        assert_eq!(c.options(WorkOrderField::Color, &s), vec!["Blue", "Red"]);
        s.set(WorkOrderField::Color, "Blue");
        assert_eq!(c.options(WorkOrderField::Size, &s), vec!["L", "M"]);
    }

    #[test]
    fn test_changing_parent_clears_children() {
        let mut s = WorkOrderSelection::default();
        s.set(WorkOrderField::Wo, "WO-100");
        s.set(WorkOrderField::Style, "ST-1");
        s.set(WorkOrderField::Buyer, "ACME");
        s.set(WorkOrderField::Style, "ST-2");
        assert_eq!(s.get(WorkOrderField::Wo), Some("WO-100"));
        assert_eq!(s.get(WorkOrderField::Style), Some("ST-2"));
        assert_eq!(s.get(WorkOrderField::Buyer), None);
    }

    #[test]
    fn test_submit_blocked_until_complete() {
        let mut s = WorkOrderSelection::default();
        assert_eq!(
            s.to_work_order(),
            Err(ValidationError::Required("Work order"))
        );
        s.set(WorkOrderField::Wo, "WO-200");
        s.set(WorkOrderField::Style, "ST-9");
        s.set(WorkOrderField::Buyer, "Globex");
        s.set(WorkOrderField::Item, "Jacket");
        s.set(WorkOrderField::Color, "Green");
        assert!(!s.is_complete());
        assert_eq!(s.to_work_order(), Err(ValidationError::Required("Size")));
        s.set(WorkOrderField::Size, "XL");
        assert!(s.is_complete());
        let order = s.to_work_order().unwrap();
        assert_eq!(order.summary(), "WO-200 / ST-9 / Globex / Jacket / Green / XL");
    }

    #[test]
    fn test_blank_value_clears_field() {
        let mut s = WorkOrderSelection::default();
        s.set(WorkOrderField::Wo, "WO-100");
        s.set(WorkOrderField::Wo, "  ");
        assert_eq!(s.get(WorkOrderField::Wo), None);
    }

    #[test]
    fn test_autofill_single_options() {
        let c = catalog();
        let mut s = WorkOrderSelection::default();
        s.set(WorkOrderField::Wo, "WO-200");
        assert_eq!(c.autofill(&mut s), 5);
        assert!(s.is_complete());
        assert!(c.contains(&s));

        let mut s = WorkOrderSelection::default();
        s.set(WorkOrderField::Wo, "WO-100");
        assert_eq!(c.autofill(&mut s), 0);
        assert_eq!(s.get(WorkOrderField::Style), None);
    }

    #[test]
    fn test_selection_from_work_order() {
        let order = wo("WO-100", "ST-2", "ACME", "Pants", "Black", "32");
        let s = WorkOrderSelection::from(&order);
        assert!(s.is_complete());
        assert!(catalog().contains(&s));
        assert_eq!(s.to_work_order().unwrap(), order);
    }
}
