// Selection module
// Selected value(s) for single and range picking

use super::view::SelectMode;

/// Stored selection of one picker.
///
/// `selected` is used in single mode; `selecteds` holds `[from, to]` for the
/// range family. Endpoints are kept in pick order and never swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<D> {
    selected: Option<D>,
    selecteds: Vec<Option<D>>,
}

impl<D> Default for Selection<D> {
    fn default() -> Self {
        Self {
            selected: None,
            selecteds: Vec::new(),
        }
    }
}

impl<D: Clone> Selection<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&D> {
        self.selected.as_ref()
    }

    /// Raw endpoint list, in the shape the host supplied it
    pub fn selecteds(&self) -> &[Option<D>] {
        &self.selecteds
    }

    pub fn range_from(&self) -> Option<&D> {
        self.selecteds.first().and_then(Option::as_ref)
    }

    pub fn range_to(&self) -> Option<&D> {
        self.selecteds.get(1).and_then(Option::as_ref)
    }

    pub fn set_selected(&mut self, value: Option<D>) {
        self.selected = value;
    }

    /// Replace the endpoint list. Positions are preserved, including `None`s.
    pub fn set_selecteds(&mut self, values: Vec<Option<D>>) {
        self.selecteds = values;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.selecteds.clear();
    }

    /// Apply an accepted pick according to the selection mode.
    pub fn apply_pick(&mut self, mode: SelectMode, date: D) {
        match mode {
            SelectMode::Single => self.selected = Some(date),
            SelectMode::Range => {
                self.ensure_pair();
                if self.selecteds[0].is_some() && self.selecteds[1].is_none() {
                    self.selecteds[1] = Some(date);
                } else {
                    self.selecteds[0] = Some(date);
                    self.selecteds[1] = None;
                }
            }
            SelectMode::RangeFrom => {
                self.ensure_pair();
                self.selecteds[0] = Some(date);
            }
            SelectMode::RangeTo => {
                self.ensure_pair();
                self.selecteds[1] = Some(date);
            }
        }
    }

    fn ensure_pair(&mut self) {
        if self.selecteds.len() < 2 {
            self.selecteds.resize(2, None);
        }
    }
}
