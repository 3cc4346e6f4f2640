use crate::catalog::Catalog;

/// Shown when nothing is selected
pub const FALLBACK_DESCRIPTION: &str =
	"A selection of our crafted work, built from scratch by our talented in-house team.";

/// A change of the selected slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
	pub from: Option<usize>,
	pub to: usize,
}

/// Current and previous selected slide.
///
/// `previous` always holds what `current` was right before the last
/// transition. Only the visibility resolver's output moves it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
	current: Option<usize>,
	previous: Option<usize>,
}

impl SelectionState {
	/// First project pre-selected, or nothing for an empty catalog
	pub fn initial(catalog: &Catalog) -> Self {
		Self {
			current: (!catalog.is_empty()).then_some(0),
			previous: None,
		}
	}

	pub fn current(&self) -> Option<usize> {
		self.current
	}

	pub fn previous(&self) -> Option<usize> {
		self.previous
	}

	pub fn is_selected(&self, index: usize) -> bool {
		self.current == Some(index)
	}

	/// Whether a candidate falls inside the two-generation suppression window
	pub fn is_suppressed(&self, index: usize) -> bool {
		self.current == Some(index) || self.previous == Some(index)
	}

	/// Move to `index` unless it is suppressed or outside the catalog
	pub fn transition(&mut self, index: usize, catalog: &Catalog) -> Option<Transition> {
		if index >= catalog.len() || self.is_suppressed(index) {
			return None;
		}
		let from = self.current;
		self.previous = from;
		self.current = Some(index);
		Some(Transition { from, to: index })
	}

	pub fn description<'a>(&self, catalog: &'a Catalog) -> &'a str {
		self.current
			.and_then(|index| catalog.get(index))
			.map(|project| project.description.as_str())
			.unwrap_or(FALLBACK_DESCRIPTION)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_on_first_project() {
		let catalog = Catalog::builtin();
		let selection = SelectionState::initial(&catalog);
		assert_eq!(selection.current(), Some(0));
		assert_eq!(selection.previous(), None);
		assert!(selection.is_selected(0));
		assert!(selection.description(&catalog).starts_with("Unfamiliar"));
	}

	#[test]
	fn empty_catalog_is_unselected() {
		let catalog = Catalog::default();
		let selection = SelectionState::initial(&catalog);
		assert_eq!(selection.current(), None);
		assert_eq!(selection.description(&catalog), FALLBACK_DESCRIPTION);
	}

	#[test]
	fn transition_shifts_current_into_previous() {
		let catalog = Catalog::builtin();
		let mut selection = SelectionState::initial(&catalog);
		assert_eq!(
			selection.transition(2, &catalog),
			Some(Transition { from: Some(0), to: 2 })
		);
		assert_eq!(
			selection.transition(3, &catalog),
			Some(Transition { from: Some(2), to: 3 })
		);
		assert_eq!(selection.previous(), Some(2));
		assert_eq!(selection.current(), Some(3));
	}

	#[test]
	fn rejects_suppressed_and_out_of_range() {
		let catalog = Catalog::builtin();
		let mut selection = SelectionState::initial(&catalog);
		selection.transition(1, &catalog);
		let before = selection;
		assert_eq!(selection.transition(1, &catalog), None);
		assert_eq!(selection.transition(0, &catalog), None);
		assert_eq!(selection.transition(4, &catalog), None);
		assert_eq!(selection, before);
	}

	#[test]
	fn alternating_between_two_slides_sticks() {
		// Known edge: once A and B are current/previous, reports that only
		// alternate between them can never move the selection.
		let catalog = Catalog::builtin();
		let mut selection = SelectionState::initial(&catalog);
		selection.transition(1, &catalog);
		for candidate in [0, 1, 0, 1] {
			assert_eq!(selection.transition(candidate, &catalog), None);
		}
		assert_eq!(selection.current(), Some(1));
	}
}
