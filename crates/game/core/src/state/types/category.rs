use super::{CategoryId, CategoryOption, OptionState};

/// A named question slot holding an ordered, never-empty list of options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    #[cfg_attr(feature = "serde", serde(default))]
    id: CategoryId,
    title: String,
    options: Vec<CategoryOption>,
}

impl Category {
    /// Creates a category from the given options.
    ///
    /// An empty option list is padded with one blank placeholder.
    pub fn new(
        title: impl Into<String>,
        options: impl IntoIterator<Item = CategoryOption>,
    ) -> Self {
        let mut options: Vec<_> = options.into_iter().collect();
        if options.is_empty() {
            options.push(CategoryOption::blank());
        }
        Self {
            id: CategoryId::UNASSIGNED,
            title: title.into(),
            options,
        }
    }

    /// Creates a category whose options are built from plain titles.
    pub fn from_titles<I, S>(title: impl Into<String>, option_titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(title, option_titles.into_iter().map(CategoryOption::new))
    }

    /// Creates a titled category with `count` blank options (at least one).
    pub fn with_blank_options(title: impl Into<String>, count: usize) -> Self {
        Self::new(title, (0..count).map(|_| CategoryOption::blank()))
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[CategoryOption] {
        &self.options
    }

    /// Returns true when no option is still `Waiting`.
    pub fn is_complete(&self) -> bool {
        self.options.iter().all(|option| !option.state().is_waiting())
    }

    /// Index of the winning option, if the category has been resolved.
    pub fn chosen(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.state() == OptionState::Chosen)
    }

    pub(crate) fn assign_id(&mut self, id: CategoryId) {
        self.id = id;
    }

    pub(crate) fn push_option(&mut self, option: CategoryOption) {
        self.options.push(option);
    }

    /// Removes the option at `index`, refilling with a blank option if the
    /// list would otherwise be empty. Returns false when `index` is out of range.
    pub(crate) fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        if self.options.is_empty() {
            self.options.push(CategoryOption::blank());
        }
        true
    }

    pub(crate) fn replace_options(&mut self, options: Vec<CategoryOption>) {
        debug_assert!(!options.is_empty());
        self.options = options;
    }

    /// Marks the option at `index` as discarded.
    pub(crate) fn discard(&mut self, index: usize) {
        if let Some(option) = self.options.get_mut(index) {
            option.set_state(OptionState::Discarded);
        }
    }

    /// Marks the sole non-discarded option as chosen.
    ///
    /// Returns the survivor's index, or `None` when zero or several options
    /// are still standing.
    pub(crate) fn collapse_to_survivor(&mut self) -> Option<usize> {
        let mut survivors = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| !option.state().is_discarded());
        let (index, _) = survivors.next()?;
        if survivors.next().is_some() {
            return None;
        }
        self.options[index].set_state(OptionState::Chosen);
        Some(index)
    }

    pub(crate) fn reset_options(&mut self) {
        for option in &mut self.options {
            option.set_state(OptionState::Waiting);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(category: &Category) -> Vec<OptionState> {
        category.options().iter().map(CategoryOption::state).collect()
    }

    #[test]
    fn empty_option_list_is_padded() {
        let category = Category::new("Job", Vec::new());
        assert_eq!(category.options(), &[CategoryOption::blank()]);
        assert!(!category.is_complete());
    }

    #[test]
    fn removing_last_option_leaves_blank_placeholder() {
        let mut category = Category::from_titles("Job", ["Spy"]);
        assert!(category.remove_option(0));
        assert_eq!(category.options().len(), 1);
        assert_eq!(category.options()[0].title(), "");
        assert_eq!(category.options()[0].state(), OptionState::Waiting);
    }

    #[test]
    fn out_of_range_removal_is_ignored() {
        let mut category = Category::from_titles("Job", ["Spy", "Doctor"]);
        assert!(!category.remove_option(2));
        assert_eq!(category.options().len(), 2);
    }

    #[test]
    fn collapse_marks_only_a_single_survivor() {
        let mut category = Category::from_titles("Kids", ["1", "2", "3"]);
        category.discard(0);
        assert_eq!(category.collapse_to_survivor(), None);

        category.discard(2);
        assert_eq!(category.collapse_to_survivor(), Some(1));
        assert_eq!(
            states(&category),
            vec![
                OptionState::Discarded,
                OptionState::Chosen,
                OptionState::Discarded
            ]
        );
        assert!(category.is_complete());
        assert_eq!(category.chosen(), Some(1));
    }

    #[test]
    fn collapse_with_nothing_standing_is_none() {
        let mut category = Category::from_titles("Kids", ["1"]);
        category.discard(0);
        assert_eq!(category.collapse_to_survivor(), None);
    }
}
