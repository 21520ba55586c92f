/// Three-state update for an optional field.
///
/// `Clear` is a distinct request from `NoChange`: clearing a card's assignee
/// is a real mutation, leaving it alone is not.
///
/// # Example
///
/// ```
/// use taskboard_domain::FieldUpdate;
///
/// let assign = FieldUpdate::Set("user-1".to_string());
/// let unassign: FieldUpdate<String> = FieldUpdate::Clear;
/// let untouched: FieldUpdate<String> = FieldUpdate::NoChange;
///
/// assert!(assign.is_change());
/// assert!(unassign.is_change());
/// assert!(!untouched.is_change());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Keep the existing value
    NoChange,
    /// Set the field to the provided value
    Set(T),
    /// Clear the field (set to None)
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// Whether this asks for a dispatch at all.
    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some(value)` becomes `Set(value)`, `None` becomes `Clear`.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option_maps_none_to_clear() {
        assert_eq!(FieldUpdate::from(None::<String>), FieldUpdate::Clear);
        assert_eq!(
            FieldUpdate::from(Some("u1".to_string())),
            FieldUpdate::Set("u1".to_string())
        );
    }

    #[test]
    fn test_only_no_change_is_not_a_change() {
        assert!(FieldUpdate::Set(1).is_change());
        assert!(FieldUpdate::<i32>::Clear.is_change());
        assert!(!FieldUpdate::<i32>::default().is_change());
    }
}
