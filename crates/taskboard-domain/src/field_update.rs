/// Three-state partial update for an optional field.
///
/// - `NoChange` keeps whatever the field holds
/// - `Set(value)` replaces it
/// - `Clear` empties it
///
/// ```
/// use taskboard_domain::FieldUpdate;
///
/// let mut color = Some("red".to_string());
/// FieldUpdate::Set("teal".to_string()).apply_to(&mut color);
/// assert_eq!(color.as_deref(), Some("teal"));
///
/// FieldUpdate::<String>::Clear.apply_to(&mut color);
/// assert_eq!(color, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    NoChange,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// Apply this update to an optional field. Returns whether the field was touched.
    pub fn apply_to(self, field: &mut Option<T>) -> bool {
        match self {
            FieldUpdate::NoChange => false,
            FieldUpdate::Set(value) => {
                *field = Some(value);
                true
            }
            FieldUpdate::Clear => {
                *field = None;
                true
            }
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }

    /// Resolve the value the field would hold after applying this update.
    pub fn resolve<'a>(&'a self, current: Option<&'a T>) -> Option<&'a T> {
        match self {
            FieldUpdate::NoChange => current,
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Clear => None,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some` sets, `None` clears.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}
