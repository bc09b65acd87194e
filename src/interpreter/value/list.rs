use std::fmt;

use crate::interpreter::value::core::Value;

/// A named, ordered list of values.
///
/// Duplicates are allowed and element order is definition order. `reference`
/// names another list this one is tied to: a comprehension source binding uses
/// it to name the list its variable iterates over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    /// Unique key within a store.
    pub name:      String,
    /// The elements, in definition order.
    pub elements:  Vec<Value>,
    /// Name of the list this one refers to, if any.
    pub reference: Option<String>,
}

impl List {
    /// Creates a list without a reference.
    ///
    /// # Example
    /// ```
    /// use lct::interpreter::value::list::List;
    ///
    /// let list = List::new("A", vec![1.into(), "apple".into()]);
    /// assert_eq!(list.to_string(), "A = [1,apple]");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, elements: Vec<Value>) -> Self {
        Self { name: name.into(),
               elements,
               reference: None }
    }

    /// Creates an element-less list that refers to the list named `reference`.
    #[must_use]
    pub fn referring_to(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self { name:      name.into(),
               elements:  Vec::new(),
               reference: Some(reference.into()), }
    }
}

impl fmt::Display for List {
    /// Formats the list as `name = [e1,e2,...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = [", self.name)?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}
