/// Element values.
///
/// A list element is either a decimal number or a piece of text. Numbers
/// render in their canonical minimal form, text renders verbatim.
pub mod core;
/// The `List` entity.
///
/// A named, ordered sequence of values with an optional reference to another
/// list.
pub mod list;
/// The session's list store.
///
/// Maps names to lists, replaces on redefinition and renders the whole
/// collection for `show`.
pub mod store;
