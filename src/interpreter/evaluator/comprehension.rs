use std::collections::HashSet;

use log::{debug, trace};
use rust_decimal::Decimal;

use crate::{
    ast::ListComprehension,
    error::{LctResult, SemanticError},
    interpreter::{
        evaluator::{arithmetic, core::Bindings, logic},
        value::{core::Value, list::List, store::ListStore},
    },
};

/// Runs list comprehensions against a list store.
///
/// The engine only reads the store. Registering the produced list is left to
/// the caller so that a failing comprehension never touches the store.
pub struct ComprehensionEngine<'s> {
    store: &'s ListStore,
}

/// A source binding with its values resolved to numbers.
struct Source<'c> {
    variable: &'c str,
    values:   Vec<Decimal>,
}

impl<'s> ComprehensionEngine<'s> {
    /// Creates an engine that resolves source lists from `store`.
    #[must_use]
    pub const fn new(store: &'s ListStore) -> Self {
        Self { store }
    }

    /// Evaluates `comprehension` and returns the produced list.
    ///
    /// Every combination of source values is visited: with several bindings,
    /// the first binding varies slowest and the last fastest. For each
    /// combination the predicates are checked first and, if they all hold, the
    /// transform is evaluated and appended to the result.
    ///
    /// # Errors
    /// - `SemanticError::UndefinedComparison` if a predicate has no comparison,
    ///   even when there is nothing to iterate.
    /// - `SemanticError::UnknownList` if a binding refers to a missing list.
    /// - `SemanticError::NonNumericElement` if a source element is text.
    /// - `SemanticError::DuplicateVariable` if two bindings share a variable.
    /// - Any `EvaluationError` raised by the transform.
    ///
    /// # Example
    /// ```
    /// use lct::{
    ///     ast::Statement,
    ///     interpreter::{
    ///         builder::StatementBuilder,
    ///         evaluator::comprehension::ComprehensionEngine,
    ///         parser::core::parse,
    ///         value::{list::List, store::ListStore},
    ///     },
    /// };
    ///
    /// let mut store = ListStore::new();
    /// store.add_or_replace(List::new("N", vec![1.into(), 2.into(), 3.into(), 4.into(), 5.into()]));
    ///
    /// let node = parse("R = [n * 10 | n in N | n > 2]", 1).unwrap().unwrap();
    /// let Statement::Comprehension(comprehension) = StatementBuilder::default().build(&node).unwrap()
    /// else {
    ///     panic!("expected a comprehension");
    /// };
    ///
    /// let result = ComprehensionEngine::new(&store).run(&comprehension).unwrap();
    /// assert_eq!(result.to_string(), "R = [30,40,50]");
    /// ```
    pub fn run(&self, comprehension: &ListComprehension) -> LctResult<List> {
        logic::ensure_defined(&comprehension.predicates)?;

        let mut result = List::new(comprehension.result_name.clone(), Vec::new());
        if comprehension.source_bindings.is_empty() {
            return Ok(result);
        }

        let sources = self.resolve_sources(comprehension)?;
        if sources.iter().any(|source| source.values.is_empty()) {
            debug!("comprehension '{}' has an empty source", comprehension.result_name);
            return Ok(result);
        }

        let mut indices = vec![0usize; sources.len()];
        loop {
            let bindings: Bindings =
                sources.iter()
                       .zip(&indices)
                       .map(|(source, &i)| (source.variable.to_string(), source.values[i]))
                       .collect();

            if logic::evaluate(&comprehension.predicates, &bindings)? {
                let value = arithmetic::evaluate(&comprehension.transform, &bindings)?;
                trace!("{} <- {value} with {bindings:?}", comprehension.result_name);
                result.elements.push(Value::Number(value));
            }

            if !advance(&mut indices, &sources) {
                break;
            }
        }

        debug!("comprehension '{}' produced {} elements",
               comprehension.result_name,
               result.elements.len());
        Ok(result)
    }

    /// Resolves every source binding to its numeric values.
    ///
    /// A binding with its own elements uses them; otherwise the stored list
    /// named by its reference is used.
    fn resolve_sources<'c>(&self,
                           comprehension: &'c ListComprehension)
                           -> LctResult<Vec<Source<'c>>> {
        let line = comprehension.line;
        let mut seen = HashSet::new();
        let mut sources = Vec::with_capacity(comprehension.source_bindings.len());

        for binding in &comprehension.source_bindings {
            if !seen.insert(binding.name.as_str()) {
                return Err(SemanticError::DuplicateVariable { name: binding.name.clone(),
                                                              line }.into());
            }

            let source = match &binding.reference {
                Some(reference) if binding.elements.is_empty() => {
                    self.store
                        .get(reference)
                        .ok_or_else(|| SemanticError::UnknownList { name: reference.clone(),
                                                                    line })?
                },
                _ => binding,
            };

            let values = source.elements
                               .iter()
                               .map(|element| {
                                   element.as_number()
                                          .ok_or_else(|| SemanticError::NonNumericElement {
                                              list: source.name.clone(),
                                              element: element.to_string(),
                                              line,
                                          })
                               })
                               .collect::<Result<Vec<_>, _>>()?;

            sources.push(Source { variable: binding.name.as_str(),
                                  values });
        }

        Ok(sources)
    }
}

/// Steps `indices` to the next combination, last position fastest.
///
/// Returns `false` once every combination has been visited.
fn advance(indices: &mut [usize], sources: &[Source<'_>]) -> bool {
    for position in (0..indices.len()).rev() {
        indices[position] += 1;
        if indices[position] < sources[position].values.len() {
            return true;
        }
        indices[position] = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(variable: &str, len: i64) -> Source<'_> {
        Source { variable,
                 values: (0..len).map(Decimal::from).collect() }
    }

    #[test]
    fn advance_walks_last_position_fastest() {
        let sources = [source("a", 2), source("b", 3)];
        let mut indices = vec![0, 0];
        let mut visited = vec![indices.clone()];
        while advance(&mut indices, &sources) {
            visited.push(indices.clone());
        }

        assert_eq!(visited,
                   [[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]);
    }

    #[test]
    fn advance_stops_after_single_source() {
        let sources = [source("a", 1)];
        let mut indices = vec![0];

        assert!(!advance(&mut indices, &sources));
        assert_eq!(indices, [0]);
    }
}
