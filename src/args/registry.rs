//! Argument registry — single source of truth for declared specifications.

use crate::args::kind::ArgumentKind;
use crate::args::spec::ArgumentSpec;

/// Ordered collection of every declared specification.
///
/// Insertion order is declaration order; positional tokens are assigned
/// in this order.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    specs: Vec<ArgumentSpec>,
}

impl Registry {
    /// Append a new specification of `kind` and return its index.
    pub(crate) fn register(&mut self, kind: ArgumentKind) -> usize {
        self.specs.push(ArgumentSpec::new(kind));
        let id = self.specs.len() - 1;
        tracing::trace!(id, ?kind, "registered argument");
        id
    }

    /// Whether no specification, finished or still being built, claims `name`.
    pub(crate) fn is_name_unique(&self, name: &str) -> bool {
        !self.specs.iter().any(|spec| spec.answers_to(name))
    }

    pub(crate) fn get(&self, id: usize) -> &ArgumentSpec {
        &self.specs[id]
    }

    pub(crate) fn get_mut(&mut self, id: usize) -> &mut ArgumentSpec {
        &mut self.specs[id]
    }

    pub(crate) fn specs(&self) -> &[ArgumentSpec] {
        &self.specs
    }

    /// Copy the results of a finished pass back, matching by position.
    ///
    /// Specifications declared while the pass ran keep their empty result.
    pub(crate) fn store_results(&mut self, parsed: Vec<ArgumentSpec>) {
        for (spec, parsed) in self.specs.iter_mut().zip(parsed) {
            spec.result = parsed.result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_preserves_order() {
        let mut registry = Registry::default();
        let a = registry.register(ArgumentKind::Flag);
        let b = registry.register(ArgumentKind::Integer);
        assert_eq!((a, b), (0, 1));
        assert_eq!(registry.get(1).kind, ArgumentKind::Integer);
        assert_eq!(registry.specs().len(), 2);
    }

    #[test]
    fn uniqueness_sees_partially_built_specs() {
        let mut registry = Registry::default();
        let id = registry.register(ArgumentKind::Text);
        assert!(registry.is_name_unique("f"));
        registry.get_mut(id).names.push("f".into());
        assert!(!registry.is_name_unique("f"));
        assert!(registry.is_name_unique("format"));
    }

    #[test]
    fn store_results_skips_late_declarations() {
        let mut registry = Registry::default();
        registry.register(ArgumentKind::Flag);
        let mut snapshot = registry.specs().to_vec();
        snapshot[0].mark_present();

        let late = registry.register(ArgumentKind::Text);
        registry.store_results(snapshot);

        assert!(registry.get(0).is_set());
        assert!(!registry.get(late).is_set());
    }
}
