use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use thiserror::Error;

/// A conversion rule has no registered entry for the requested pair.
///
/// This is a configuration mistake, not a user error: every feature exposes a
/// `verify_mappings` function and the composition root refuses to start when a
/// required pair is missing, so requests should never observe this.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("no mapping registered from {source_type} to {target}")]
    Unregistered {
        // Named `source_type` because thiserror reserves `source` for an
        // underlying `std::error::Error` value.
        source_type: &'static str,
        target: &'static str,
    },
}

type Rule = Box<dyn Fn(&dyn Any) -> Box<dyn Any> + Send + Sync>;

/// Registry of typed conversion rules between view-model and entity shapes.
///
/// Each rule is an ordinary function from a source shape to a target shape.
/// Renames, computed defaults (fresh identifiers, forced status values,
/// timestamps) and type conversions live inside the rule body, where the
/// compiler checks that every target field is produced. Built once at startup
/// and immutable afterwards; shared across services via `Arc`.
#[derive(Default)]
pub struct Mapper {
    rules: HashMap<(TypeId, TypeId), Rule>,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the conversion rule for the `S -> T` pair.
    ///
    /// Re-registering a pair replaces the previous rule; the last
    /// registration wins, mirroring plain map insertion.
    pub fn register<S, T>(&mut self, rule: fn(&S) -> T)
    where
        S: Any,
        T: Any,
    {
        self.rules.insert(
            (TypeId::of::<S>(), TypeId::of::<T>()),
            Box::new(move |source: &dyn Any| {
                // The key guarantees the downcast succeeds.
                let source = source
                    .downcast_ref::<S>()
                    .unwrap_or_else(|| unreachable!("rule keyed by TypeId of source"));
                Box::new(rule(source))
            }),
        );
    }

    /// Apply the registered rule for `S -> T` to `source`.
    pub fn transform<S, T>(&self, source: &S) -> Result<T, MappingError>
    where
        S: Any,
        T: Any,
    {
        let rule = self
            .rules
            .get(&(TypeId::of::<S>(), TypeId::of::<T>()))
            .ok_or_else(|| MappingError::Unregistered {
                source_type: type_name::<S>(),
                target: type_name::<T>(),
            })?;

        let target = rule(source);
        Ok(*target
            .downcast::<T>()
            .unwrap_or_else(|_| unreachable!("rule keyed by TypeId of target")))
    }

    /// Assert at startup that the `S -> T` pair is registered.
    pub fn require<S, T>(&self) -> Result<(), MappingError>
    where
        S: Any,
        T: Any,
    {
        if self.rules.contains_key(&(TypeId::of::<S>(), TypeId::of::<T>())) {
            Ok(())
        } else {
            Err(MappingError::Unregistered {
                source_type: type_name::<S>(),
                target: type_name::<T>(),
            })
        }
    }

    /// Number of registered pairs, logged at startup.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Source {
        value: i32,
    }

    struct Target {
        doubled: i32,
    }

    #[test]
    fn transform_applies_registered_rule() {
        let mut mapper = Mapper::new();
        mapper.register(|s: &Source| Target { doubled: s.value * 2 });

        let target: Target = mapper.transform(&Source { value: 21 }).unwrap();
        assert_eq!(target.doubled, 42);
    }

    #[test]
    fn transform_fails_for_unregistered_pair() {
        let mapper = Mapper::new();
        let result: Result<Target, _> = mapper.transform(&Source { value: 1 });
        assert!(matches!(result, Err(MappingError::Unregistered { .. })));
    }

    #[test]
    fn require_distinguishes_registered_from_missing() {
        let mut mapper = Mapper::new();
        mapper.register(|s: &Source| Target { doubled: s.value });

        assert!(mapper.require::<Source, Target>().is_ok());
        assert!(mapper.require::<Target, Source>().is_err());
    }

    #[test]
    fn last_registration_wins() {
        let mut mapper = Mapper::new();
        mapper.register(|s: &Source| Target { doubled: s.value });
        mapper.register(|s: &Source| Target { doubled: s.value * 2 });
        assert_eq!(mapper.len(), 1);

        let target: Target = mapper.transform(&Source { value: 10 }).unwrap();
        assert_eq!(target.doubled, 20);
    }
}
