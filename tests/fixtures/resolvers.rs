//! Deterministic stand-ins for the OneMap resolver.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use vrp_fixtures::traits::AddressResolver;

/// Resolves every postal code to a synthetic address.
pub struct AlwaysResolves;

impl AddressResolver for AlwaysResolves {
    fn resolve(&self, postal_code: &str) -> Option<String> {
        Some(format!("1 TEST ROAD, SINGAPORE {}", postal_code))
    }
}

/// Resolves nothing.
pub struct NeverResolves;

impl AddressResolver for NeverResolves {
    fn resolve(&self, _postal_code: &str) -> Option<String> {
        None
    }
}

/// Resolves all codes except the listed ones, which come back empty.
pub struct MissingCodes {
    missing: HashSet<String>,
}

impl MissingCodes {
    pub fn new(missing: &[&str]) -> Self {
        Self {
            missing: missing.iter().map(|code| code.to_string()).collect(),
        }
    }
}

impl AddressResolver for MissingCodes {
    fn resolve(&self, postal_code: &str) -> Option<String> {
        if self.missing.contains(postal_code) {
            Some(String::new())
        } else {
            AlwaysResolves.resolve(postal_code)
        }
    }
}

/// Records every lookup, resolving all of them.
#[derive(Default)]
pub struct RecordingResolver {
    pub calls: RefCell<Vec<String>>,
}

impl AddressResolver for RecordingResolver {
    fn resolve(&self, postal_code: &str) -> Option<String> {
        self.calls.borrow_mut().push(postal_code.to_string());
        AlwaysResolves.resolve(postal_code)
    }
}

/// Misses the listed lookups, counted from 1 in call order, regardless of
/// which postal code is asked for.
pub struct MissingLookups {
    missing: HashSet<usize>,
    calls: Cell<usize>,
}

impl MissingLookups {
    pub fn new(missing: &[usize]) -> Self {
        Self {
            missing: missing.iter().copied().collect(),
            calls: Cell::new(0),
        }
    }
}

impl AddressResolver for MissingLookups {
    fn resolve(&self, postal_code: &str) -> Option<String> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        if self.missing.contains(&call) {
            None
        } else {
            AlwaysResolves.resolve(postal_code)
        }
    }
}
