use std::cell::Cell;
use uuid::Uuid;

/// Produces supplier ids.
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable ids (`prefix-1`, `prefix-2`, ...), for tests and fixtures.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("sup")
    }
}

impl IdGenerator for SequentialIds {
    fn generate_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}
