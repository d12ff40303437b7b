//! IdGenerator port - instance id generation behind a trait.

use ulid::Ulid;

use crate::domain::InstanceId;
use crate::ports::Clock;

/// Generates identifiers for new orchestrator instances.
///
/// `Send + Sync` so many instances can be started concurrently.
pub trait IdGenerator: Send + Sync {
    fn generate_instance_id(&self) -> InstanceId;
}

/// ULID-based generator: timestamp bits from the Clock, entropy from `rand`.
///
/// With a `FixedClock`, the timestamp part of every generated id is pinned,
/// which keeps test output stable.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_instance_id(&self) -> InstanceId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        InstanceId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::ports::FixedClock;

    #[test]
    fn generated_ids_carry_the_clock_timestamp() {
        let instant = Utc::now();
        let generator = UlidGenerator::new(FixedClock::at(instant));

        let id = generator.generate_instance_id();
        assert_eq!(
            id.as_ulid().timestamp_ms(),
            instant.timestamp_millis() as u64
        );
    }

    #[test]
    fn generated_ids_are_distinct() {
        let generator = UlidGenerator::new(FixedClock::at(Utc::now()));

        let a = generator.generate_instance_id();
        let b = generator.generate_instance_id();
        assert_ne!(a, b);
    }
}
