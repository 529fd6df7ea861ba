use super::Serializer;

use skiff_core::driver::{Capability, Dialect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    /// `$n` placeholders. Only reached through drivers reporting
    /// [`Dialect::Postgresql`]; none ships in this workspace yet.
    Postgresql,

    /// `@name` placeholders.
    Sqlite,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    /// Serializer for the dialect a driver reports.
    pub fn for_capability(capability: &Capability) -> Serializer {
        match capability.dialect {
            Dialect::Sqlite => Serializer::sqlite(),
            Dialect::Postgresql => Serializer::postgresql(),
        }
    }
}
