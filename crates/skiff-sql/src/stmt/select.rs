use super::{Filter, Statement};

use skiff_core::schema::{TableMapping, DISCRIMINATOR};

/// `SELECT * FROM <table> [WHERE ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub table: String,
    pub filters: Vec<Filter>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Select {
        Select {
            table: table.into(),
            filters: vec![],
        }
    }

    pub fn filter(mut self, filter: Filter) -> Select {
        self.filters.push(filter);
        self
    }

    pub(super) fn filter_discriminator(self, mapping: &TableMapping) -> Select {
        match &mapping.discriminator {
            Some(value) => self.filter(Filter::EqLiteral {
                column: DISCRIMINATOR.to_string(),
                value: value.clone(),
            }),
            None => self,
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
