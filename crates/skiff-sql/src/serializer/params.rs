use super::{Flavor, Formatter, ToSql};

/// Collects the parameters a command refers to.
///
/// Parameters are named after the column they bind. A name referenced twice
/// maps to the same placeholder.
pub trait Params {
    fn push(&mut self, name: &str) -> Placeholder;
}

/// A parameter reference: its name and its 1-based position among the
/// distinct parameters of the command.
pub struct Placeholder {
    pub name: String,
    pub position: usize,
}

impl Params for Vec<String> {
    fn push(&mut self, name: &str) -> Placeholder {
        let position = match self.iter().position(|existing| existing == name) {
            Some(index) => index + 1,
            None => {
                Vec::push(self, name.to_string());
                self.len()
            }
        };

        Placeholder {
            name: name.to_string(),
            position,
        }
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        // Writing to a `String` cannot fail.
        let _ = match f.serializer.flavor {
            Flavor::Postgresql => write!(f.dst, "${}", self.position),
            Flavor::Sqlite => write!(f.dst, "@{}", self.name),
        };
    }
}
