use super::Value;

/// The type of a [`Value`], from Skiff's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer. Every integer the store returns is widened to
    /// this type.
    I64,

    /// 64-bit floating point number
    F64,

    /// String type
    String,

    /// Raw bytes
    Bytes,

    /// The null type can be cast to any nullable field.
    Null,
}

impl Value {
    /// Infers the type of this value.
    pub fn infer_ty(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Bool(_) => Type::Bool,
            Value::I64(_) => Type::I64,
            Value::F64(_) => Type::F64,
            Value::String(_) => Type::String,
            Value::Bytes(_) => Type::Bytes,
        }
    }
}
