//! Wire-shape types.
//!
//! A [`Type`] describes the shape of a group of wires: a single bit, an
//! ordered product, or a named product. Types are plain values compared
//! structurally; [`Type::make_bundle`] turns one into a [`Bundle`] of fresh
//! wires.

use crate::bundle::{BitAllocator, Bundle};
use crate::fields::Fields;
use std::fmt;

/// The shape of a wire group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// One elementary wire.
    Bit,
    /// An ordered product; field order is significant.
    List(Vec<Type>),
    /// A named product; field names are unique and their order is not significant.
    Dict(Fields<Type>),
}

impl Type {
    /// The empty ordered product, used for gates with no inputs or outputs.
    pub fn unit() -> Self {
        Type::List(Vec::new())
    }

    /// An ordered product of `width` bits.
    pub fn bits(width: usize) -> Self {
        Type::List(vec![Type::Bit; width])
    }

    /// An ordered product of the given types.
    pub fn list(fields: impl IntoIterator<Item = Type>) -> Self {
        Type::List(fields.into_iter().collect())
    }

    /// A named product of the given `(name, type)` pairs.
    pub fn dict<K: Into<String>>(fields: impl IntoIterator<Item = (K, Type)>) -> Self {
        Type::Dict(fields.into_iter().collect())
    }

    /// Returns `true` for the empty ordered product.
    pub fn is_unit(&self) -> bool {
        matches!(self, Type::List(fields) if fields.is_empty())
    }

    /// The number of elementary bits in this type.
    pub fn size(&self) -> usize {
        match self {
            Type::Bit => 1,
            Type::List(fields) => fields.iter().map(Type::size).sum(),
            Type::Dict(fields) => fields.iter().map(|(_, ty)| ty.size()).sum(),
        }
    }

    /// Creates a bundle of this shape whose every bit is a fresh wire.
    ///
    /// Outside this crate bundles come from [`Context::make_bundle`](crate::Context::make_bundle).
    pub(crate) fn make_bundle(&self, bits: &mut BitAllocator) -> Bundle {
        match self {
            Type::Bit => Bundle::Bit(bits.fresh()),
            Type::List(fields) => {
                Bundle::List(fields.iter().map(|ty| ty.make_bundle(bits)).collect())
            }
            Type::Dict(fields) => Bundle::Dict(fields.map(|ty| ty.make_bundle(bits))),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bit => write!(f, "Bit"),
            Type::List(fields) => {
                write!(f, "[")?;
                for (i, ty) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                write!(f, "]")
            }
            Type::Dict(fields) => {
                write!(f, "{{")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {ty}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
