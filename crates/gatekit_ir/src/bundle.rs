//! Runtime wire groups.
//!
//! A [`Bundle`] mirrors a [`Type`] but its leaves are concrete wires, each
//! carrying a [`BitId`] identity. Identity is what ties connections together:
//! two leaves are the same wire exactly when their ids match, no matter which
//! gate or composite bundle they were reached through.

use crate::fields::Fields;
use crate::ids::BitId;
use crate::types::Type;
use gatekit_common::{GateError, GateResult};

/// Hands out fresh wire identities for one build session.
///
/// Only a [`Context`](crate::Context) owns one, so every wire reachable
/// from a context was issued by that context.
#[derive(Debug, Default)]
pub(crate) struct BitAllocator {
    next: u32,
}

impl BitAllocator {
    /// Returns a wire identity that has never been issued before.
    pub(crate) fn fresh(&mut self) -> BitId {
        let id = BitId::from_raw(self.next);
        self.next += 1;
        id
    }

    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.next as usize
    }
}

/// A tree of wires shaped like a [`Type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bundle {
    /// One wire.
    Bit(BitId),
    /// An ordered group of bundles.
    List(Vec<Bundle>),
    /// A named group of bundles.
    Dict(Fields<Bundle>),
}

impl Bundle {
    /// Groups existing bundles into an ordered product without creating wires.
    pub fn list(items: impl IntoIterator<Item = Bundle>) -> Self {
        Bundle::List(items.into_iter().collect())
    }

    /// Groups existing bundles into a named product without creating wires.
    pub fn dict<K: Into<String>>(fields: impl IntoIterator<Item = (K, Bundle)>) -> Self {
        Bundle::Dict(fields.into_iter().collect())
    }

    /// The type this bundle was shaped from.
    pub fn ty(&self) -> Type {
        match self {
            Bundle::Bit(_) => Type::Bit,
            Bundle::List(items) => Type::List(items.iter().map(Bundle::ty).collect()),
            Bundle::Dict(fields) => Type::Dict(fields.map(Bundle::ty)),
        }
    }

    /// The number of wires in this bundle.
    pub fn size(&self) -> usize {
        match self {
            Bundle::Bit(_) => 1,
            Bundle::List(items) => items.iter().map(Bundle::size).sum(),
            Bundle::Dict(fields) => fields.iter().map(|(_, b)| b.size()).sum(),
        }
    }

    /// Returns element `index` of an ordered product.
    pub fn item(&self, index: usize) -> GateResult<&Bundle> {
        match self {
            Bundle::List(items) => items.get(index).ok_or_else(|| self.no_such_field(index)),
            _ => Err(self.no_such_field(index)),
        }
    }

    /// Returns the field `name` of a named product.
    pub fn field(&self, name: &str) -> GateResult<&Bundle> {
        match self {
            Bundle::Dict(fields) => fields.get(name).ok_or_else(|| self.no_such_field(name)),
            _ => Err(self.no_such_field(name)),
        }
    }

    /// Returns all elements of an ordered product.
    pub fn items(&self) -> GateResult<&[Bundle]> {
        match self {
            Bundle::List(items) => Ok(items),
            _ => Err(GateError::NoSuchField {
                ty: self.ty().to_string(),
                field: "[..]".to_string(),
            }),
        }
    }

    /// Returns the wire of a single-bit bundle.
    pub fn bit(&self) -> Option<BitId> {
        match self {
            Bundle::Bit(id) => Some(*id),
            _ => None,
        }
    }

    fn no_such_field(&self, field: impl ToString) -> GateError {
        GateError::NoSuchField {
            ty: self.ty().to_string(),
            field: field.to_string(),
        }
    }
}
