// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value types.
//!
//! [`Value`] is the explicit tagged wrapper every operation in this crate
//! borrows. Reference-like variants carry an `Option` payload; `None` is the
//! nil referent of that kind.

use crate::kind::Kind;
use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::borrow::Cow;
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A dynamic value of any supported kind.
#[derive(Clone)]
pub enum Value {
    /// Absent value, carries no type.
    Nil,

    // Primitives
    Bool(bool),
    Int(isize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Uint(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),

    // Sequences and mappings
    Bytes(Option<Vec<u8>>),
    Array(Box<[Value]>),
    Slice(Option<Vec<Value>>),
    Map(Option<HashMap<String, Value>>),

    // References
    Chan(Option<Chan>),
    Func(Option<Func>),
    Ptr(Option<Ptr>),
    Interface(Option<Box<Value>>),

    // Capabilities
    Error(Arc<dyn StdError + Send + Sync>),
    Opaque(Opaque),
}

impl Value {
    /// Runtime kind of this value. Depends on the variant tag only.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Invalid,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::Uint(_) => Kind::Uint,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Str(_) => Kind::String,
            Self::Bytes(_) => Kind::Bytes,
            Self::Array(_) => Kind::Array,
            Self::Slice(_) => Kind::Slice,
            Self::Map(_) => Kind::Map,
            Self::Chan(_) => Kind::Chan,
            Self::Func(_) => Kind::Func,
            Self::Ptr(_) => Kind::Ptr,
            Self::Interface(_) => Kind::Interface,
            Self::Error(_) => Kind::Error,
            Self::Opaque(_) => Kind::Other,
        }
    }

    /// Descriptive type name, used in error messages.
    pub fn type_name(&self) -> Cow<'static, str> {
        match self {
            Self::Nil => Cow::Borrowed("<nil>"),
            Self::Bytes(_) => Cow::Borrowed("[]uint8"),
            Self::Array(items) => Cow::Owned(format!("[{}]value", items.len())),
            Self::Slice(_) => Cow::Borrowed("[]value"),
            Self::Map(_) => Cow::Borrowed("map[string]value"),
            Self::Chan(_) => Cow::Borrowed("chan value"),
            Self::Func(_) => Cow::Borrowed("func([]value) value"),
            Self::Ptr(_) => Cow::Borrowed("*value"),
            Self::Interface(_) => Cow::Borrowed("value"),
            Self::Opaque(o) => Cow::Borrowed(o.type_name()),
            other => Cow::Borrowed(other.kind().name()),
        }
    }

    /// Nil map (no storage).
    pub fn nil_map() -> Self {
        Self::Map(None)
    }

    /// Empty, allocated map.
    pub fn empty_map() -> Self {
        Self::Map(Some(HashMap::new()))
    }

    /// Nil slice.
    pub fn nil_slice() -> Self {
        Self::Slice(None)
    }

    /// Nil byte slice.
    pub fn nil_bytes() -> Self {
        Self::Bytes(None)
    }

    /// Fixed-length array.
    pub fn array(items: Vec<Value>) -> Self {
        Self::Array(items.into_boxed_slice())
    }

    /// Wrap a function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Func(Some(Func::new(f)))
    }

    /// Pointer to a fresh referent holding `value`.
    pub fn ptr(value: Value) -> Self {
        Self::Ptr(Some(Ptr::new(value)))
    }

    /// Boxed dynamic reference to `value`.
    pub fn interface(value: Value) -> Self {
        Self::Interface(Some(Box::new(value)))
    }

    /// Wrap an error.
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Arc::new(err))
    }

    /// Opaque value of type `T` without a textual rendering.
    pub fn opaque<T: ?Sized>() -> Self {
        Self::Opaque(Opaque::named(std::any::type_name::<T>()))
    }

    /// Opaque value rendered through its `Display` implementation.
    pub fn displayable<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::Opaque(Opaque::displayable(value))
    }
}

// ---------------------------------------------------------------------------
// Reference handles
// ---------------------------------------------------------------------------

/// Channel handle carrying dynamic values.
#[derive(Clone)]
pub struct Chan {
    tx: Sender<Value>,
    rx: Receiver<Value>,
}

impl Chan {
    /// Channel with a fixed buffer. `bounded(0)` is a rendezvous channel.
    pub fn bounded(cap: usize) -> Self {
        let (tx, rx) = channel::bounded(cap);
        Self { tx, rx }
    }

    /// Channel without a capacity limit.
    pub fn unbounded() -> Self {
        let (tx, rx) = channel::unbounded();
        Self { tx, rx }
    }

    /// Sending half.
    pub fn sender(&self) -> &Sender<Value> {
        &self.tx
    }

    /// Receiving half.
    pub fn receiver(&self) -> &Receiver<Value> {
        &self.rx
    }

    /// Number of queued messages.
    pub fn len(&self) -> usize {
        self.tx.len()
    }

    /// True if no messages are queued.
    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }

    /// Buffer capacity, None if unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.tx.capacity()
    }
}

/// Shared callable.
#[derive(Clone)]
pub struct Func(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Func {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

/// Pointer to a shared, lockable referent.
#[derive(Clone)]
pub struct Ptr(Arc<RwLock<Value>>);

impl Ptr {
    /// Pointer to a fresh referent.
    pub fn new(value: Value) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Shared access to the referent.
    pub fn read(&self) -> RwLockReadGuard<'_, Value> {
        self.0.read()
    }

    /// Exclusive access to the referent.
    pub fn write(&self) -> RwLockWriteGuard<'_, Value> {
        self.0.write()
    }

    /// True if both pointers share the same referent.
    pub fn ptr_eq(&self, other: &Ptr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> *const RwLock<Value> {
        Arc::as_ptr(&self.0)
    }
}

/// Value of a type outside the closed taxonomy.
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    render: Option<Arc<dyn fmt::Display + Send + Sync>>,
}

impl Opaque {
    /// Opaque value known only by its type name.
    pub fn named(type_name: &'static str) -> Self {
        Self {
            type_name,
            render: None,
        }
    }

    /// Opaque value with a textual rendering capability.
    pub fn displayable<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self {
            type_name: std::any::type_name::<T>(),
            render: Some(Arc::new(value)),
        }
    }

    /// Name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True if the value can render itself as text.
    pub fn can_render(&self) -> bool {
        self.render.is_some()
    }

    /// Textual rendering, if the value has one.
    pub fn render(&self) -> Option<String> {
        self.render.as_ref().map(|r| r.to_string())
    }
}

// ---------------------------------------------------------------------------
// Debug rendering
// ---------------------------------------------------------------------------

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("<nil>"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::Uint(v) => write!(f, "0x{:x}", v),
            Self::U8(v) => write!(f, "0x{:x}", v),
            Self::U16(v) => write!(f, "0x{:x}", v),
            Self::U32(v) => write!(f, "0x{:x}", v),
            Self::U64(v) => write!(f, "0x{:x}", v),
            Self::F32(v) => write!(f, "{:?}", v),
            Self::F64(v) => write!(f, "{:?}", v),
            Self::Str(s) => write!(f, "{:?}", s),
            Self::Bytes(None) => f.write_str("[]byte(nil)"),
            Self::Bytes(Some(bytes)) => {
                f.write_str("[]byte{")?;
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "0x{:x}", b)?;
                }
                f.write_str("}")
            }
            Self::Array(items) => {
                write!(f, "[{}]value", items.len())?;
                write_items(f, items)
            }
            Self::Slice(None) => f.write_str("[]value(nil)"),
            Self::Slice(Some(items)) => {
                f.write_str("[]value")?;
                write_items(f, items)
            }
            Self::Map(None) => f.write_str("map[string]value(nil)"),
            Self::Map(Some(map)) => {
                // Sorted so the rendering is stable across runs.
                let mut keys: Vec<_> = map.keys().collect();
                keys.sort_unstable();
                f.write_str("map[string]value{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}:{:?}", key, map[key])?;
                }
                f.write_str("}")
            }
            Self::Chan(None) => f.write_str("(chan value)(nil)"),
            Self::Chan(Some(ch)) => write!(f, "(chan value)(len={})", ch.len()),
            Self::Func(None) => f.write_str("(func([]value) value)(nil)"),
            Self::Func(Some(_)) => f.write_str("(func([]value) value)"),
            Self::Ptr(None) => f.write_str("(*value)(nil)"),
            // Address only: following the referent could cycle.
            Self::Ptr(Some(p)) => write!(f, "(*value)({:p})", p.addr()),
            Self::Interface(None) => f.write_str("value(nil)"),
            Self::Interface(Some(inner)) => write!(f, "value({:?})", inner),
            Self::Error(err) => write!(f, "error({:?})", err.to_string()),
            Self::Opaque(o) => write!(f, "{}{{..}}", o.type_name()),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    f.write_str("{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{:?}", item)?;
    }
    f.write_str("}")
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_primitive!(
    bool => Bool,
    isize => Int,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    usize => Uint,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(Some(v))
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(Some(v.to_vec()))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Slice(Some(v))
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(v: HashMap<String, Value>) -> Self {
        Self::Map(Some(v))
    }
}

impl From<Chan> for Value {
    fn from(v: Chan) -> Self {
        Self::Chan(Some(v))
    }
}

impl From<Func> for Value {
    fn from(v: Func) -> Self {
        Self::Func(Some(v))
    }
}

impl From<Ptr> for Value {
    fn from(v: Ptr) -> Self {
        Self::Ptr(Some(v))
    }
}

impl From<Opaque> for Value {
    fn from(v: Opaque) -> Self {
        Self::Opaque(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(Value::Nil.kind(), Kind::Invalid);
        assert_eq!(Value::from(42u32).kind(), Kind::U32);
        assert_eq!(Value::from(-1isize).kind(), Kind::Int);
        assert_eq!(Value::from("hello").kind(), Kind::String);
        assert_eq!(Value::from(vec![1u8, 2]).kind(), Kind::Bytes);
        assert_eq!(Value::nil_map().kind(), Kind::Map);
        assert_eq!(Value::Chan(None).kind(), Kind::Chan);
        assert_eq!(Value::opaque::<std::time::Duration>().kind(), Kind::Other);
    }

    #[test]
    fn test_option_conversion() {
        assert!(matches!(Value::from(None::<i32>), Value::Nil));
        assert!(matches!(Value::from(Some(7i32)), Value::I32(7)));
    }

    #[test]
    fn test_debug_rendering() {
        assert_eq!(format!("{:?}", Value::from("hi")), "\"hi\"");
        assert_eq!(format!("{:?}", Value::from(3.9f64)), "3.9");
        assert_eq!(format!("{:?}", Value::from(255u8)), "0xff");
        assert_eq!(format!("{:?}", Value::from(vec![104u8, 105])), "[]byte{0x68, 0x69}");
        assert_eq!(format!("{:?}", Value::nil_map()), "map[string]value(nil)");

        let mut map = HashMap::new();
        map.insert("b".to_string(), Value::from(2i64));
        map.insert("a".to_string(), Value::from(true));
        assert_eq!(
            format!("{:?}", Value::from(map)),
            "map[string]value{\"a\":true, \"b\":2}"
        );

        let slice = Value::from(vec![Value::from(1i32), Value::Nil]);
        assert_eq!(format!("{:?}", slice), "[]value{1, <nil>}");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Nil.type_name(), "<nil>");
        assert_eq!(Value::from(1i64).type_name(), "int64");
        assert_eq!(Value::array(vec![Value::Nil; 3]).type_name(), "[3]value");
        assert!(Value::opaque::<std::time::Duration>()
            .type_name()
            .ends_with("Duration"));
    }

    #[test]
    fn test_self_referencing_pointer_debug_terminates() {
        let p = Ptr::new(Value::Nil);
        *p.write() = Value::Ptr(Some(p.clone()));
        let rendered = format!("{:?}", Value::from(p));
        assert!(rendered.starts_with("(*value)(0x"));
    }

    #[test]
    fn test_func_call() {
        let double = Func::new(|args| match args.first() {
            Some(Value::I64(v)) => Value::I64(v * 2),
            _ => Value::Nil,
        });
        assert!(matches!(double.call(&[Value::I64(21)]), Value::I64(42)));
    }

    #[test]
    fn test_chan_len_and_capacity() {
        let ch = Chan::bounded(4);
        ch.sender().send(Value::from(1i32)).expect("send");
        assert_eq!(ch.len(), 1);
        assert_eq!(ch.capacity(), Some(4));
        assert_eq!(Chan::unbounded().capacity(), None);
    }

    #[test]
    fn test_value_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
    }
}
