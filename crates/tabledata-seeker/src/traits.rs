//! Traits for derive macro support.
//!
//! [`Seekable`] is what `#[derive(Seekable)]` implements: it resolves field
//! names to [`Value`]s so rows can be filtered, sorted and rendered.

use crate::value::{Timestamp, Value};

/// Trait for row types whose fields can be read by name.
///
/// Usually derived with `#[derive(Seekable)]` from `tabledata-macros`, but a
/// manual implementation is a plain `match`:
///
/// ```
/// use tabledata_seeker::{Seekable, Value, Number};
///
/// struct Fornecedor {
///     nome: String,
///     ativo: bool,
/// }
///
/// impl Seekable for Fornecedor {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "nome" => Value::String(&self.nome),
///             "ativo" => Value::Bool(self.ativo),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of a field, or [`Value::None`] if the field doesn't
    /// exist or is empty.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Returns a function pointer usable wherever an accessor is expected.
    ///
    /// ```ignore
    /// let kept = clause.filter(&rows, Produto::accessor);
    /// ```
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

/// Helper trait for enums read through `#[seek(Enum)]`.
///
/// ```
/// use tabledata_seeker::SeekerEnum;
///
/// #[derive(Clone, Copy)]
/// enum TipoMovimentacao {
///     Entrada,
///     Saida,
/// }
///
/// impl SeekerEnum for TipoMovimentacao {
///     fn seeker_discriminant(&self) -> u32 {
///         match self {
///             TipoMovimentacao::Entrada => 0,
///             TipoMovimentacao::Saida => 1,
///         }
///     }
///
///     fn seeker_label(&self) -> &str {
///         match self {
///             TipoMovimentacao::Entrada => "ENTRADA",
///             TipoMovimentacao::Saida => "SAIDA",
///         }
///     }
/// }
/// ```
pub trait SeekerEnum {
    /// Stable discriminant. Use explicit values rather than declaration order.
    fn seeker_discriminant(&self) -> u32;

    /// Label used when the variant is displayed or text-matched.
    fn seeker_label(&self) -> &str;
}

/// Helper trait for types read through `#[seek(Timestamp)]`.
pub trait SeekerTimestamp {
    fn seeker_timestamp(&self) -> Timestamp;
}

impl SeekerTimestamp for i64 {
    fn seeker_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl SeekerTimestamp for u64 {
    fn seeker_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self as i64)
    }
}

impl SeekerTimestamp for Timestamp {
    fn seeker_timestamp(&self) -> Timestamp {
        *self
    }
}

impl SeekerTimestamp for std::time::SystemTime {
    fn seeker_timestamp(&self) -> Timestamp {
        match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(elapsed) => Timestamp::from_millis(elapsed.as_millis() as i64),
            Err(before) => Timestamp::from_millis(-(before.duration().as_millis() as i64)),
        }
    }
}

impl<T: Seekable> Seekable for &T {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        (**self).seeker_field_value(field)
    }
}
