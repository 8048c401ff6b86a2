//! Parameter storage carried alongside the joined text.

use std::fmt;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly, opaque parameter value.
///
/// Composing one builder into another copies the parameter list, not the
/// values: the `Arc` is shared and the values are never mutated.
#[derive(Clone)]
pub struct Param(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_sql(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Values that can be appended as the parameters of one `add_with` call.
///
/// Implemented for `()`, tuples of up to eight `ToSql` values, and
/// collections of [`Param`].
pub trait IntoParams {
    fn into_params(self) -> Vec<Param>;
}

impl IntoParams for () {
    fn into_params(self) -> Vec<Param> {
        Vec::new()
    }
}

impl IntoParams for Param {
    fn into_params(self) -> Vec<Param> {
        vec![self]
    }
}

impl IntoParams for Option<Param> {
    fn into_params(self) -> Vec<Param> {
        self.into_iter().collect()
    }
}

impl IntoParams for Vec<Param> {
    fn into_params(self) -> Vec<Param> {
        self
    }
}

impl<const N: usize> IntoParams for [Param; N] {
    fn into_params(self) -> Vec<Param> {
        self.into()
    }
}

macro_rules! impl_into_params_for_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> IntoParams for ($($name,)+)
        where
            $($name: ToSql + Send + Sync + 'static,)+
        {
            #[allow(non_snake_case)]
            fn into_params(self) -> Vec<Param> {
                let ($($name,)+) = self;
                vec![$(Param::new($name)),+]
            }
        }
    };
}

impl_into_params_for_tuple!(A);
impl_into_params_for_tuple!(A, B);
impl_into_params_for_tuple!(A, B, C);
impl_into_params_for_tuple!(A, B, C, D);
impl_into_params_for_tuple!(A, B, C, D, E);
impl_into_params_for_tuple!(A, B, C, D, E, F);
impl_into_params_for_tuple!(A, B, C, D, E, F, G);
impl_into_params_for_tuple!(A, B, C, D, E, F, G, H);

/// Build a `Vec<Param>` from a list of `ToSql` values.
///
/// ```ignore
/// let q = sqljoin::join(" AND ").add_with("a = ? OR b = ?", sqljoin::params![1_i32, "x"]);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Param::new($value)),+]
    };
}
