use crate::config::JoinConfig;
use crate::error::{JoinError, JoinResult};
use crate::fragment::{Fragment, IntoFragment};
use crate::param::{IntoParams, Param};
use std::fmt;
use tokio_postgres::types::ToSql;

/// A delimited text builder that collects parameters alongside its text.
///
/// `Join` inserts its delimiter between fragments (never before the first,
/// never after the last) and appends each call's parameters in call order.
///
/// Failures are latched: `add` always returns normally, the first failure is
/// kept, and everything after it is dropped. The failure surfaces from
/// [`Join::end`], [`Join::try_end`] or [`Join::must_end`].
#[must_use]
#[derive(Debug, Clone)]
pub struct Join {
    delimiter: String,
    text: String,
    params: Vec<Param>,
    error: Option<JoinError>,
    max_len: Option<usize>,
}

impl Join {
    /// Create a new builder joining fragments with `delimiter`.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            text: String::new(),
            params: Vec::new(),
            error: None,
            max_len: None,
        }
    }

    /// Create a builder from a [`JoinConfig`].
    pub fn with_config(config: JoinConfig) -> Self {
        let JoinConfig {
            delimiter,
            max_len,
            capacity,
        } = config;
        let capacity = max_len.map_or(capacity, |max| capacity.min(max));
        Self {
            delimiter,
            text: String::with_capacity(capacity),
            params: Vec::new(),
            error: None,
            max_len,
        }
    }

    /// Append a fragment with no parameters.
    ///
    /// `fragment` can be a string, another [`Join`], a primitive value, or an
    /// explicit [`Fragment`] (see [`Fragment::display`] and [`Fragment::debug`]).
    pub fn add<'a>(&mut self, fragment: impl IntoFragment<'a>) -> &mut Self {
        self.push_fragment(fragment.into_fragment(), Vec::new());
        self
    }

    /// Append a fragment followed by its parameters.
    ///
    /// # Example
    /// ```ignore
    /// let mut q = sqljoin::join(" AND ");
    /// q.add_with("price > ?", (5_i32,)).add_with("price < ?", (500_i32,));
    /// ```
    pub fn add_with<'a>(
        &mut self,
        fragment: impl IntoFragment<'a>,
        params: impl IntoParams,
    ) -> &mut Self {
        self.push_fragment(fragment.into_fragment(), params.into_params());
        self
    }

    /// Append a fragment and return `self` (consuming version of [`add`]).
    ///
    /// Useful when the builder is itself going to be nested:
    ///
    /// ```ignore
    /// let filters = sqljoin::join(" AND ").then("active").then_with("age > ?", (18_i32,));
    /// ```
    ///
    /// [`add`]: Join::add
    pub fn then<'a>(mut self, fragment: impl IntoFragment<'a>) -> Self {
        self.add(fragment);
        self
    }

    /// Append a fragment with parameters and return `self` (consuming version of [`add_with`]).
    ///
    /// [`add_with`]: Join::add_with
    pub fn then_with<'a>(
        mut self,
        fragment: impl IntoFragment<'a>,
        params: impl IntoParams,
    ) -> Self {
        self.add_with(fragment, params);
        self
    }

    /// Return the joined text, the parameters and the latched failure, if any.
    ///
    /// Never mutates the builder; calling it twice returns the same values.
    pub fn end(&self) -> (String, Vec<Param>, Option<JoinError>) {
        (self.text.clone(), self.params.clone(), self.error.clone())
    }

    /// Like [`Join::end`] but returns the latched failure as `Err`.
    pub fn try_end(&self) -> JoinResult<(String, Vec<Param>)> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok((self.text.clone(), self.params.clone())),
        }
    }

    /// Like [`Join::end`] but panics if a failure was latched.
    ///
    /// # Panics
    /// Panics with the failure's message.
    pub fn must_end(&self) -> (String, Vec<Param>) {
        if let Some(err) = &self.error {
            panic!("sqljoin: {err}");
        }
        (self.text.clone(), self.params.clone())
    }

    /// The delimiter fixed at construction.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The text joined so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parameters collected so far.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(Param::as_sql).collect()
    }

    /// The latched failure, if any.
    pub fn error(&self) -> Option<&JoinError> {
        self.error.as_ref()
    }

    /// Whether a failure has been latched.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Length of the joined text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether no text has been written yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push_fragment(&mut self, fragment: Fragment<'_>, params: Vec<Param>) {
        if self.is_failed() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "sqljoin",
                kind = fragment.kind(),
                "dropping fragment on failed join"
            );
            return;
        }

        match fragment {
            Fragment::Nested(nested) => {
                if let Some(err) = nested.error() {
                    self.latch(JoinError::Nested(Box::new(err.clone())));
                    return;
                }
                if let Err(err) = self.append(nested.text()) {
                    self.latch(err);
                    return;
                }
                self.params.extend(nested.params().iter().cloned());
                self.params.extend(params);
            }
            Fragment::Text(text) => self.push_text(&text, params),
            Fragment::Display(value) => self.push_rendered(format_args!("{value}"), params),
            Fragment::Debug(value) => self.push_rendered(format_args!("{value:?}"), params),
        }
    }

    /// Render once into a local buffer. A formatter error is latched, not panicked on.
    fn push_rendered(&mut self, args: fmt::Arguments<'_>, params: Vec<Param>) {
        let mut rendered = String::new();
        match fmt::Write::write_fmt(&mut rendered, args) {
            Ok(()) => self.push_text(&rendered, params),
            Err(_) => self.latch(JoinError::Render),
        }
    }

    fn push_text(&mut self, text: &str, params: Vec<Param>) {
        match self.append(text) {
            Ok(()) => self.params.extend(params),
            Err(err) => self.latch(err),
        }
    }

    /// Write `text` after the delimiter, unless nothing has been written yet.
    ///
    /// The check is on the current text length, not on the number of calls: an
    /// empty first fragment leaves the text empty, so the next one gets no prefix.
    pub(super) fn append(&mut self, text: &str) -> JoinResult<()> {
        let prefix = if self.text.is_empty() {
            ""
        } else {
            self.delimiter.as_str()
        };

        let additional = prefix.len() + text.len();
        if let Some(limit) = self.max_len {
            let attempted = self.text.len() + additional;
            if attempted > limit {
                return Err(JoinError::capacity(limit, attempted));
            }
        }

        self.text.try_reserve(additional)?;
        self.text.push_str(prefix);
        self.text.push_str(text);
        Ok(())
    }

    /// Record `err` unless a failure is already latched. The first failure wins.
    pub(super) fn latch(&mut self, err: JoinError) {
        if self.error.is_some() {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqljoin",
            error = %err,
            len = self.text.len(),
            params = self.params.len(),
            "join failed; later fragments are dropped"
        );
        self.error = Some(err);
    }
}

impl Default for Join {
    fn default() -> Self {
        Self::new("")
    }
}
