mod driver;
mod errors;

use derive_new::new;
pub use driver::*;
pub use errors::*;
use itertools::Itertools;
use log::debug;

use crate::config::{BindConfig, OutCursorNames};
use crate::types::TypeVocabulary;

static LOGGING_TARGET: &str = "bindrs::cursor";

/// Lets the driver size the result-set buffer itself.
const CURSOR_MAX_LENGTH: i32 = -1;

/// The result-set handle(s) a statement owns between prepare and fetch.
#[derive(Debug)]
pub enum CursorSet<C> {
    /// No OUT cursor is configured
    None,
    Single { name: String, cursor: C },
    /// Handles keyed by placeholder name, in configured order
    Multi(Vec<(String, C)>),
}

impl<C> CursorSet<C> {
    pub fn len(&self) -> usize {
        match self {
            CursorSet::None => 0,
            CursorSet::Single { .. } => 1,
            CursorSet::Multi(cursors) => cursors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &str) -> Option<&C> {
        match self {
            CursorSet::None => None,
            CursorSet::Single { name: n, cursor } if n == name => Some(cursor),
            CursorSet::Single { .. } => None,
            CursorSet::Multi(cursors) => cursors
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, cursor)| cursor),
        }
    }

    /// Mutable access to every handle together with its placeholder name.
    fn entries_mut(&mut self) -> Vec<(&str, &mut C)> {
        match self {
            CursorSet::None => vec![],
            CursorSet::Single { name, cursor } => vec![(name.as_str(), cursor)],
            CursorSet::Multi(cursors) => cursors
                .iter_mut()
                .map(|(name, cursor)| (name.as_str(), cursor))
                .collect(),
        }
    }
}

/// Creates the OUT cursor handle(s) of a statement and binds them to their
/// placeholders.
#[derive(new, Debug, Clone, Default)]
pub struct CursorLifecycle {
    names: OutCursorNames,
}

impl CursorLifecycle {
    pub fn from_config(config: &BindConfig) -> Self {
        Self::new(config.out_cursor.clone())
    }

    /// Configured placeholder names, each once, in configured order.
    fn placeholders(&self) -> Vec<&str> {
        self.names.placeholders().into_iter().unique().collect()
    }

    pub fn create<D: CursorDriver>(
        &self,
        driver: &D,
        conn: &D::Connection,
    ) -> Result<CursorSet<D::Cursor>, CursorError> {
        let placeholders = self.placeholders();
        if placeholders.is_empty() {
            return Ok(CursorSet::None);
        }
        let set = match &self.names {
            OutCursorNames::Single(name) => CursorSet::Single {
                name: name.clone(),
                cursor: driver
                    .new_cursor(conn)
                    .map_err(CursorError::creation_failed)?,
            },
            _ => {
                let cursors = placeholders
                    .into_iter()
                    .map(|name| {
                        driver
                            .new_cursor(conn)
                            .map(|cursor| (name.to_string(), cursor))
                            .map_err(CursorError::creation_failed)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                CursorSet::Multi(cursors)
            }
        };
        debug!(
            target: LOGGING_TARGET,
            "created {} OUT cursor(s)",
            set.len()
        );
        Ok(set)
    }

    /// Binds every handle of the set in configured order. A configured
    /// placeholder without a handle fails the set before any driver call.
    /// Otherwise all binds are attempted and the first failure is reported.
    pub fn bind<D: CursorDriver>(
        &self,
        driver: &D,
        stmt: &mut D::Statement,
        cursors: &mut CursorSet<D::Cursor>,
    ) -> Result<(), CursorError> {
        if let Some(missing) = self
            .placeholders()
            .into_iter()
            .find(|name| cursors.get(name).is_none())
        {
            return Err(CursorError::bind_failed(
                &format!(":{}", missing),
                DriverError::new("no cursor handle was created".to_string(), 0),
            ));
        }

        let type_code = TypeVocabulary::result_set_tag().code();
        let mut failure = None;
        for (name, cursor) in cursors.entries_mut() {
            let placeholder = format!(":{}", name);
            debug!(target: LOGGING_TARGET, "bind OUT cursor {}", placeholder);
            if let Err(err) =
                driver.bind_cursor(stmt, &placeholder, cursor, CURSOR_MAX_LENGTH, type_code)
            {
                failure.get_or_insert_with(|| CursorError::bind_failed(&placeholder, err));
            }
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
