//! Deferred, composable queries over an in-memory source.
//!
//! A [`Query`] is a chain of operators paired with a [`QueryExpr`] describing
//! that chain. Nothing is read from the source until the query is enumerated,
//! so a query built before a mutation observes it when executed afterwards.

use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;

/// Boxed row iterator produced when a query executes.
pub type Rows<T> = Box<dyn Iterator<Item = T> + Send>;

/// Reads the current contents of a backing source.
pub type Source<T> = Arc<dyn Fn() -> Vec<T> + Send + Sync>;

type Producer<T> = Arc<dyn Fn() -> Rows<T> + Send + Sync>;

// ── ElementType ──────────────────────────────────────────────────────────────

/// Runtime identity of a query's element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ── QueryExpr ────────────────────────────────────────────────────────────────

/// Expression tree describing how a query was composed.
///
/// Never interpreted; it exists for introspection by code that inspects the
/// shape of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    Source(ElementType),
    Filter(Box<QueryExpr>),
    Select {
        input: Box<QueryExpr>,
        output: ElementType,
    },
    OrderBy(Box<QueryExpr>),
    Skip {
        input: Box<QueryExpr>,
        count: usize,
    },
    Take {
        input: Box<QueryExpr>,
        count: usize,
    },
}

impl QueryExpr {
    /// Element type produced by this expression.
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Source(ty) => *ty,
            Self::Select { output, .. } => *output,
            Self::Filter(input) | Self::OrderBy(input) => input.element_type(),
            Self::Skip { input, .. } | Self::Take { input, .. } => input.element_type(),
        }
    }

    /// Element type of the root source.
    pub fn source_type(&self) -> ElementType {
        match self {
            Self::Source(ty) => *ty,
            Self::Filter(input) | Self::OrderBy(input) => input.source_type(),
            Self::Select { input, .. } | Self::Skip { input, .. } | Self::Take { input, .. } => {
                input.source_type()
            }
        }
    }

    pub fn is_source(&self) -> bool {
        matches!(self, Self::Source(_))
    }
}

impl fmt::Display for QueryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(ty) => write!(f, "{ty}"),
            Self::Filter(input) => write!(f, "{input}.filter()"),
            Self::Select { input, output } => write!(f, "{input}.select::<{output}>()"),
            Self::OrderBy(input) => write!(f, "{input}.order_by()"),
            Self::Skip { input, count } => write!(f, "{input}.skip({count})"),
            Self::Take { input, count } => write!(f, "{input}.take({count})"),
        }
    }
}

// ── Query ────────────────────────────────────────────────────────────────────

/// Lazily evaluated query over an in-memory source.
pub struct Query<T> {
    producer: Producer<T>,
    expr: QueryExpr,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
            expr: self.expr.clone(),
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query").field("expr", &self.expr).finish()
    }
}

impl<T: Send + 'static> Query<T> {
    /// Root query reading `source` each time it is enumerated.
    pub fn from_source(source: Source<T>) -> Self {
        Self {
            producer: Arc::new(move || -> Rows<T> { Box::new(source().into_iter()) }),
            expr: QueryExpr::Source(ElementType::of::<T>()),
        }
    }

    pub fn expression(&self) -> &QueryExpr {
        &self.expr
    }

    pub fn element_type(&self) -> ElementType {
        self.expr.element_type()
    }

    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let Self { producer, expr } = self;
        let predicate = Arc::new(predicate);
        Self {
            producer: Arc::new(move || -> Rows<T> {
                let predicate = Arc::clone(&predicate);
                Box::new(producer().filter(move |row| predicate(row)))
            }),
            expr: QueryExpr::Filter(Box::new(expr)),
        }
    }

    /// Project each row into a new shape.
    pub fn select<U, F>(self, projection: F) -> Query<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let Self { producer, expr } = self;
        let projection = Arc::new(projection);
        Query {
            producer: Arc::new(move || -> Rows<U> {
                let projection = Arc::clone(&projection);
                Box::new(producer().map(move |row| projection(row)))
            }),
            expr: QueryExpr::Select {
                input: Box::new(expr),
                output: ElementType::of::<U>(),
            },
        }
    }

    /// Stable ascending sort by `key`.
    pub fn order_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let Self { producer, expr } = self;
        Self {
            producer: Arc::new(move || -> Rows<T> {
                let mut rows: Vec<T> = producer().collect();
                rows.sort_by_key(|row| key(row));
                Box::new(rows.into_iter())
            }),
            expr: QueryExpr::OrderBy(Box::new(expr)),
        }
    }

    pub fn skip(self, count: usize) -> Self {
        let Self { producer, expr } = self;
        Self {
            producer: Arc::new(move || -> Rows<T> { Box::new(producer().skip(count)) }),
            expr: QueryExpr::Skip {
                input: Box::new(expr),
                count,
            },
        }
    }

    pub fn take(self, count: usize) -> Self {
        let Self { producer, expr } = self;
        Self {
            producer: Arc::new(move || -> Rows<T> { Box::new(producer().take(count)) }),
            expr: QueryExpr::Take {
                input: Box::new(expr),
                count,
            },
        }
    }

    /// Execute the query, reading the source as it is right now.
    pub fn rows(&self) -> Rows<T> {
        (self.producer)()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.rows().collect()
    }

    pub fn count(&self) -> usize {
        self.rows().count()
    }

    pub fn first(&self) -> Option<T> {
        self.rows().next()
    }

    pub fn any(&self) -> bool {
        self.first().is_some()
    }
}

impl<T: Send + 'static> IntoIterator for Query<T> {
    type Item = T;
    type IntoIter = Rows<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}
