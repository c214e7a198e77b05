use seqkit_core::{Pairs, Sequence, Stage, StageKind};
use std::cell::Cell;
use std::rc::Rc;

/// Upper bound on how many pairs may be pulled from a source.
///
/// Shared between a facade and the [`Guard`] sitting on its source, so the
/// limit can be set before or after stages are chained on top.
#[derive(Debug, Default)]
pub struct PullBudget {
    limit: Cell<Option<usize>>,
}

impl PullBudget {
    pub fn new(limit: Option<usize>) -> Rc<Self> {
        Rc::new(Self {
            limit: Cell::new(limit),
        })
    }

    pub fn set(&self, limit: Option<usize>) {
        self.limit.set(limit);
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit.get()
    }
}

/// Counts pairs pulled from its upstream source and panics past the budget.
///
/// It sits directly on the source, so stages that swallow or buffer pairs
/// (a rejecting filter, sort, unique) cannot hide an unbounded pull. Its
/// lineage is the upstream's own.
pub struct Guard<'a, V> {
    upstream: Sequence<'a, V>,
    budget: Rc<PullBudget>,
}

impl<'a, V: 'a> Guard<'a, V> {
    pub fn new(upstream: Sequence<'a, V>, budget: Rc<PullBudget>) -> Self {
        Self { upstream, budget }
    }
}

impl<'a, V: 'a> Stage<'a, V> for Guard<'a, V> {
    fn label(&self) -> &'static str {
        "Guard"
    }

    fn kind(&self) -> StageKind {
        self.upstream.kind().unwrap_or(StageKind::Stateless)
    }

    fn lineage(&self) -> Vec<&'static str> {
        self.upstream.lineage()
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        let Self { upstream, budget } = *self;
        Box::new(upstream.into_pairs().enumerate().map(move |(i, pair)| {
            if let Some(max) = budget.limit() {
                if i >= max {
                    panic!("sequence source pulled more than {} items", max);
                }
            }
            pair
        }))
    }
}
