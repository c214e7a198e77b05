use seqkit_core::{Key, Pairs, Stage, StageKind};
use tracing::debug;

/// Invokes `provider` on every pull and yields what it returns, forever.
///
/// Keys are positions starting at 0. Like [`crate::Seed`] it must be
/// bounded downstream before a terminal operation.
pub struct Call<F> {
    provider: F,
}

impl<F> Call<F> {
    pub fn new(provider: F) -> Self {
        Self { provider }
    }
}

impl<'a, V, F> Stage<'a, V> for Call<F>
where
    V: 'a,
    F: FnMut() -> V + 'a,
{
    fn label(&self) -> &'static str {
        "Call"
    }

    fn kind(&self) -> StageKind {
        StageKind::Generative
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        debug!("call traversal started");
        let Self { provider } = *self;
        Box::new(
            std::iter::repeat_with(provider)
                .enumerate()
                .map(|(i, value)| (Key::Index(i), value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeats_provider() {
        let pairs: Vec<_> = Box::new(Call::new(|| 1)).traverse().take(3).collect();
        assert_eq!(
            pairs,
            vec![(Key::Index(0), 1), (Key::Index(1), 1), (Key::Index(2), 1)]
        );
    }

    #[test]
    fn test_provider_runs_once_per_pull() {
        let mut counter = 0;
        let pairs: Vec<_> = Box::new(Call::new(|| {
            counter += 1;
            counter
        }))
        .traverse()
        .take(2)
        .collect();
        assert_eq!(pairs, vec![(Key::Index(0), 1), (Key::Index(1), 2)]);
        assert_eq!(counter, 2);
    }
}
