use super::Effect;

/// Plays an [`Effect`] and resolves once it has visually finished.
///
/// Implementations attach the effect's element, run it, and detach it
/// again before resolving. The browser implementation awaits the Web
/// Animations `finished` promise, so completion tracks the real animation
/// rather than a timer.
#[async_trait::async_trait(?Send)]
pub trait Animator {
    async fn play(&self, effect: &Effect) -> anyhow::Result<()>;
}
