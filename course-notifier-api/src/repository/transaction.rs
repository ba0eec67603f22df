use super::Error;
use futures_util::future::BoxFuture;
use mongodb::ClientSession;
use std::future::Future;

type AfterCommitHook = Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send>;

///
/// Unit of work spanning repository writes.
///
/// Hooks registered with [Transaction::after_commit] run only
/// after [Transaction::commit] succeeds. Rollback, failed commit
/// or dropping the transaction discards them.
///
/// Without session every write commits on its own, but hooks
/// still wait for [Transaction::commit].
///
pub struct Transaction {
    session: Option<ClientSession>,
    after_commit: Vec<AfterCommitHook>,
}

impl Transaction {
    /// Session must already have started transaction
    pub fn new(session: Option<ClientSession>) -> Self {
        Self {
            session,
            after_commit: Vec::new(),
        }
    }

    pub fn session(&mut self) -> Option<&mut ClientSession> {
        self.session.as_mut()
    }

    pub fn after_commit<F, Fut>(&mut self, hook: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.after_commit.push(Box::new(move || Box::pin(hook())));
    }

    ///
    /// Commits session transaction and then runs hooks
    /// in registration order.
    ///
    /// ### Errors
    /// - [Error::Mongo] when commit fails, hooks are not run
    ///
    pub async fn commit(mut self) -> Result<(), Error> {
        if let Some(session) = self.session.as_mut() {
            session.commit_transaction().await?;
        }

        let hooks = std::mem::take(&mut self.after_commit);
        tracing::trace!(hooks = hooks.len(), "transaction committed");

        for hook in hooks {
            hook().await;
        }

        Ok(())
    }

    pub async fn rollback(mut self) -> Result<(), Error> {
        self.after_commit.clear();

        if let Some(session) = self.session.as_mut() {
            session.abort_transaction().await?;
        }

        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.after_commit.is_empty() {
            tracing::debug!(
                discarded = self.after_commit.len(),
                "transaction dropped without commit"
            );
        }
    }
}
