/// Decides whether an actor's changes are worth a notification.
pub trait ActorFilter: Send + Sync {
    fn matches(&self, actor: &str) -> bool;
}

/// Matches when the needle appears anywhere in the actor, so
/// `notalice@xyz.com.evil` passes a `@xyz.com` filter too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringFilter {
    needle: String,
}

impl SubstringFilter {
    pub fn new<T: Into<String>>(needle: T) -> Self {
        SubstringFilter {
            needle: needle.into(),
        }
    }
}

impl ActorFilter for SubstringFilter {
    fn matches(&self, actor: &str) -> bool {
        actor.contains(&self.needle)
    }
}
