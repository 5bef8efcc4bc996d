use tokio::sync::watch;
use uuid::Uuid;

/// A voice keyword bound to an ordered sequence of script paths.
///
/// Built from the device's `bound` scripts map by the bijection layer.
/// Every setter bumps the revision channel after mutating the field, so
/// subscribers re-render without the entity knowing who renders it.
#[derive(Debug)]
pub struct Command {
    id: Uuid,
    keyword: String,
    scripts: Vec<String>,
    revision: watch::Sender<u64>,
}

impl Command {
    pub fn new(keyword: impl Into<String>, scripts: Vec<String>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            id: Uuid::new_v4(),
            keyword: keyword.into(),
            scripts,
            revision,
        }
    }

    /// Generated UI-only identifier. Never serialized.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.bump();
    }

    pub fn set_scripts(&mut self, scripts: Vec<String>) {
        self.scripts = scripts;
        self.bump();
    }

    /// Append one script to the sequence.
    pub fn push_script(&mut self, script: impl Into<String>) {
        self.scripts.push(script.into());
        self.bump();
    }

    /// Subscribe to mutations. The received value is a revision counter;
    /// any change means "re-read the entity".
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn setters_bump_the_revision() {
        let mut cmd = Command::new("hello", vec!["what.py".into()]);
        let rx = cmd.subscribe();
        assert_eq!(*rx.borrow(), 0);

        cmd.set_keyword("hi");
        cmd.push_script("who.py");

        assert_eq!(*rx.borrow(), 2);
        assert_eq!(cmd.keyword(), "hi");
        assert_eq!(cmd.scripts(), ["what.py", "who.py"]);
    }

    #[test]
    fn ids_are_unique_per_entity() {
        let a = Command::new("x", vec![]);
        let b = Command::new("x", vec![]);
        assert_ne!(a.id(), b.id());
    }
}
