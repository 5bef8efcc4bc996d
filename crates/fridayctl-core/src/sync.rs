//! Keyword/example synchronization.
//!
//! The device stores examples as a flat file-to-keyword map while the
//! editing surfaces want the inverse view, keyword to clip files. This
//! module derives that view and keeps the clip store tidy: a clip
//! referenced by no example is dead weight on the device's disk and is
//! deleted as a side effect of building the view.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::assistant::Assistant;
use crate::error::CoreError;

impl Assistant {
    /// Build the keyword to clip-files view and garbage-collect
    /// orphaned clips.
    ///
    /// Joins the example map with the known clip ids: only files that
    /// exist as clips appear in the view. Every clip referenced by no
    /// example is deleted from the device, one fire-and-forget request
    /// per orphan -- an individual failure is logged and skipped, never
    /// retried or aggregated.
    pub async fn keyword_clips(&self) -> Result<BTreeMap<String, Vec<String>>, CoreError> {
        let examples = self.examples().await?;
        let clips = self.clips().await?;

        let mut keywords: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (file, keyword) in &examples {
            if clips.iter().any(|id| id == file) {
                keywords
                    .entry(keyword.clone())
                    .or_default()
                    .push(file.clone());
            }
        }

        for id in clips {
            if !examples.contains_key(&id) {
                debug!("removing orphaned clip {id}");
                if let Err(err) = self.remove_clip(&id).await {
                    warn!("failed to remove orphaned clip {id}: {err}");
                }
            }
        }

        Ok(keywords)
    }

    /// Push a keyword to clip-files view back as the example map.
    ///
    /// Inverse projection of [`keyword_clips`](Self::keyword_clips):
    /// every (keyword, file) pair becomes a file-to-keyword entry. Goes
    /// through [`set_examples`](Self::set_examples) and therefore
    /// inherits its cache invalidation.
    pub async fn sync_keywords(
        &self,
        keywords: &BTreeMap<String, Vec<String>>,
    ) -> Result<(), CoreError> {
        let mut examples = BTreeMap::new();
        for (keyword, files) in keywords {
            for file in files {
                examples.insert(file.clone(), keyword.clone());
            }
        }
        self.set_examples(&examples).await
    }
}
