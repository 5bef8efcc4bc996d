// Recording endpoints
//
// The recorder service manages short WAV clips captured on the device.
// Clips are identified by filename; `new` allocates an empty clip and
// `listen` streams the audio back.

use bytes::Bytes;
use serde::Serialize;

use crate::client::FridayClient;
use crate::error::Error;
use crate::types::{ClipList, ClipRef};

#[derive(Serialize)]
struct RenameClip<'a> {
    old_id: &'a str,
    new_id: &'a str,
}

impl FridayClient {
    /// List all recorded clip ids.
    ///
    /// `GET /record/clips`
    pub async fn clips(&self) -> Result<ClipList, Error> {
        self.get_json("/record/clips").await
    }

    /// Record a new clip, returning its id.
    ///
    /// `GET /record/new`
    pub async fn new_clip(&self) -> Result<ClipRef, Error> {
        self.get_json("/record/new").await
    }

    /// Stream a clip's WAV audio.
    ///
    /// `POST /record/listen` with body `{"id": ...}`
    pub async fn listen(&self, id: &str) -> Result<Bytes, Error> {
        self.post_bytes("/record/listen", &ClipRef { id: id.into() })
            .await
    }

    /// Delete a clip.
    ///
    /// `PUT /record/remove` with body `{"id": ...}`
    pub async fn remove_clip(&self, id: &str) -> Result<(), Error> {
        self.put_json("/record/remove", &ClipRef { id: id.into() })
            .await
    }

    /// Rename a clip.
    ///
    /// `PUT /record/rename` with body `{"old_id": ..., "new_id": ...}`
    pub async fn rename_clip(&self, old_id: &str, new_id: &str) -> Result<(), Error> {
        self.put_json("/record/rename", &RenameClip { old_id, new_id })
            .await
    }
}
