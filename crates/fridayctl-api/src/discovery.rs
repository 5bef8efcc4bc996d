// Discovery endpoints
//
// The discovery service holds the user-visible device name shown by the
// network scanner pages.

use tracing::debug;

use crate::client::FridayClient;
use crate::error::Error;
use crate::types::NameMessage;

impl FridayClient {
    /// Fetch the device name.
    ///
    /// `GET /friday-discovery/name`
    pub async fn device_name(&self) -> Result<String, Error> {
        let msg: NameMessage = self.get_json("/friday-discovery/name").await?;
        Ok(msg.name)
    }

    /// Rename the device.
    ///
    /// `PUT /friday-discovery/name` with body `{"name": ...}`
    pub async fn set_device_name(&self, name: &str) -> Result<(), Error> {
        debug!("renaming device to {name:?}");
        self.put_json(
            "/friday-discovery/name",
            &NameMessage { name: name.into() },
        )
        .await
    }
}
