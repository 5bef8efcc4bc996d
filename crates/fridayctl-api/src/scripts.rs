// Script-vendor endpoints
//
// The scripts vendor executes shell/python scripts when their bound
// keyword is recognized. `bound` is the keyword to script-list map,
// `all` is everything present in the device's script directory.

use std::collections::BTreeMap;

use crate::client::FridayClient;
use crate::error::Error;

impl FridayClient {
    /// Fetch the keyword to script-list bindings.
    ///
    /// `GET /friday-vendor/scripts/bound`
    pub async fn bound_scripts(&self) -> Result<BTreeMap<String, Vec<String>>, Error> {
        self.get_json("/friday-vendor/scripts/bound").await
    }

    /// Replace the keyword to script-list bindings.
    ///
    /// `PUT /friday-vendor/scripts/bound`
    pub async fn set_bound_scripts(
        &self,
        bound: &BTreeMap<String, Vec<String>>,
    ) -> Result<(), Error> {
        self.put_json("/friday-vendor/scripts/bound", bound).await
    }

    /// Fetch every script available on the device.
    ///
    /// `GET /friday-vendor/scripts/all`
    pub async fn all_scripts(&self) -> Result<Vec<String>, Error> {
        self.get_json("/friday-vendor/scripts/all").await
    }
}
