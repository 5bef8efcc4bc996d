// Inference endpoints
//
// The DDL example map binds recorded clip filenames to the keyword they
// demonstrate; the discriminative class list is what the model actually
// recognizes. Keywords are derived from examples server-side, so a write
// to examples changes what `classes` returns on the next model reload.

use std::collections::BTreeMap;

use crate::client::FridayClient;
use crate::error::Error;

const EXAMPLES_PATH: &str = "/friday-inference/tensorflow-models/ddl/examples";
const CLASSES_PATH: &str = "/friday-inference/tensorflow-models/discriminative/classes";

impl FridayClient {
    /// Fetch the clip-file to keyword example map.
    ///
    /// `GET /friday-inference/tensorflow-models/ddl/examples`
    pub async fn examples(&self) -> Result<BTreeMap<String, String>, Error> {
        self.get_json(EXAMPLES_PATH).await
    }

    /// Replace the example map.
    ///
    /// `PUT /friday-inference/tensorflow-models/ddl/examples`
    pub async fn set_examples(&self, examples: &BTreeMap<String, String>) -> Result<(), Error> {
        self.put_json(EXAMPLES_PATH, examples).await
    }

    /// Fetch the classifier's class list.
    ///
    /// `GET /friday-inference/tensorflow-models/discriminative/classes`
    ///
    /// The first entry is the model's silence/background class, which is
    /// not a user keyword; it is stripped here rather than by every
    /// caller.
    pub async fn classes(&self) -> Result<Vec<String>, Error> {
        let mut classes: Vec<String> = self.get_json(CLASSES_PATH).await?;
        if !classes.is_empty() {
            classes.remove(0);
        }
        Ok(classes)
    }
}
