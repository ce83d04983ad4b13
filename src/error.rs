// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not parse PO content: {0}")]
    Grammar(String),
    #[error("Could not decode {payload} JSON as a flat string map: {source}")]
    Json {
        payload: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Message {id:?} has an empty context, cannot derive a JSON key")]
    EmptyJsonKey { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
