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

//! Keep the PO files of several locales in sync and export them as
//! JSON.
//!
//! `i18n-sync sync widget/ dashboard/` merges every `<locale>.po` in
//! the given directories against `en-US.po`, rewrites them, and
//! writes `<locale>.json` and `<locale>.js` files for every locale.
//!
//! `i18n-sync json-to-po en-US.json fr.json fr.po` goes the other
//! way and rebuilds a PO file from two JSON exports.

use std::path::PathBuf;

use clap::Parser;
use i18n_catalog_sync::pipeline::{import_json, sync_directory, SyncOptions, DEFAULT_BASE_LOCALE};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Parser)]
#[command(version, about)]
enum Args {
    /// Merge all locale PO files against the base locale and export JSON.
    Sync {
        /// Locale whose PO file defines the set of messages.
        #[arg(long, env = "I18N_SYNC_BASE_LOCALE", default_value = DEFAULT_BASE_LOCALE)]
        base_locale: String,
        /// Directories containing `<locale>.po` files.
        #[arg(required = true)]
        directories: Vec<PathBuf>,
    },
    /// Build a PO file from a base locale JSON export and a translated JSON export.
    JsonToPo {
        /// JSON export of the base locale.
        #[arg(id = "base.json")]
        base_json: PathBuf,
        /// JSON export of the translated locale.
        #[arg(id = "locale.json")]
        target_json: PathBuf,
        /// The PO file to write.
        #[arg(id = "output.po")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse() {
        Args::Sync {
            base_locale,
            directories,
        } => {
            let options = SyncOptions { base_locale };
            for directory in &directories {
                sync_directory(directory, &options)?;
            }
        }
        Args::JsonToPo {
            base_json,
            target_json,
            output,
        } => import_json(&base_json, &target_json, &output)?,
    }

    Ok(())
}
