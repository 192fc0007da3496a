//! Command execution against a set of providers.

use std::future::Future;

use log::info;

use super::commands::Command;
use super::format;
use crate::error::{AstroError, AstroResult};
use crate::providers::config::QuerySettings;
use crate::providers::Providers;
use crate::services::{nearest, observable_objects};

/// Providers plus query settings; one per prompt or one-shot run.
#[derive(Debug, Clone)]
pub struct Session {
    providers: Providers,
    settings: QuerySettings,
}

impl Session {
    pub fn new(providers: Providers, settings: QuerySettings) -> Self {
        Self {
            providers,
            settings,
        }
    }

    /// Run `command` and return the lines to print.
    ///
    /// Provider-backed commands are bounded by the configured timeout.
    pub async fn execute(&self, command: &Command) -> AstroResult<Vec<String>> {
        match command {
            Command::Sky { location, instant } => {
                info!("sky for {} at {}", location, instant);
                let set = self
                    .bounded(observable_objects(
                        self.providers.ephemeris.as_ref(),
                        self.providers.catalog.as_ref(),
                        location,
                        *instant,
                        self.settings.magnitude_limit,
                    ))
                    .await?;
                Ok(format::observable_lines(&set, location, instant))
            }
            Command::Locate {
                location,
                instant,
                altitude,
                azimuth,
            } => {
                info!(
                    "locate around alt {} az {} for {} at {}",
                    altitude, azimuth, location, instant
                );
                let matches = self
                    .bounded(nearest(
                        self.providers.catalog.as_ref(),
                        location,
                        *instant,
                        *altitude,
                        *azimuth,
                        self.settings.magnitude_limit,
                        self.settings.nearest_count,
                    ))
                    .await?;
                Ok(format::ranked_lines(&matches, *altitude, *azimuth))
            }
            Command::Research { id } => {
                info!("research {}", id.designation());
                let details = self.bounded(self.providers.details.details(*id)).await?;
                Ok(match details {
                    Some(details) => format::details_lines(&details),
                    None => vec![format!("No information found for {}", id.designation())],
                })
            }
            Command::Help => Ok(format::help_lines()),
            Command::Exit => Ok(vec!["Bye".to_string()]),
        }
    }

    async fn bounded<T, F>(&self, future: F) -> AstroResult<T>
    where
        F: Future<Output = AstroResult<T>>,
    {
        tokio::time::timeout(self.settings.timeout(), future)
            .await
            .map_err(|_| AstroError::Timeout(self.settings.timeout_secs))?
    }
}
